//! # Commands Module
//!
//! All commands exposed to the dashboard UI.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── cart.rs       ◄─── Current bill manipulation
//! ├── invoice.rs    ◄─── Totals preview, document, export
//! ├── catalog.rs    ◄─── Food items
//! ├── staff.rs      ◄─── Staff roster
//! ├── deals.rs      ◄─── Deals
//! ├── config.rs     ◄─── Configuration retrieval
//! └── dashboard.rs  ◄─── Landing page counters
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState)
//!
//! // Needs the menu and the cart
//! fn add_to_cart(store: &StoreState, cart: &CartState, item_id: &str)
//!
//! // Needs the cart and configuration, writes a file
//! async fn export_invoice(cart: &CartState, config: &ConfigState, ...)
//! ```
//!
//! Every command returns data the UI can serialize straight to JSON, or an
//! [`ApiError`](crate::error::ApiError).

pub mod cart;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod deals;
pub mod invoice;
pub mod staff;
