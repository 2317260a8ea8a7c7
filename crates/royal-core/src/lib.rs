//! # royal-core: Pure Billing Logic for Royal POS
//!
//! This crate holds the billing rules of the restaurant back office as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Royal POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard UI (external)                      │   │
//! │  │    Menu ──► Current Bill ──► Payment Method ──► Complete Bill   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/dashboard commands                      │   │
//! │  │    add_to_cart, set_payment_method, export_invoice, etc.       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ royal-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   cart    │  │    tax    │  │  invoice  │  │   │
//! │  │   │   Money   │  │   Cart    │  │ TaxPolicy │  │ Composer  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO ENVIRONMENT • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                royal-store (in-memory repositories)             │   │
//! │  │                   catalog, staff roster, deals                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, StaffMember, Deal, PaymentMethod)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart aggregator
//! - [`tax`] - Payment-method tax policy
//! - [`invoice`] - Invoice summary and document composition
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use royal_core::{Cart, FoodCategory, InvoiceComposer, MenuItem, Money, PaymentMethod};
//!
//! let biryani = MenuItem::new("f1", "Chicken Biryani", FoodCategory::MainCourse, Money::from_major(500));
//! let fries = MenuItem::new("f3", "French Fries", FoodCategory::Starter, Money::from_major(300));
//!
//! let mut cart = Cart::new();
//! cart.add_item(&biryani);
//! cart.add_item(&biryani);
//! cart.add_item(&fries);
//! cart.set_payment_method(PaymentMethod::Cash);
//!
//! let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
//! let summary = InvoiceComposer::default().compose(&cart, date);
//!
//! assert_eq!(summary.subtotal, Money::from_major(1300));
//! assert_eq!(summary.tax, Money::from_major(195));
//! assert_eq!(summary.total, Money::from_major(1495));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod invoice;
pub mod money;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartTotals};
pub use error::{CoreError, ValidationError};
pub use invoice::{InvoiceComposer, InvoiceDocument, InvoiceSummary};
pub use money::Money;
pub use tax::TaxPolicy;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Business name printed in the invoice header.
pub const DEFAULT_BUSINESS_NAME: &str = "Royal Food Point";

/// Currency symbol used on invoices and in the dashboard.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "Rs.";
