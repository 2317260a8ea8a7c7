//! # State Module
//!
//! Manages application state for the dashboard.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  StoreState  │  │  CartState   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<RwLock< │  │  Arc<Mutex<  │  │  business_name   │              │
//! │  │    Store     │  │    Cart      │  │  tax_policy      │              │
//! │  │  >>          │  │  >>          │  │  export_dir      │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: many readers, one writer                                │
//! │  • CartState: exclusive access; the only copy of the bill              │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod store;

pub use cart::CartState;
pub use config::ConfigState;
pub use store::StoreState;
