//! # royal-store: Back-Office Data for Royal POS
//!
//! This crate owns the menu catalog, the staff roster and the deals list that
//! the dashboard screens read and edit. State lives in memory for the run and
//! starts from seed data embedded in the binary.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Royal POS Data Flow                              │
//! │                                                                         │
//! │  Dashboard Command (add_to_cart, search_menu, add_deal, ...)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   royal-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     Store     │    │  Repositories │    │  Seed data   │  │   │
//! │  │   │   (lib.rs)    │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ CatalogRepo   │    │ menu.json    │  │   │
//! │  │   │ catalog()     │◄───│ StaffRepo     │◄───│ staff.json   │  │   │
//! │  │   │ staff()       │    │ DealRepo      │    │ deals.json   │  │   │
//! │  │   │ deals()       │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use royal_store::Store;
//!
//! let store = Store::seeded().unwrap();
//! let menu = store.catalog().available();
//! assert!(menu.iter().any(|i| i.name == "Chicken Biryani"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};

pub use repository::catalog::{CatalogRepository, MenuFilter, NewMenuItem};
pub use repository::deals::{DealFilter, DealRepository, DealStatusFilter, NewDeal};
pub use repository::staff::{NewStaffMember, StaffFilter, StaffRepository};

// =============================================================================
// Store
// =============================================================================

/// All back-office repositories together.
///
/// Accessors hand out the individual repositories, the same way the
/// dashboard reaches `store.catalog().search(..)`.
#[derive(Debug, Clone, Default)]
pub struct Store {
    catalog: CatalogRepository,
    staff: StaffRepository,
    deals: DealRepository,
}

impl Store {
    /// Builds a store from explicit collections.
    pub fn new(catalog: CatalogRepository, staff: StaffRepository, deals: DealRepository) -> Self {
        Store {
            catalog,
            staff,
            deals,
        }
    }

    /// Builds a store from the embedded seed data.
    pub fn seeded() -> StoreResult<Self> {
        let (menu, staff, deals) = seed::load()?;
        Ok(Store::new(
            CatalogRepository::new(menu),
            StaffRepository::new(staff),
            DealRepository::new(deals),
        ))
    }

    pub fn catalog(&self) -> &CatalogRepository {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogRepository {
        &mut self.catalog
    }

    pub fn staff(&self) -> &StaffRepository {
        &self.staff
    }

    pub fn staff_mut(&mut self) -> &mut StaffRepository {
        &mut self.staff
    }

    pub fn deals(&self) -> &DealRepository {
        &self.deals
    }

    pub fn deals_mut(&mut self) -> &mut DealRepository {
        &mut self.deals
    }
}
