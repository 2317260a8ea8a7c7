//! # Catalog Repository
//!
//! Menu items shown on the food-item screen and the billing menu.
//!
//! ## Key Operations
//! - Listing (all items, or only those available for billing)
//! - Add / update with validation
//! - Availability toggle
//! - Name + category search

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::repository::matches_query;
use royal_core::validation::{normalize_search_query, validate_description, validate_name, validate_price};
use royal_core::{FoodCategory, MenuItem, Money};

/// Input for a new menu item; the id is generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub name: String,
    pub category: FoodCategory,
    pub price: Money,
    #[serde(default = "default_available")]
    pub is_available: bool,
    pub description: String,
}

fn default_available() -> bool {
    true
}

/// Search criteria for the catalog.
///
/// Both criteria must match. An empty query and `None` category match all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuFilter {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub category: Option<FoodCategory>,
}

/// Repository for menu items.
///
/// ## Usage
/// ```rust
/// use royal_store::MenuFilter;
/// use royal_core::FoodCategory;
///
/// let store = royal_store::Store::seeded().unwrap();
/// let drinks = store
///     .catalog()
///     .search(&MenuFilter { query: String::new(), category: Some(FoodCategory::Drinks) })
///     .unwrap();
/// assert!(drinks.iter().all(|i| i.category == FoodCategory::Drinks));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogRepository {
    items: Vec<MenuItem>,
}

impl CatalogRepository {
    /// Creates a repository holding `items` in display order.
    pub fn new(items: Vec<MenuItem>) -> Self {
        CatalogRepository { items }
    }

    /// All items in display order.
    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    /// Gets an item by id.
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Items that can be added to a bill.
    pub fn available(&self) -> Vec<MenuItem> {
        self.items.iter().filter(|i| i.is_available).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a menu item at the front of the list.
    ///
    /// ## Validation
    /// - Name required, at most 100 characters
    /// - Description required
    /// - Price must not be negative
    pub fn add(&mut self, input: NewMenuItem) -> StoreResult<MenuItem> {
        validate_item_fields(&input.name, &input.description, input.price)?;

        let item = MenuItem {
            id: format!("f{}", Uuid::new_v4().simple()),
            name: input.name.trim().to_string(),
            category: input.category,
            price: input.price,
            is_available: input.is_available,
            description: input.description.trim().to_string(),
        };

        debug!(id = %item.id, name = %item.name, "Adding menu item");
        self.items.insert(0, item.clone());
        Ok(item)
    }

    /// Replaces an existing item, keeping its position.
    pub fn update(&mut self, item: MenuItem) -> StoreResult<MenuItem> {
        validate_item_fields(&item.name, &item.description, item.price)?;

        let slot = self
            .items
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or_else(|| StoreError::not_found("Menu item", &item.id))?;

        debug!(id = %item.id, "Updating menu item");
        *slot = MenuItem {
            name: item.name.trim().to_string(),
            description: item.description.trim().to_string(),
            ..item
        };
        Ok(slot.clone())
    }

    /// Flips availability and returns the updated item.
    pub fn toggle_availability(&mut self, id: &str) -> StoreResult<MenuItem> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::not_found("Menu item", id))?;

        item.is_available = !item.is_available;
        debug!(id = %id, available = item.is_available, "Toggled menu item availability");
        Ok(item.clone())
    }

    /// Items whose name contains the query (case-insensitive) and whose
    /// category matches, in display order.
    pub fn search(&self, filter: &MenuFilter) -> StoreResult<Vec<MenuItem>> {
        let query = normalize_search_query(&filter.query)?;

        let items: Vec<MenuItem> = self
            .items
            .iter()
            .filter(|i| matches_query(&i.name, &query))
            .filter(|i| filter.category.map_or(true, |c| i.category == c))
            .cloned()
            .collect();

        debug!(query = %query, count = items.len(), "Searched catalog");
        Ok(items)
    }
}

fn validate_item_fields(name: &str, description: &str, price: Money) -> StoreResult<()> {
    validate_name("name", name)?;
    validate_description(description)?;
    validate_price("price", price)?;
    Ok(())
}
