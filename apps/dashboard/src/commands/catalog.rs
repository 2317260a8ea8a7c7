//! # Catalog Commands
//!
//! Food-item screen and the billing menu.

use royal_core::MenuItem;
use royal_store::{MenuFilter, NewMenuItem};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::StoreState;

/// Every menu item, available or not.
pub fn list_menu(store: &StoreState) -> ApiResult<Vec<MenuItem>> {
    debug!("list_menu command");
    store.read(|s| s.catalog().list().to_vec())
}

/// Items that can be put on a bill.
pub fn billing_menu(store: &StoreState) -> ApiResult<Vec<MenuItem>> {
    debug!("billing_menu command");
    store.read(|s| s.catalog().available())
}

pub fn get_menu_item(store: &StoreState, id: &str) -> ApiResult<MenuItem> {
    debug!(id = %id, "get_menu_item command");
    store
        .read(|s| s.catalog().get(id).cloned())?
        .ok_or_else(|| ApiError::not_found("Menu item", id))
}

/// Search box + category dropdown.
pub fn search_menu(store: &StoreState, filter: &MenuFilter) -> ApiResult<Vec<MenuItem>> {
    debug!(query = %filter.query, category = ?filter.category, "search_menu command");
    Ok(store.read(|s| s.catalog().search(filter))??)
}

pub fn add_menu_item(store: &StoreState, input: NewMenuItem) -> ApiResult<MenuItem> {
    debug!(name = %input.name, "add_menu_item command");
    Ok(store.write(|s| s.catalog_mut().add(input))??)
}

pub fn update_menu_item(store: &StoreState, item: MenuItem) -> ApiResult<MenuItem> {
    debug!(id = %item.id, "update_menu_item command");
    Ok(store.write(|s| s.catalog_mut().update(item))??)
}

pub fn toggle_menu_item_availability(store: &StoreState, id: &str) -> ApiResult<MenuItem> {
    debug!(id = %id, "toggle_menu_item_availability command");
    Ok(store.write(|s| s.catalog_mut().toggle_availability(id))??)
}
