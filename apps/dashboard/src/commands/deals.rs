//! # Deal Commands
//!
//! Deals bundle menu items, so writes are checked against the catalog under
//! the same lock that performs them.

use royal_core::{Deal, MenuItem};
use royal_store::{CatalogRepository, DealFilter, NewDeal, Store};
use serde::Serialize;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::StoreState;

const UNKNOWN_ITEM: &str = "Unknown Item";

/// A deal card: the deal plus what the card derives from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealView {
    #[serde(flatten)]
    pub deal: Deal,
    /// Savings badge, whole percent.
    pub discount_percentage: i64,
    /// Names of the bundled items, in bundle order.
    pub item_names: Vec<String>,
}

impl DealView {
    fn new(deal: Deal, catalog: &CatalogRepository) -> Self {
        let item_names = deal
            .items_included
            .iter()
            .map(|id| {
                catalog
                    .get(id)
                    .map(|item: &MenuItem| item.name.clone())
                    .unwrap_or_else(|| UNKNOWN_ITEM.to_string())
            })
            .collect();

        DealView {
            discount_percentage: deal.discount_percentage(),
            item_names,
            deal,
        }
    }
}

pub fn list_deals(store: &StoreState) -> ApiResult<Vec<DealView>> {
    debug!("list_deals command");
    store.read(|s| views(s, s.deals().list().to_vec()))
}

pub fn search_deals(store: &StoreState, filter: &DealFilter) -> ApiResult<Vec<DealView>> {
    debug!(query = %filter.query, status = ?filter.status, "search_deals command");
    store.read(|s| -> ApiResult<_> { Ok(views(s, s.deals().search(filter)?)) })?
}

/// Creates a deal; every bundled id must be on the menu.
pub fn add_deal(store: &StoreState, input: NewDeal) -> ApiResult<DealView> {
    debug!(title = %input.title, items = input.items_included.len(), "add_deal command");

    store.write(|s| -> ApiResult<_> {
        check_items(s.catalog(), &input.items_included)?;
        let deal = s.deals_mut().add(input)?;
        Ok(DealView::new(deal, s.catalog()))
    })?
}

pub fn update_deal(store: &StoreState, deal: Deal) -> ApiResult<DealView> {
    debug!(id = %deal.id, "update_deal command");

    store.write(|s| -> ApiResult<_> {
        check_items(s.catalog(), &deal.items_included)?;
        let deal = s.deals_mut().update(deal)?;
        Ok(DealView::new(deal, s.catalog()))
    })?
}

pub fn toggle_deal(store: &StoreState, id: &str) -> ApiResult<DealView> {
    debug!(id = %id, "toggle_deal command");

    store.write(|s| -> ApiResult<_> {
        let deal = s.deals_mut().toggle_active(id)?;
        Ok(DealView::new(deal, s.catalog()))
    })?
}

pub fn delete_deal(store: &StoreState, id: &str) -> ApiResult<Deal> {
    debug!(id = %id, "delete_deal command");
    Ok(store.write(|s| s.deals_mut().delete(id))??)
}

fn views(store: &Store, deals: Vec<Deal>) -> Vec<DealView> {
    deals
        .into_iter()
        .map(|d| DealView::new(d, store.catalog()))
        .collect()
}

fn check_items(catalog: &CatalogRepository, ids: &[String]) -> ApiResult<()> {
    if let Some(missing) = ids.iter().find(|id| catalog.get(id).is_none()) {
        return Err(ApiError::validation(format!(
            "Deal includes unknown menu item: {}",
            missing
        )));
    }
    Ok(())
}
