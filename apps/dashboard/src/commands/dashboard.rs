//! # Dashboard Commands
//!
//! Counters shown on the landing page cards.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::{CartState, StoreState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_staff: usize,
    pub active_staff: usize,
    pub food_items: usize,
    pub available_items: usize,
    /// Deals switched on, regardless of their date window.
    pub active_deals: usize,
    /// Active deals whose window covers today.
    pub running_deals: usize,
    /// Distinct lines on the open bill.
    pub open_bill_lines: usize,
}

pub fn get_dashboard_stats(store: &StoreState, cart: &CartState) -> ApiResult<DashboardStats> {
    debug!("get_dashboard_stats command");
    stats_on(store, cart, Local::now().date_naive())
}

fn stats_on(store: &StoreState, cart: &CartState, today: NaiveDate) -> ApiResult<DashboardStats> {
    let open_bill_lines = cart.with_cart(|c| c.len())?;

    store.read(|s| DashboardStats {
        total_staff: s.staff().len(),
        active_staff: s.staff().active_count(),
        food_items: s.catalog().len(),
        available_items: s.catalog().available().len(),
        active_deals: s.deals().list().iter().filter(|d| d.is_active).count(),
        running_deals: s.deals().running_on(today).len(),
        open_bill_lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use royal_store::Store;

    #[test]
    fn test_seeded_stats() {
        let store = StoreState::new(Store::seeded().unwrap());
        let cart = CartState::new();
        let day = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();

        let stats = stats_on(&store, &cart, day).unwrap();
        assert_eq!(
            stats,
            DashboardStats {
                total_staff: 8,
                active_staff: 6,
                food_items: 8,
                available_items: 7,
                active_deals: 2,
                running_deals: 2,
                open_bill_lines: 0,
            }
        );
    }
}
