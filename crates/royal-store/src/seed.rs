//! # Seed Data
//!
//! The starting catalog, roster and deals, embedded at compile time.
//!
//! Seed prices are written in whole rupees, the way the menu is printed, and
//! converted to [`Money`] on load.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::error::StoreResult;
use royal_core::{Deal, FoodCategory, MenuItem, Money, StaffMember};

const MENU_JSON: &str = include_str!("../data/menu.json");
const STAFF_JSON: &str = include_str!("../data/staff.json");
const DEALS_JSON: &str = include_str!("../data/deals.json");

#[derive(Debug, Deserialize)]
struct MenuRecord {
    id: String,
    name: String,
    category: FoodCategory,
    price: i64,
    is_available: bool,
    description: String,
}

impl From<MenuRecord> for MenuItem {
    fn from(r: MenuRecord) -> Self {
        MenuItem {
            id: r.id,
            name: r.name,
            category: r.category,
            price: Money::from_major(r.price),
            is_available: r.is_available,
            description: r.description,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DealRecord {
    id: String,
    title: String,
    items_included: Vec<String>,
    deal_price: i64,
    regular_price: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    is_active: bool,
    description: String,
}

impl From<DealRecord> for Deal {
    fn from(r: DealRecord) -> Self {
        Deal {
            id: r.id,
            title: r.title,
            items_included: r.items_included,
            deal_price: Money::from_major(r.deal_price),
            regular_price: Money::from_major(r.regular_price),
            start_date: r.start_date,
            end_date: r.end_date,
            is_active: r.is_active,
            description: r.description,
        }
    }
}

pub fn menu_items() -> StoreResult<Vec<MenuItem>> {
    let records: Vec<MenuRecord> = serde_json::from_str(MENU_JSON)?;
    Ok(records.into_iter().map(MenuItem::from).collect())
}

pub fn staff_members() -> StoreResult<Vec<StaffMember>> {
    Ok(serde_json::from_str(STAFF_JSON)?)
}

pub fn deals() -> StoreResult<Vec<Deal>> {
    let records: Vec<DealRecord> = serde_json::from_str(DEALS_JSON)?;
    Ok(records.into_iter().map(Deal::from).collect())
}

/// Loads all three collections.
pub(crate) fn load() -> StoreResult<(Vec<MenuItem>, Vec<StaffMember>, Vec<Deal>)> {
    let menu = menu_items()?;
    let staff = staff_members()?;
    let deals = deals()?;

    info!(
        menu_items = menu.len(),
        staff = staff.len(),
        deals = deals.len(),
        "Loaded seed data"
    );
    Ok((menu, staff, deals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use royal_core::{StaffRole, StaffStatus};

    #[test]
    fn test_menu_seed() {
        let menu = menu_items().unwrap();
        assert_eq!(menu.len(), 8);

        let biryani = menu.iter().find(|i| i.id == "f1").unwrap();
        assert_eq!(biryani.name, "Chicken Biryani");
        assert_eq!(biryani.category, FoodCategory::MainCourse);
        assert_eq!(biryani.price, Money::from_major(500));

        assert!(menu.iter().any(|i| !i.is_available));
    }

    #[test]
    fn test_staff_seed() {
        let staff = staff_members().unwrap();
        assert_eq!(staff.len(), 8);
        assert_eq!(staff[0].name, "Ali Khan");
        assert_eq!(staff[0].role, StaffRole::Chef);
        assert_eq!(staff[3].status, StaffStatus::Inactive);
    }

    #[test]
    fn test_deal_seed_references_menu() {
        let menu = menu_items().unwrap();
        for deal in deals().unwrap() {
            assert!(deal.deal_price < deal.regular_price, "{}", deal.title);
            for id in &deal.items_included {
                assert!(menu.iter().any(|i| &i.id == id), "{} -> {}", deal.title, id);
            }
        }
    }
}
