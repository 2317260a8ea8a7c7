//! # Deals Repository
//!
//! Bundled offers shown on the deals screen.
//!
//! ## Deal Card
//! ```text
//! ┌──────────────────────────────────────┐
//! │  Family Feast                 (15%)  │ ← discount badge
//! │  01 Jan 2025 - 31 Dec 2025           │
//! │  • Chicken Biryani                   │
//! │  • Karahi                            │
//! │  Rs 1950.00  →  Rs 1650.00           │
//! └──────────────────────────────────────┘
//! ```
//!
//! Whether the bundled item ids exist on the menu is checked by the dashboard
//! command layer, which can see both repositories.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::repository::matches_query;
use royal_core::validation::{
    normalize_search_query, validate_date_range, validate_name, validate_positive_price,
};
use royal_core::{Deal, Money};

/// Input for a new deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeal {
    pub title: String,
    pub items_included: Vec<String>,
    pub deal_price: Money,
    pub regular_price: Money,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub description: String,
}

fn default_active() -> bool {
    true
}

/// Active-flag filter for the deals screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl DealStatusFilter {
    fn accepts(&self, deal: &Deal) -> bool {
        match self {
            DealStatusFilter::All => true,
            DealStatusFilter::Active => deal.is_active,
            DealStatusFilter::Inactive => !deal.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealFilter {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub status: DealStatusFilter,
}

#[derive(Debug, Clone, Default)]
pub struct DealRepository {
    deals: Vec<Deal>,
}

impl DealRepository {
    pub fn new(deals: Vec<Deal>) -> Self {
        DealRepository { deals }
    }

    pub fn list(&self) -> &[Deal] {
        &self.deals
    }

    pub fn get(&self, id: &str) -> Option<&Deal> {
        self.deals.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }

    /// Deals that are switched on and whose window covers `date`.
    pub fn running_on(&self, date: NaiveDate) -> Vec<Deal> {
        self.deals
            .iter()
            .filter(|d| d.is_active && d.runs_on(date))
            .cloned()
            .collect()
    }

    /// Adds a deal at the front of the list.
    ///
    /// ## Validation
    /// - Title required
    /// - Regular and deal price both > 0
    /// - End date not before start date
    pub fn add(&mut self, input: NewDeal) -> StoreResult<Deal> {
        validate_deal_fields(
            &input.title,
            input.regular_price,
            input.deal_price,
            input.start_date,
            input.end_date,
        )?;

        let deal = Deal {
            id: format!("d{}", Uuid::new_v4().simple()),
            title: input.title.trim().to_string(),
            items_included: input.items_included,
            deal_price: input.deal_price,
            regular_price: input.regular_price,
            start_date: input.start_date,
            end_date: input.end_date,
            is_active: input.is_active,
            description: input.description.trim().to_string(),
        };

        debug!(id = %deal.id, title = %deal.title, "Adding deal");
        self.deals.insert(0, deal.clone());
        Ok(deal)
    }

    pub fn update(&mut self, deal: Deal) -> StoreResult<Deal> {
        validate_deal_fields(
            &deal.title,
            deal.regular_price,
            deal.deal_price,
            deal.start_date,
            deal.end_date,
        )?;

        let slot = self
            .deals
            .iter_mut()
            .find(|d| d.id == deal.id)
            .ok_or_else(|| StoreError::not_found("Deal", &deal.id))?;

        *slot = Deal {
            title: deal.title.trim().to_string(),
            ..deal
        };
        debug!(id = %slot.id, "Updated deal");
        Ok(slot.clone())
    }

    pub fn toggle_active(&mut self, id: &str) -> StoreResult<Deal> {
        let deal = self
            .deals
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| StoreError::not_found("Deal", id))?;

        deal.is_active = !deal.is_active;
        debug!(id = %id, active = deal.is_active, "Toggled deal");
        Ok(deal.clone())
    }

    pub fn delete(&mut self, id: &str) -> StoreResult<Deal> {
        let index = self
            .deals
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| StoreError::not_found("Deal", id))?;

        debug!(id = %id, "Deleting deal");
        Ok(self.deals.remove(index))
    }

    pub fn search(&self, filter: &DealFilter) -> StoreResult<Vec<Deal>> {
        let query = normalize_search_query(&filter.query)?;

        Ok(self
            .deals
            .iter()
            .filter(|d| matches_query(&d.title, &query))
            .filter(|d| filter.status.accepts(d))
            .cloned()
            .collect())
    }
}

fn validate_deal_fields(
    title: &str,
    regular_price: Money,
    deal_price: Money,
    start: NaiveDate,
    end: NaiveDate,
) -> StoreResult<()> {
    validate_name("title", title)?;
    validate_positive_price("regular_price", regular_price)?;
    validate_positive_price("deal_price", deal_price)?;
    validate_date_range(start, end)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_deal(title: &str, regular: i64, price: i64) -> NewDeal {
        NewDeal {
            title: title.to_string(),
            items_included: vec!["f2".to_string(), "f3".to_string()],
            deal_price: Money::from_major(price),
            regular_price: Money::from_major(regular),
            start_date: date(2025, 3, 1),
            end_date: date(2025, 3, 31),
            is_active: true,
            description: String::new(),
        }
    }

    fn repo() -> DealRepository {
        let mut repo = DealRepository::default();
        repo.add(new_deal("Burger Combo", 850, 700)).unwrap();
        let mut sweet = new_deal("Sweet Treat", 600, 500);
        sweet.is_active = false;
        repo.add(sweet).unwrap();
        repo
    }

    #[test]
    fn test_add_inserts_at_front() {
        let repo = repo();
        assert_eq!(repo.list()[0].title, "Sweet Treat");
        assert_eq!(repo.list()[1].title, "Burger Combo");
        assert!(repo.list()[0].id.starts_with('d'));
    }

    #[test]
    fn test_add_validation() {
        let mut repo = DealRepository::default();

        assert!(repo.add(new_deal("  ", 850, 700)).is_err());
        assert!(repo.add(new_deal("Combo", 0, 700)).is_err());
        assert!(repo.add(new_deal("Combo", 850, 0)).is_err());

        let mut backwards = new_deal("Combo", 850, 700);
        backwards.end_date = date(2025, 2, 1);
        assert!(repo.add(backwards).is_err());

        assert!(repo.is_empty());
    }

    #[test]
    fn test_discount_of_added_deal() {
        let mut repo = DealRepository::default();
        let deal = repo.add(new_deal("Family Feast", 1000, 850)).unwrap();
        assert_eq!(deal.discount_percentage(), 15);
    }

    #[test]
    fn test_toggle_and_filter() {
        let mut repo = repo();

        let active = repo
            .search(&DealFilter {
                status: DealStatusFilter::Active,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "Burger Combo");

        let sweet_id = repo.list()[0].id.clone();
        assert!(repo.toggle_active(&sweet_id).unwrap().is_active);

        let inactive = repo
            .search(&DealFilter {
                status: DealStatusFilter::Inactive,
                ..Default::default()
            })
            .unwrap();
        assert!(inactive.is_empty());
    }

    #[test]
    fn test_search_by_title() {
        let repo = repo();
        let hits = repo
            .search(&DealFilter {
                query: "BURGER".to_string(),
                status: DealStatusFilter::All,
            })
            .unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_update_and_delete() {
        let mut repo = repo();
        let mut combo = repo.list()[1].clone();
        combo.deal_price = Money::from_major(650);
        repo.update(combo.clone()).unwrap();
        assert_eq!(repo.get(&combo.id).unwrap().deal_price, Money::from_major(650));

        repo.delete(&combo.id).unwrap();
        assert_eq!(repo.len(), 1);
        assert!(matches!(repo.delete(&combo.id), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_running_on() {
        let repo = repo();
        assert_eq!(repo.running_on(date(2025, 3, 15)).len(), 1);
        assert!(repo.running_on(date(2025, 4, 1)).is_empty());
    }
}
