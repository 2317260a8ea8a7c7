//! # Domain Types
//!
//! Core domain types used throughout Royal POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │   StaffMember   │   │      Deal       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  name           │   │  title          │       │
//! │  │  category       │   │  role           │   │  items_included │       │
//! │  │  price (Money)  │   │  status         │   │  deal / regular │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │  PaymentMethod  │   │  FoodCategory   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Cash           │   │  Main Course    │       │
//! │  │  1500 = 15%     │   │  Card           │   │  Starter, ...   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1500 bps = 15% (cash), 500 bps = 5% (card)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for configuration input).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

/// Shows the rate as a percentage label: `15%`, `8.25%`, `7.5%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        match frac {
            0 => write!(f, "{}%", whole),
            f10 if f10 % 10 == 0 => write!(f, "{}.{}%", whole, f10 / 10),
            _ => write!(f, "{}.{:02}%", whole, frac),
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer settles the bill. Selects the tax rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment. Default selection on a new bill.
    #[default]
    Cash,
    /// Card payment.
    Card,
}

impl PaymentMethod {
    /// Every payment method, in display order.
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Cash, PaymentMethod::Card];

    /// Label printed on the invoice summary.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "payment_method".to_string(),
                allowed: PaymentMethod::ALL.iter().map(|m| m.label().to_string()).collect(),
            })
    }
}

// =============================================================================
// Food Category
// =============================================================================

/// Menu section a food item is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FoodCategory {
    #[serde(rename = "Main Course")]
    MainCourse,
    Starter,
    Dessert,
    Drinks,
}

impl FoodCategory {
    /// Every category, in menu order.
    pub const ALL: [FoodCategory; 4] = [
        FoodCategory::MainCourse,
        FoodCategory::Starter,
        FoodCategory::Dessert,
        FoodCategory::Drinks,
    ];

    /// Human-readable category name.
    pub const fn label(&self) -> &'static str {
        match self {
            FoodCategory::MainCourse => "Main Course",
            FoodCategory::Starter => "Starter",
            FoodCategory::Dessert => "Dessert",
            FoodCategory::Drinks => "Drinks",
        }
    }
}

impl Default for FoodCategory {
    fn default() -> Self {
        FoodCategory::MainCourse
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FoodCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FoodCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: FoodCategory::ALL.iter().map(|c| c.label().to_string()).collect(),
            })
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A catalog entry that can be billed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    /// Stable unique identifier (e.g. `f1`).
    pub id: String,

    /// Display name shown on the menu and the invoice.
    pub name: String,

    /// Menu section.
    pub category: FoodCategory,

    /// Unit price.
    pub price: Money,

    /// Whether the item can currently be added to a bill.
    pub is_available: bool,

    /// Short description for the catalog card.
    pub description: String,
}

impl MenuItem {
    /// Creates an available menu item with an empty description.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: FoodCategory,
        price: Money,
    ) -> Self {
        MenuItem {
            id: id.into(),
            name: name.into(),
            category,
            price,
            is_available: true,
            description: String::new(),
        }
    }
}

// =============================================================================
// Staff
// =============================================================================

/// Job a staff member is rostered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StaffRole {
    Chef,
    Waiter,
    Manager,
    Cashier,
    Cleaner,
    Host,
}

impl StaffRole {
    pub const ALL: [StaffRole; 6] = [
        StaffRole::Chef,
        StaffRole::Waiter,
        StaffRole::Manager,
        StaffRole::Cashier,
        StaffRole::Cleaner,
        StaffRole::Host,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            StaffRole::Chef => "Chef",
            StaffRole::Waiter => "Waiter",
            StaffRole::Manager => "Manager",
            StaffRole::Cashier => "Cashier",
            StaffRole::Cleaner => "Cleaner",
            StaffRole::Host => "Host",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a staff member is currently on the active roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StaffStatus {
    #[default]
    Active,
    Inactive,
}

impl StaffStatus {
    /// Returns the opposite status (Activate / Deactivate button).
    pub const fn toggled(&self) -> Self {
        match self {
            StaffStatus::Active => StaffStatus::Inactive,
            StaffStatus::Inactive => StaffStatus::Active,
        }
    }
}

/// A member of the restaurant staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: StaffRole,
    pub status: StaffStatus,
}

// =============================================================================
// Deal
// =============================================================================

/// A bundled offer over several menu items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Deal {
    pub id: String,
    pub title: String,
    /// Menu item ids bundled in the deal.
    pub items_included: Vec<String>,
    /// Price the customer pays for the bundle.
    pub deal_price: Money,
    /// Sum of the bundled items at menu price.
    pub regular_price: Money,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub description: String,
}

impl Deal {
    /// Savings as a whole percentage of the regular price, rounded to nearest.
    ///
    /// Returns 0 when the regular price is not positive.
    ///
    /// ## Example
    /// ```rust
    /// # use chrono::NaiveDate;
    /// # use royal_core::{Deal, Money};
    /// # let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let deal = Deal {
    ///     id: "d1".into(),
    ///     title: "Family Feast".into(),
    ///     items_included: vec!["f1".into(), "f5".into()],
    ///     deal_price: Money::from_major(850),
    ///     regular_price: Money::from_major(1000),
    ///     start_date: day,
    ///     end_date: day,
    ///     is_active: true,
    ///     description: String::new(),
    /// };
    /// assert_eq!(deal.discount_percentage(), 15);
    /// ```
    pub fn discount_percentage(&self) -> i64 {
        let regular = self.regular_price.minor() as i128;
        if regular <= 0 {
            return 0;
        }
        let saved = regular - self.deal_price.minor() as i128;
        // round(saved * 100 / regular), halves away from zero
        let scaled = saved * 200 + if saved >= 0 { regular } else { -regular };
        (scaled / (regular * 2)) as i64
    }

    /// Whether `date` falls inside the deal's validity window (inclusive).
    pub fn runs_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
