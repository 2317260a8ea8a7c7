//! # Cart Aggregator
//!
//! The working bill: one line per distinct menu item, with a quantity.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action                Operation               Cart Change           │
//! │  ─────────                ─────────               ───────────           │
//! │                                                                         │
//! │  ➕ Add (menu) ──────────► add_item() ──────────► qty+1 or push line    │
//! │                                                                         │
//! │  + (bill line) ──────────► increment_line() ────► qty+1                 │
//! │                                                                         │
//! │  − (bill line) ──────────► decrement_line() ────► qty-1, drop at 0      │
//! │                                                                         │
//! │  🧹 Clear ───────────────► clear() ─────────────► lines.clear()         │
//! │                                                                         │
//! │  Cash / Card ────────────► set_payment_method() ► method = m            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per item id
//! - Every line has quantity >= 1; a line reaching 0 is removed
//! - Line order is the order of first add and never changes for kept lines

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{FoodCategory, MenuItem, PaymentMethod};

/// A menu item on the bill, with its quantity.
///
/// ## Price Freezing
/// Name and unit price are captured on the first add, so editing the catalog
/// afterwards does not change a bill that is already open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Menu item id.
    pub item_id: String,

    /// Item name at time of adding (frozen).
    pub name: String,

    /// Menu category at time of adding (frozen).
    pub category: FoodCategory,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Quantity on the bill, always >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// Creates a line for `item` with quantity 1.
    pub fn from_item(item: &MenuItem) -> Self {
        CartLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            category: item.category,
            unit_price: item.price,
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The bill being assembled, plus the selected payment method.
///
/// This is the single owned source of truth for cart state; callers mutate it
/// through the methods below and hand a reference to the invoice composer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,
    payment_method: PaymentMethod,
}

impl Cart {
    /// Creates an empty cart paying by cash.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit of `item`.
    ///
    /// ## Behavior
    /// - Item already on the bill: its quantity increases by 1
    /// - Item not on the bill: a new line with quantity 1 is appended
    pub fn add_item(&mut self, item: &MenuItem) {
        match self.line_mut(&item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::from_item(item)),
        }
    }

    /// Increases the quantity of an existing line by 1. No-op if absent.
    pub fn increment_line(&mut self, item_id: &str) {
        if let Some(line) = self.line_mut(item_id) {
            line.quantity = line.quantity.saturating_add(1);
        }
    }

    /// Decreases the quantity of a line by 1, removing it when it reaches 0.
    ///
    /// No-op if the line is absent.
    pub fn decrement_line(&mut self, item_id: &str) {
        let Some(index) = self.lines.iter().position(|l| l.item_id == item_id) else {
            return;
        };

        if self.lines[index].quantity <= 1 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity -= 1;
        }
    }

    /// Removes a line regardless of quantity. No-op if absent.
    pub fn remove_line(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// Clears all lines. The payment method is kept.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Selects how the bill will be paid.
    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Currently selected payment method.
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Lines in first-add order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up the line for an item id.
    pub fn line(&self, item_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id == item_id)
    }

    fn line_mut(&mut self, item_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.item_id == item_id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of unit price × quantity over all lines. Zero for an empty cart.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

/// Cart totals summary for UI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
    pub subtotal: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.len(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
        }
    }
}
