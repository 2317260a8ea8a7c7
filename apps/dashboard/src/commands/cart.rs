//! # Cart Commands
//!
//! Commands behind the "Current Bill" panel.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ On Bill  │────►│ Payment  │────►│ Invoice  │       │
//! │  │  Bill    │     │          │     │ Method   │     │ Exported │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart     set_payment_method                   │
//! │                   increment/            │                              │
//! │                   decrement        export_invoice                      │
//! │                        │           (invoice.rs)                        │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use royal_core::{Cart, CartLine, CartTotals, CoreError, PaymentMethod};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::{CartState, StoreState};

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub payment_method: PaymentMethod,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines().to_vec(),
            payment_method: cart.payment_method(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current bill.
pub fn get_cart(cart: &CartState) -> ApiResult<CartResponse> {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one unit of a menu item to the bill.
///
/// ## Behavior
/// - Item already on the bill: quantity increases by 1
/// - Item not on the bill: appended with quantity 1
/// - Name and price are frozen at the moment of the first add
///
/// ## Errors
/// - `NOT_FOUND` if the id is not on the menu
/// - `CART_ERROR` if the item is switched off
pub fn add_to_cart(store: &StoreState, cart: &CartState, item_id: &str) -> ApiResult<CartResponse> {
    debug!(item_id = %item_id, "add_to_cart command");

    let item = store
        .read(|s| s.catalog().get(item_id).cloned())?
        .ok_or_else(|| CoreError::MenuItemNotFound(item_id.to_string()))?;

    if !item.is_available {
        return Err(CoreError::MenuItemUnavailable(item_id.to_string()).into());
    }

    cart.with_cart_mut(|c| {
        c.add_item(&item);
        CartResponse::from(&*c)
    })
}

/// `+` button on a bill line. Unknown ids leave the bill unchanged.
pub fn increment_cart_line(cart: &CartState, item_id: &str) -> ApiResult<CartResponse> {
    debug!(item_id = %item_id, "increment_cart_line command");

    cart.with_cart_mut(|c| {
        c.increment_line(item_id);
        CartResponse::from(&*c)
    })
}

/// `−` button on a bill line; the line disappears when its quantity hits 0.
pub fn decrement_cart_line(cart: &CartState, item_id: &str) -> ApiResult<CartResponse> {
    debug!(item_id = %item_id, "decrement_cart_line command");

    cart.with_cart_mut(|c| {
        c.decrement_line(item_id);
        CartResponse::from(&*c)
    })
}

/// Removes a line regardless of its quantity.
pub fn remove_from_cart(cart: &CartState, item_id: &str) -> ApiResult<CartResponse> {
    debug!(item_id = %item_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_line(item_id);
        CartResponse::from(&*c)
    })
}

/// Clears the bill. The selected payment method stays.
pub fn clear_cart(cart: &CartState) -> ApiResult<CartResponse> {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

pub fn set_payment_method(cart: &CartState, method: PaymentMethod) -> ApiResult<CartResponse> {
    debug!(method = %method, "set_payment_method command");

    cart.with_cart_mut(|c| {
        c.set_payment_method(method);
        CartResponse::from(&*c)
    })
}
