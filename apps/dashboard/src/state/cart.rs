//! # Cart State
//!
//! Holds the bill currently being assembled on the billing screen.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several commands read and modify the same bill
//! 2. Only one command may modify it at a time
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  UI Action                Command                   Cart Change         │
//! │  ─────────                ───────                   ───────────         │
//! │                                                                         │
//! │  Click menu card ────────► add_to_cart() ─────────► add_item()         │
//! │                                                                         │
//! │  + / − on a line ────────► increment/decrement ───► qty ± 1            │
//! │                                                                         │
//! │  Click Clear ────────────► clear_cart() ──────────► clear()            │
//! │                                                                         │
//! │  Cash / Card toggle ─────► set_payment_method() ──► method = m         │
//! │                                                                         │
//! │  Complete Bill ──────────► export_invoice() ──────► (read only)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use royal_core::Cart;

use crate::error::{ApiError, ApiResult};

/// Dashboard-managed cart state.
///
/// Cloning shares the same cart.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// # use royal_dashboard::state::CartState;
    /// let state = CartState::new();
    /// let empty = state.with_cart(|cart| cart.is_empty()).unwrap();
    /// assert!(empty);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> ApiResult<R>
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self
            .cart
            .lock()
            .map_err(|_| ApiError::internal("Cart lock poisoned"))?;
        Ok(f(&cart))
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> ApiResult<R>
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self
            .cart
            .lock()
            .map_err(|_| ApiError::internal("Cart lock poisoned"))?;
        Ok(f(&mut cart))
    }
}
