//! # Tax Policy
//!
//! The tax rate on a bill depends only on how it is paid.
//!
//! ```text
//! ┌──────────────────┬──────────┐
//! │  Payment method  │ Tax rate │
//! ├──────────────────┼──────────┤
//! │  cash            │   15%    │
//! │  card            │    5%    │
//! └──────────────────┴──────────┘
//! ```
//!
//! The table is data, not code: the dashboard configuration can replace either
//! rate (see `ConfigState::from_env` in the dashboard app) and the composer
//! reads whatever policy it was given.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{PaymentMethod, TaxRate};
use crate::validation::{validate_tax_rate_bps, ValidationResult};

/// Default rate for cash bills (15%).
pub const DEFAULT_CASH_TAX_BPS: u32 = 1500;

/// Default rate for card bills (5%).
pub const DEFAULT_CARD_TAX_BPS: u32 = 500;

/// Mapping from payment method to tax rate.
///
/// One field per [`PaymentMethod`] variant, so every method always has a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxPolicy {
    cash: TaxRate,
    card: TaxRate,
}

impl TaxPolicy {
    /// Builds a policy, rejecting rates above 100%.
    pub fn new(cash: TaxRate, card: TaxRate) -> ValidationResult<Self> {
        validate_tax_rate_bps(cash.bps())?;
        validate_tax_rate_bps(card.bps())?;
        Ok(TaxPolicy { cash, card })
    }

    /// Rate applied to bills settled with `method`.
    pub const fn rate_for(&self, method: PaymentMethod) -> TaxRate {
        match method {
            PaymentMethod::Cash => self.cash,
            PaymentMethod::Card => self.card,
        }
    }

    /// Returns a copy of the policy with one rate replaced.
    pub fn with_rate(mut self, method: PaymentMethod, rate: TaxRate) -> ValidationResult<Self> {
        validate_tax_rate_bps(rate.bps())?;
        match method {
            PaymentMethod::Cash => self.cash = rate,
            PaymentMethod::Card => self.card = rate,
        }
        Ok(self)
    }

    /// `(method, rate)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (PaymentMethod, TaxRate)> + '_ {
        PaymentMethod::ALL.into_iter().map(|m| (m, self.rate_for(m)))
    }
}

impl Default for TaxPolicy {
    fn default() -> Self {
        TaxPolicy {
            cash: TaxRate::from_bps(DEFAULT_CASH_TAX_BPS),
            card: TaxRate::from_bps(DEFAULT_CARD_TAX_BPS),
        }
    }
}
