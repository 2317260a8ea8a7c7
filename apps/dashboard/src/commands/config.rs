//! # Config Commands
//!
//! Read-only access to the startup configuration.

use royal_core::{PaymentMethod, TaxRate};
use serde::Serialize;
use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (business name in the header, currency symbol)
/// - Billing screen (tax label next to the payment toggle)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// One row of the payment-method toggle: `Cash (15% tax)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRateOption {
    pub method: PaymentMethod,
    pub rate: TaxRate,
    pub label: String,
}

pub fn get_tax_rates(config: &ConfigState) -> Vec<TaxRateOption> {
    debug!("get_tax_rates command");
    config
        .tax_policy
        .entries()
        .map(|(method, rate)| TaxRateOption {
            method,
            rate,
            label: format!("{} ({} tax)", capitalize(method.label()), rate),
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
