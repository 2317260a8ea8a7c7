//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ROYAL_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use directories::UserDirs;
use royal_core::{
    InvoiceComposer, Money, PaymentMethod, TaxPolicy, TaxRate, DEFAULT_BUSINESS_NAME,
    DEFAULT_CURRENCY_SYMBOL,
};
use serde::Serialize;
use tracing::warn;

pub const ENV_BUSINESS_NAME: &str = "ROYAL_BUSINESS_NAME";
pub const ENV_CURRENCY_SYMBOL: &str = "ROYAL_CURRENCY_SYMBOL";
pub const ENV_CASH_TAX_RATE: &str = "ROYAL_CASH_TAX_RATE";
pub const ENV_CARD_TAX_RATE: &str = "ROYAL_CARD_TAX_RATE";
pub const ENV_EXPORT_DIR: &str = "ROYAL_EXPORT_DIR";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Printed at the top of every invoice.
    pub business_name: String,

    /// Currency symbol (for display), e.g. `Rs.`
    pub currency_symbol: String,

    /// Tax rate per payment method.
    pub tax_policy: TaxPolicy,

    /// Folder exported invoices are written to.
    pub export_dir: PathBuf,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Business: "Royal Food Point"
    /// - Currency: `Rs.`
    /// - Tax: 15% cash, 5% card
    /// - Export folder: the user's Downloads folder, else the working directory
    fn default() -> Self {
        ConfigState {
            business_name: DEFAULT_BUSINESS_NAME.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            tax_policy: TaxPolicy::default(),
            export_dir: default_export_dir(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ROYAL_BUSINESS_NAME`: Override the invoice header
    /// - `ROYAL_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `ROYAL_CASH_TAX_RATE`: Cash tax rate as a percentage (e.g. "15")
    /// - `ROYAL_CARD_TAX_RATE`: Card tax rate as a percentage (e.g. "7.5")
    /// - `ROYAL_EXPORT_DIR`: Folder for exported invoices
    ///
    /// Unparseable or out-of-range values are logged and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = non_empty(lookup(ENV_BUSINESS_NAME)) {
            config.business_name = name;
        }

        if let Some(symbol) = non_empty(lookup(ENV_CURRENCY_SYMBOL)) {
            config.currency_symbol = symbol;
        }

        for (key, method) in [
            (ENV_CASH_TAX_RATE, PaymentMethod::Cash),
            (ENV_CARD_TAX_RATE, PaymentMethod::Card),
        ] {
            let Some(raw) = lookup(key) else { continue };

            match parse_percentage(&raw).and_then(|rate| config.tax_policy.with_rate(method, rate).ok()) {
                Some(policy) => config.tax_policy = policy,
                None => warn!(key, value = %raw, "Ignoring invalid tax rate"),
            }
        }

        if let Some(dir) = non_empty(lookup(ENV_EXPORT_DIR)) {
            config.export_dir = PathBuf::from(dir);
        }

        config
    }

    /// Invoice composer for this configuration.
    pub fn composer(&self) -> InvoiceComposer {
        InvoiceComposer::new(
            self.business_name.clone(),
            self.currency_symbol.clone(),
            self.tax_policy,
        )
    }

    /// Formats an amount in whole currency units, the way the invoice prints it.
    ///
    /// ## Example
    /// ```rust
    /// # use royal_dashboard::state::ConfigState;
    /// # use royal_core::Money;
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_major(1495)), "Rs. 1495");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_whole(&self.currency_symbol)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses "15" or "7.5" into a rate; rejects anything outside 0..=100.
fn parse_percentage(raw: &str) -> Option<TaxRate> {
    let pct: f64 = raw.trim().parse().ok()?;
    if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
        return None;
    }
    Some(TaxRate::from_percentage(pct))
}

fn default_export_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(lookup(&[]));
        assert_eq!(config.business_name, "Royal Food Point");
        assert_eq!(config.currency_symbol, "Rs.");
        assert_eq!(config.tax_policy, TaxPolicy::default());
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            (ENV_BUSINESS_NAME, "Royal Food Point - Gulberg"),
            (ENV_CASH_TAX_RATE, "16"),
            (ENV_CARD_TAX_RATE, " 7.5 "),
            (ENV_EXPORT_DIR, "/tmp/invoices"),
        ]));

        assert_eq!(config.business_name, "Royal Food Point - Gulberg");
        assert_eq!(config.tax_policy.rate_for(PaymentMethod::Cash), TaxRate::from_bps(1600));
        assert_eq!(config.tax_policy.rate_for(PaymentMethod::Card), TaxRate::from_bps(750));
        assert_eq!(config.export_dir, PathBuf::from("/tmp/invoices"));
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = ConfigState::from_lookup(lookup(&[
            (ENV_BUSINESS_NAME, "   "),
            (ENV_CASH_TAX_RATE, "fifteen"),
            (ENV_CARD_TAX_RATE, "250"),
        ]));

        assert_eq!(config.business_name, "Royal Food Point");
        assert_eq!(config.tax_policy, TaxPolicy::default());
    }

    #[test]
    fn test_parse_percentage() {
        assert_eq!(parse_percentage("15"), Some(TaxRate::from_bps(1500)));
        assert_eq!(parse_percentage("0"), Some(TaxRate::zero()));
        assert_eq!(parse_percentage("-1"), None);
        assert_eq!(parse_percentage("NaN"), None);
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_major(195)), "Rs. 195");
        assert_eq!(config.format_currency(Money::from_minor(1250)), "Rs. 13");
        assert_eq!(config.format_currency(Money::zero()), "Rs. 0");
    }

    #[test]
    fn test_composer_uses_configured_policy() {
        let config = ConfigState::from_lookup(lookup(&[(ENV_CARD_TAX_RATE, "10")]));
        let composer = config.composer();
        assert_eq!(composer.policy().rate_for(PaymentMethod::Card), TaxRate::from_bps(1000));
        assert_eq!(composer.business_name(), "Royal Food Point");
    }
}
