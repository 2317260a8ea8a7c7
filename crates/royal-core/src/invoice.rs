//! # Invoice Composer
//!
//! Turns a cart into a billing summary and a printable document description.
//!
//! ## Composition Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Cart ──► subtotal ──► TaxPolicy[payment method] ──► tax ──► total      │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                            InvoiceSummary (exact paisa)                 │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                InvoiceDocument (header, table, summary block)           │
//! │                   every amount rounded to whole rupees                  │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │               DocumentRenderer (dashboard app) ──► Invoice_<date>       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Composition is a pure function of (cart lines, payment method, date): the
//! composer holds no per-bill state and reads the tax rate on every call, so
//! switching the payment method is reflected in the next composition.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, CartLine};
use crate::money::Money;
use crate::tax::TaxPolicy;
use crate::types::{PaymentMethod, TaxRate};
use crate::{DEFAULT_BUSINESS_NAME, DEFAULT_CURRENCY_SYMBOL};

/// Column headings of the line-item table.
pub const TABLE_COLUMNS: [&str; 4] = ["Item", "Qty", "Price", "Total"];

// =============================================================================
// Summary
// =============================================================================

/// Computed billing totals. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceSummary {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub tax_rate: TaxRate,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    /// Snapshot of the cart lines at composition time.
    pub lines: Vec<CartLine>,
}

impl InvoiceSummary {
    /// Checks if the summary has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// File name the rendered invoice is offered under: `Invoice_<date>.pdf`.
    pub fn download_name(&self) -> String {
        download_name(self.date)
    }
}

/// `Invoice_<YYYY-MM-DD>.pdf`
pub fn download_name(date: NaiveDate) -> String {
    format!("Invoice_{}.pdf", date.format("%Y-%m-%d"))
}

// =============================================================================
// Document
// =============================================================================

/// Physical page format of the printed invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PageSize {
    #[default]
    A4,
}

impl PageSize {
    /// Page width and height in millimetres.
    pub const fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            PageSize::A4 => (210, 297),
        }
    }
}

/// Top of the page: business name and invoice date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceHeader {
    pub business_name: String,
    /// `Invoice Date: YYYY-MM-DD`
    pub date_line: String,
}

/// One row of the line-item table, already formatted for print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceRow {
    pub name: String,
    pub quantity: String,
    pub unit_price: String,
    pub line_total: String,
    /// Odd rows get a tinted background.
    pub shaded: bool,
}

impl InvoiceRow {
    /// Cells in [`TABLE_COLUMNS`] order.
    pub fn cells(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.quantity.as_str(),
            self.unit_price.as_str(),
            self.line_total.as_str(),
        ]
    }
}

/// A labelled line of the summary block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SummaryLine {
    pub label: String,
    pub value: String,
    /// Printed bold and larger (the grand total).
    pub emphasized: bool,
}

/// Fixed-layout description of a single-page invoice.
///
/// Renderers only lay this out; every number in it is already rounded and
/// formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceDocument {
    pub page_size: PageSize,
    pub header: InvoiceHeader,
    pub columns: Vec<String>,
    pub rows: Vec<InvoiceRow>,
    pub summary: Vec<SummaryLine>,
    /// `Invoice_<date>.pdf`
    pub download_name: String,
}

// =============================================================================
// Composer
// =============================================================================

/// Computes invoices under a fixed business name and tax policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceComposer {
    business_name: String,
    currency_symbol: String,
    policy: TaxPolicy,
}

impl InvoiceComposer {
    pub fn new(
        business_name: impl Into<String>,
        currency_symbol: impl Into<String>,
        policy: TaxPolicy,
    ) -> Self {
        InvoiceComposer {
            business_name: business_name.into(),
            currency_symbol: currency_symbol.into(),
            policy,
        }
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn policy(&self) -> &TaxPolicy {
        &self.policy
    }

    /// Computes the billing summary for `cart` on `date`.
    ///
    /// ## Steps
    /// 1. subtotal = Σ unit price × quantity
    /// 2. rate = policy[cart payment method]
    /// 3. tax = subtotal × rate (nearest paisa)
    /// 4. total = subtotal + tax
    ///
    /// An empty cart yields zero subtotal, tax and total with no lines.
    pub fn compose(&self, cart: &Cart, date: NaiveDate) -> InvoiceSummary {
        let payment_method = cart.payment_method();
        let tax_rate = self.policy.rate_for(payment_method);
        let subtotal = cart.subtotal();
        let tax = subtotal.calculate_tax(tax_rate);

        InvoiceSummary {
            date,
            payment_method,
            tax_rate,
            subtotal,
            tax,
            total: subtotal + tax,
            lines: cart.lines().to_vec(),
        }
    }

    /// Shapes a summary into the printable document description.
    pub fn document(&self, summary: &InvoiceSummary) -> InvoiceDocument {
        let money = |m: Money| m.format_whole(&self.currency_symbol);

        let rows = summary
            .lines
            .iter()
            .enumerate()
            .map(|(idx, line)| InvoiceRow {
                name: line.name.clone(),
                quantity: line.quantity.to_string(),
                unit_price: money(line.unit_price),
                line_total: money(line.line_total()),
                shaded: idx % 2 == 1,
            })
            .collect();

        let summary_lines = vec![
            SummaryLine {
                label: "Payment Method".to_string(),
                value: summary.payment_method.label().to_string(),
                emphasized: false,
            },
            SummaryLine {
                label: "Subtotal".to_string(),
                value: money(summary.subtotal),
                emphasized: false,
            },
            SummaryLine {
                label: format!("Tax ({})", summary.tax_rate),
                value: money(summary.tax),
                emphasized: false,
            },
            SummaryLine {
                label: "Total".to_string(),
                value: money(summary.total),
                emphasized: true,
            },
        ];

        InvoiceDocument {
            page_size: PageSize::A4,
            header: InvoiceHeader {
                business_name: self.business_name.clone(),
                date_line: format!("Invoice Date: {}", summary.date.format("%Y-%m-%d")),
            },
            columns: TABLE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
            summary: summary_lines,
            download_name: summary.download_name(),
        }
    }
}

impl Default for InvoiceComposer {
    fn default() -> Self {
        InvoiceComposer::new(
            DEFAULT_BUSINESS_NAME,
            DEFAULT_CURRENCY_SYMBOL,
            TaxPolicy::default(),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FoodCategory, MenuItem};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    fn item(id: &str, name: &str, price: i64) -> MenuItem {
        MenuItem::new(id, name, FoodCategory::MainCourse, Money::from_major(price))
    }

    /// Cart with subtotal Rs. 1000.
    fn thousand_cart() -> Cart {
        let mut cart = Cart::new();
        let karahi = item("f7", "Karahi", 250);
        for _ in 0..4 {
            cart.add_item(&karahi);
        }
        cart
    }

    #[test]
    fn test_cash_tax_is_fifteen_percent() {
        let mut cart = thousand_cart();
        cart.set_payment_method(PaymentMethod::Cash);

        let summary = InvoiceComposer::default().compose(&cart, date());

        assert_eq!(summary.subtotal, Money::from_major(1000));
        assert_eq!(summary.tax, Money::from_major(150));
        assert_eq!(summary.total, Money::from_major(1150));
    }

    #[test]
    fn test_card_tax_is_five_percent() {
        let mut cart = thousand_cart();
        cart.set_payment_method(PaymentMethod::Card);

        let summary = InvoiceComposer::default().compose(&cart, date());

        assert_eq!(summary.tax, Money::from_major(50));
        assert_eq!(summary.total, Money::from_major(1050));
    }

    #[test]
    fn test_switching_payment_method_is_not_cached() {
        let composer = InvoiceComposer::default();
        let mut cart = thousand_cart();

        let cash = composer.compose(&cart, date());
        cart.set_payment_method(PaymentMethod::Card);
        let card = composer.compose(&cart, date());

        assert_eq!(cash.tax_rate, TaxRate::from_bps(1500));
        assert_eq!(card.tax_rate, TaxRate::from_bps(500));
        assert_ne!(cash.total, card.total);
    }

    #[test]
    fn test_compose_is_idempotent() {
        let composer = InvoiceComposer::default();
        let cart = thousand_cart();

        let first = composer.compose(&cart, date());
        let second = composer.compose(&cart, date());

        assert_eq!(first, second);
        assert_eq!(composer.document(&first), composer.document(&second));
    }

    #[test]
    fn test_empty_cart_composes_to_zero() {
        let summary = InvoiceComposer::default().compose(&Cart::new(), date());

        assert!(summary.is_empty());
        assert_eq!(summary.subtotal, Money::zero());
        assert_eq!(summary.tax, Money::zero());
        assert_eq!(summary.total, Money::zero());

        let document = InvoiceComposer::default().document(&summary);
        assert!(document.rows.is_empty());
    }

    #[test]
    fn test_end_to_end_two_items_cash() {
        let mut cart = Cart::new();
        let a = item("a", "Chicken Biryani", 500);
        let b = item("b", "French Fries", 300);
        cart.add_item(&a);
        cart.add_item(&a);
        cart.add_item(&b);

        let composer = InvoiceComposer::default();
        let summary = composer.compose(&cart, date());

        assert_eq!(summary.subtotal, Money::from_major(1300));
        assert_eq!(summary.tax, Money::from_major(195));
        assert_eq!(summary.total, Money::from_major(1495));

        let document = composer.document(&summary);
        assert_eq!(document.header.business_name, "Royal Food Point");
        assert_eq!(document.header.date_line, "Invoice Date: 2025-01-31");
        assert_eq!(document.columns, vec!["Item", "Qty", "Price", "Total"]);
        assert_eq!(
            document.rows[0].cells(),
            ["Chicken Biryani", "2", "Rs. 500", "Rs. 1000"]
        );
        assert!(!document.rows[0].shaded);
        assert!(document.rows[1].shaded);

        let summary_text: Vec<_> = document
            .summary
            .iter()
            .map(|l| format!("{}: {}", l.label, l.value))
            .collect();
        assert_eq!(
            summary_text,
            vec![
                "Payment Method: cash",
                "Subtotal: Rs. 1300",
                "Tax (15%): Rs. 195",
                "Total: Rs. 1495",
            ]
        );
        assert!(document.summary[3].emphasized);
        assert_eq!(document.download_name, "Invoice_2025-01-31.pdf");
    }

    #[test]
    fn test_document_rounds_instead_of_truncating() {
        // Rs. 70 at 5% = Rs. 3.50 tax, Rs. 73.50 total
        let mut cart = Cart::new();
        cart.set_payment_method(PaymentMethod::Card);
        cart.add_item(&item("tea", "Chai", 70));

        let composer = InvoiceComposer::default();
        let summary = composer.compose(&cart, date());
        assert_eq!(summary.tax, Money::from_minor(350));

        let document = composer.document(&summary);
        assert_eq!(document.summary[2].value, "Rs. 4");
        assert_eq!(document.summary[3].value, "Rs. 74");
    }

    #[test]
    fn test_custom_policy_and_business_name() {
        let policy = TaxPolicy::default()
            .with_rate(PaymentMethod::Cash, TaxRate::from_bps(1000))
            .unwrap();
        let composer = InvoiceComposer::new("Test Kitchen", "PKR", policy);

        let summary = composer.compose(&thousand_cart(), date());
        assert_eq!(summary.tax, Money::from_major(100));

        let document = composer.document(&summary);
        assert_eq!(document.header.business_name, "Test Kitchen");
        assert_eq!(document.summary[3].value, "PKR 1100");
    }

    #[test]
    fn test_compose_near_i64_max_does_not_panic() {
        let mut cart = Cart::new();
        let huge = MenuItem::new("x", "Huge", FoodCategory::MainCourse, Money::from_minor(i64::MAX - 10));
        cart.add_item(&huge);

        let summary = InvoiceComposer::default().compose(&cart, date());
        assert_eq!(summary.subtotal, Money::from_minor(i64::MAX - 10));
        assert_eq!(summary.total, Money::from_minor(i64::MAX));
        assert!(!summary.total.is_negative());
    }
}

