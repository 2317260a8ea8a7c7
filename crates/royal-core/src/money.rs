//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A bill of many 0.1-priced lines drifts away from the exact sum.       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (paisa)                              │
//! │    Rs. 12.50 is stored as 1250 and every sum is exact                  │
//! │    Rounding happens once, when a value is shown in whole rupees        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use royal_core::money::Money;
//!
//! let price = Money::from_major(450);        // Rs. 450
//! let line = price.multiply_quantity(2);     // Rs. 900
//! let total = line + Money::from_minor(50);  // Rs. 900.50
//!
//! assert_eq!(total.minor(), 90_050);
//! assert_eq!(total.round_to_major(), 901);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

use crate::types::TaxRate;
use crate::DEFAULT_CURRENCY_SYMBOL;

/// Minor units per major unit (100 paisa = 1 rupee).
pub const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (paisa).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for deal savings and corrections
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  MenuItem.price ──► CartLine.unit_price ──► CartLine.line_total        │
/// │                                                                         │
/// │  Cart.subtotal ──► TaxPolicy rate ──► InvoiceSummary.tax ──► total     │
/// │                                                                         │
/// │  InvoiceDocument shows every amount rounded to whole rupees            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (paisa).
    ///
    /// ## Example
    /// ```rust
    /// use royal_core::money::Money;
    ///
    /// let price = Money::from_minor(1099); // Rs. 10.99
    /// assert_eq!(price.minor(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// Menu prices are whole amounts, so this is the usual constructor.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_PER_MAJOR)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated towards zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the paisa portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax at the given rate, rounded to the nearest paisa.
    ///
    /// ## Implementation
    /// Integer math on basis points: `amount * bps / 10000`, with halves
    /// rounded away from zero. The product is taken in `i128` and the result
    /// saturates at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use royal_core::money::Money;
    /// use royal_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_major(1300);
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(1500)); // 15%
    /// assert_eq!(tax, Money::from_major(195));
    /// ```
    ///
    /// ## Billing Workflow
    /// ```text
    /// Subtotal: Rs. 1300 (cash)
    ///      │
    ///      ▼
    /// calculate_tax(15%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Tax: Rs. 195 ──► Total: Rs. 1495
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let scaled = i128::from(self.0) * i128::from(rate.bps());
        Money(saturate(div_round_half_away(scaled, 10_000)))
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use royal_core::money::Money;
    ///
    /// let unit_price = Money::from_major(250);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_major(750));
    /// ```
    ///
    /// Saturates at the `i64` bounds; see [`Money::checked_mul`].
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(minor) => Some(Money(minor)),
            None => None,
        }
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    #[inline]
    pub const fn checked_mul(&self, qty: u32) -> Option<Money> {
        match self.0.checked_mul(qty as i64) {
            Some(minor) => Some(Money(minor)),
            None => None,
        }
    }

    /// Rounds to whole rupees, halves away from zero.
    ///
    /// This is the value printed on invoices: `Rs. 12.50` shows as `Rs. 13`,
    /// `Rs. 12.49` as `Rs. 12`.
    pub fn round_to_major(&self) -> i64 {
        saturate(div_round_half_away(
            i128::from(self.0),
            i128::from(MINOR_PER_MAJOR),
        ))
    }

    /// Formats as whole rupees with the given symbol, e.g. `Rs. 1495`.
    pub fn format_whole(&self, symbol: &str) -> String {
        format!("{} {}", symbol, self.round_to_major())
    }
}

/// Clamps an `i128` intermediate into the `i64` range.
fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// Integer division rounding halves away from zero.
fn div_round_half_away(numerator: i128, denominator: i128) -> i128 {
    let half = denominator / 2;
    if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        (numerator - half) / denominator
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the exact amount with paisa, e.g. `Rs. 10.99`.
///
/// ## Note
/// For debugging and logs. Invoices use [`Money::format_whole`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{} {}.{:02}",
            sign,
            DEFAULT_CURRENCY_SYMBOL,
            self.major().abs(),
            self.minor_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition saturates at the `i64` bounds instead of overflowing.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor_and_major() {
        let money = Money::from_minor(1099);
        assert_eq!(money.minor(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 99);

        assert_eq!(Money::from_major(450).minor(), 45_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(1099)), "Rs. 10.99");
        assert_eq!(format!("{}", Money::from_major(5)), "Rs. 5.00");
        assert_eq!(format!("{}", Money::from_minor(-550)), "-Rs. 5.50");
        assert_eq!(format!("{}", Money::zero()), "Rs. 0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(1000);
        let b = Money::from_major(500);

        assert_eq!(a + b, Money::from_major(1500));
        assert_eq!(a * 3, Money::from_major(3000));

        let mut running = a;
        running += b;
        assert_eq!(running, Money::from_major(1500));
    }

    #[test]
    fn test_tax_by_payment_method_rates() {
        let subtotal = Money::from_major(1000);
        assert_eq!(
            subtotal.calculate_tax(TaxRate::from_bps(1500)),
            Money::from_major(150)
        );
        assert_eq!(
            subtotal.calculate_tax(TaxRate::from_bps(500)),
            Money::from_major(50)
        );
    }

    #[test]
    fn test_tax_rounds_to_nearest_paisa() {
        // Rs. 0.05 at 15% = 0.75 paisa → 1 paisa
        assert_eq!(
            Money::from_minor(5).calculate_tax(TaxRate::from_bps(1500)),
            Money::from_minor(1)
        );
        // Rs. 0.03 at 15% = 0.45 paisa → 0 paisa
        assert_eq!(
            Money::from_minor(3).calculate_tax(TaxRate::from_bps(1500)),
            Money::zero()
        );
    }

    #[test]
    fn test_round_to_major_half_away_from_zero() {
        assert_eq!(Money::from_minor(1250).round_to_major(), 13);
        assert_eq!(Money::from_minor(1249).round_to_major(), 12);
        assert_eq!(Money::from_minor(-1250).round_to_major(), -13);
        assert_eq!(Money::zero().round_to_major(), 0);
    }

    #[test]
    fn test_format_whole() {
        assert_eq!(Money::from_major(1495).format_whole("Rs."), "Rs. 1495");
        assert_eq!(Money::from_minor(19_550).format_whole("Rs."), "Rs. 196");
    }

    /// Many small-priced lines sum exactly, unlike repeated float addition.
    #[test]
    fn test_sum_has_no_drift() {
        let dime = Money::from_minor(10);
        let total: Money = std::iter::repeat(dime).take(1_000).sum();
        assert_eq!(total, Money::from_major(100));

        let float_total: f64 = std::iter::repeat(0.1_f64).take(1_000).sum();
        assert_ne!(float_total, 100.0);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
        assert!(Money::from_minor(-1).is_negative());
    }

    #[test]
    fn test_arithmetic_saturates_at_the_limit() {
        let near_max = Money::from_minor(i64::MAX - 10);

        assert_eq!(near_max + Money::from_minor(100), Money::from_minor(i64::MAX));
        assert_eq!(
            Money::from_minor(i64::MAX / 2 + 1).multiply_quantity(2),
            Money::from_minor(i64::MAX)
        );

        let total: Money = [near_max, near_max].into_iter().sum();
        assert_eq!(total, Money::from_minor(i64::MAX));
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        let near_max = Money::from_minor(i64::MAX - 10);

        assert_eq!(near_max.checked_add(Money::from_minor(100)), None);
        assert_eq!(
            near_max.checked_add(Money::from_minor(10)),
            Some(Money::from_minor(i64::MAX))
        );
        assert_eq!(Money::from_minor(i64::MAX / 2 + 1).checked_mul(2), None);
        assert_eq!(Money::from_major(450).checked_mul(2), Some(Money::from_major(900)));
    }

    #[test]
    fn test_tax_on_huge_amount_does_not_truncate() {
        let tax = Money::from_minor(i64::MAX).calculate_tax(TaxRate::from_bps(10_000));
        assert_eq!(tax, Money::from_minor(i64::MAX));

        let tax = Money::from_minor(i64::MAX).calculate_tax(TaxRate::from_bps(1500));
        assert!(tax.is_positive());
    }
}
