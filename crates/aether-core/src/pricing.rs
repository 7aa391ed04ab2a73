//! Deal pricing arithmetic.
//!
//! Discounted prices are drawn first and the "original" price is backed out
//! from the discount percentage, so `original_price >= discounted_price` holds
//! for every percentage below 100.

pub const MIN_DISCOUNTED_PRICE: f64 = 25.0;
pub const MAX_DISCOUNTED_PRICE: f64 = 200.0;
pub const MIN_DISCOUNT_PERCENTAGE: u8 = 15;
pub const MAX_DISCOUNT_PERCENTAGE: u8 = 75;

/// Round to two decimal places, ties away from zero.
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Back out the pre-discount price: `discounted / (1 - percentage / 100)`,
/// rounded to cents.
///
/// `percentage` must be below 100; the generator only draws 15..=75.
#[must_use]
pub fn original_price(discounted: f64, percentage: u8) -> f64 {
    debug_assert!(percentage < 100, "discount percentage must be below 100");
    round_to_cents(discounted / (1.0 - f64::from(percentage) / 100.0))
}
