//! Money calculation utilities using rust_decimal for precision
//!
//! All amounts are kept as `Decimal` and rounded to the persisted column
//! precision (2 decimal places, half away from zero).

use rust_decimal::prelude::*;

/// Fractional digits of every persisted monetary column
pub const DECIMAL_PLACES: u32 = 2;

/// Fixed sales tax rate applied to order summaries (7.25%)
pub const TAX_RATE: Decimal = Decimal::from_parts(725, 0, 0, false, 4);

/// Round a monetary value to 2 decimal places, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Tax owed on a subtotal at [`TAX_RATE`]; `None` on overflow
#[inline]
pub fn tax_for(sub_total: Decimal) -> Option<Decimal> {
    sub_total.checked_mul(TAX_RATE).map(round_money)
}

/// Total for one order line (`unit_price * quantity`)
#[inline]
pub fn line_total(unit_price: Decimal, quantity: i32) -> Decimal {
    round_money(unit_price * Decimal::from(quantity))
}
