//! Fixed-point money rounding.
//!
//! All monetary values are `rust_decimal::Decimal`; binary floating
//! point never touches an amount. Rounding is half-up
//! (`MidpointAwayFromZero`) everywhere. Share division runs at 10
//! fractional digits before the final 2-digit round, which keeps
//! per-event rounding error from compounding across participants.

use rust_decimal::{Decimal, RoundingStrategy};

/// Guard precision for intermediate share division.
const GUARD_SCALE: u32 = 10;

/// Output precision for all monetary amounts.
const MONEY_SCALE: u32 = 2;

/// Round to 2 decimal places, half-up, with a fixed scale of 2.
///
/// # Examples
///
/// ```
/// use settlement_engine::core::money::round2;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round2(dec!(10.005)), dec!(10.01));
/// assert_eq!(round2(dec!(10)).to_string(), "10.00");
/// ```
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// One participant's slice of an event amount.
///
/// Computes `amount × share ÷ total_shares` with 10 fractional digits
/// of guard precision, half-up, then rounds the result to 2 decimals.
/// The caller guarantees `total_shares != 0`.
pub fn share_amount(amount: Decimal, share: Decimal, total_shares: Decimal) -> Decimal {
    let quotient = (amount * share / total_shares)
        .round_dp_with_strategy(GUARD_SCALE, RoundingStrategy::MidpointAwayFromZero);
    round2(quotient)
}
