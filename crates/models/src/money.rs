//! Prices are decimals in the domain and integer cents in the store.
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::ModelError;

/// Convert a price to cents, rounding half away from zero.
pub fn to_cents(price: Decimal) -> Result<i64, ModelError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ModelError::Validation("price must not be negative".into()));
    }
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    (rounded * Decimal::ONE_HUNDRED)
        .to_i64()
        .ok_or_else(|| ModelError::Validation("price out of range".into()))
}

pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}
