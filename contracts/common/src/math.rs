use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Env, I256};

use crate::PERCENTAGE_FACTOR;

/// Applies percentage to value rounding down.
/// Percentage expressed as 1% - 100, 100% - 10_000
pub fn percent_mul(value: i128, percentage: u32) -> Option<i128> {
    value.fixed_mul_floor(i128::from(percentage), i128::from(PERCENTAGE_FACTOR))
}

/// Calculates `x * y / denominator` rounding towards zero.
///
/// The product is computed in i128 when it fits and in I256 otherwise,
/// so intermediate values never wrap. Returns `None` on zero denominator
/// or when the quotient doesn't fit into i128.
pub fn mul_div(env: &Env, x: i128, y: i128, denominator: i128) -> Option<i128> {
    if denominator == 0 {
        return None;
    }

    match x.checked_mul(y) {
        Some(product) => product.checked_div(denominator),
        None => I256::from_i128(env, x)
            .mul(&I256::from_i128(env, y))
            .div(&I256::from_i128(env, denominator))
            .to_i128(),
    }
}
