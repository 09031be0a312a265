#![deny(warnings)]
#![no_std]

mod math;
#[cfg(test)]
mod test;

pub use math::*;

/// Percent representation
pub const PERCENTAGE_FACTOR: u32 = 10_000;

/// Number of decimals every accepted price feed must quote in
pub const FEED_DECIMALS: u32 = 8;

/// Lifts an 8-decimal feed answer to 18 decimals
pub const ADDITIONAL_FEED_PRECISION: i128 = 10_000_000_000;

/// Fixed point unit of collateral tokens, DSC and USD values (18 decimals)
pub const PRECISION: i128 = 1_000_000_000_000_000_000;

/// Share of collateral value counted towards solvency, 50%
pub const LIQUIDATION_THRESHOLD: u32 = 5_000;

/// Extra collateral awarded to a liquidator over the covered debt, 10%
pub const LIQUIDATION_BONUS: u32 = 1_000;

/// Scale of the health factor
pub const HEALTH_FACTOR_PRECISION: i128 = 100_000;

/// Lowest health factor of a safe position (1.0)
pub const MIN_HEALTH_FACTOR: i128 = HEALTH_FACTOR_PRECISION;
