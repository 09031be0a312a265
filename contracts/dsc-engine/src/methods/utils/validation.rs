use common::MIN_HEALTH_FACTOR;
use dsc_engine_interface::types::error::Error;
use soroban_sdk::{assert_with_error, log, panic_with_error, Address, Env};

use crate::methods::account_data::health_factor;
use crate::storage::{has_dsc, read_price_feed};
use crate::types::price_provider::PriceProvider;

pub fn require_not_initialized(env: &Env) {
    if has_dsc(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_positive_amount(env: &Env, amount: i128) {
    assert_with_error!(env, amount > 0, Error::InvalidAmount);
}

pub fn require_nonnegative(env: &Env, value: i128) {
    assert_with_error!(env, value >= 0, Error::MustBeNonNegative);
}

pub fn require_supported_asset(env: &Env, asset: &Address) -> Result<(), Error> {
    read_price_feed(env, asset)
        .map(|_| ())
        .ok_or(Error::AssetNotSupported)
}

/// Exactly `MIN_HEALTH_FACTOR` is safe
pub fn require_health_factor_not_broken(
    env: &Env,
    who: &Address,
    price_provider: &mut PriceProvider,
) -> Result<(), Error> {
    let health_factor = health_factor(env, who, price_provider)?;

    if health_factor < MIN_HEALTH_FACTOR {
        log!(env, "health factor broken", who.clone(), health_factor);
        return Err(Error::HealthFactorBroken);
    }

    Ok(())
}
