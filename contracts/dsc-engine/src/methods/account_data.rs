use common::{
    mul_div, percent_mul, HEALTH_FACTOR_PRECISION, LIQUIDATION_THRESHOLD, MIN_HEALTH_FACTOR,
};
use dsc_engine_interface::types::account_information::AccountInformation;
use dsc_engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::{read_collateral, read_collateral_assets, read_dsc_minted};
use crate::types::price_provider::PriceProvider;

pub fn calc_account_data(
    env: &Env,
    who: &Address,
    price_provider: &mut PriceProvider,
) -> Result<AccountInformation, Error> {
    Ok(AccountInformation {
        total_dsc_minted: read_dsc_minted(env, who),
        collateral_value_in_usd: calc_collateral_value(env, who, price_provider)?,
    })
}

/// Sums USD value of every supported asset deposited by `who`
pub fn calc_collateral_value(
    env: &Env,
    who: &Address,
    price_provider: &mut PriceProvider,
) -> Result<i128, Error> {
    let mut total_value = 0i128;

    for asset in read_collateral_assets(env) {
        let amount = read_collateral(env, who, &asset);
        if amount == 0 {
            continue;
        }

        total_value = total_value
            .checked_add(price_provider.usd_value(&asset, amount)?)
            .ok_or(Error::MathOverflowError)?;
    }

    Ok(total_value)
}

pub fn health_factor(
    env: &Env,
    who: &Address,
    price_provider: &mut PriceProvider,
) -> Result<i128, Error> {
    let account_data = calc_account_data(env, who, price_provider)?;

    calc_health_factor(
        env,
        account_data.total_dsc_minted,
        account_data.collateral_value_in_usd,
    )
}

/// Haircut collateral value over debt scaled by `HEALTH_FACTOR_PRECISION`.
///
/// An empty position sits exactly at `MIN_HEALTH_FACTOR`. With no debt the
/// adjusted collateral value itself is scaled up and never reported below
/// the minimum.
pub fn calc_health_factor(
    env: &Env,
    total_dsc_minted: i128,
    collateral_value_in_usd: i128,
) -> Result<i128, Error> {
    if total_dsc_minted == 0 && collateral_value_in_usd == 0 {
        return Ok(MIN_HEALTH_FACTOR);
    }

    let adjusted_collateral = percent_mul(collateral_value_in_usd, LIQUIDATION_THRESHOLD)
        .ok_or(Error::MathOverflowError)?;

    if total_dsc_minted == 0 {
        return Ok(adjusted_collateral
            .saturating_mul(HEALTH_FACTOR_PRECISION)
            .max(MIN_HEALTH_FACTOR));
    }

    mul_div(
        env,
        adjusted_collateral,
        HEALTH_FACTOR_PRECISION,
        total_dsc_minted,
    )
    .ok_or(Error::MathOverflowError)
}
