use common::{percent_mul, LIQUIDATION_BONUS, MIN_HEALTH_FACTOR};
use dsc_engine_interface::types::error::Error;
use soroban_sdk::{assert_with_error, Address, Env};

use crate::event;
use crate::types::price_provider::PriceProvider;

use super::account_data::health_factor;
use super::burn_dsc::do_burn_dsc;
use super::redeem_collateral::do_redeem_collateral;
use super::utils::validation::{
    require_health_factor_not_broken, require_positive_amount, require_supported_asset,
};

/// Covers `debt_to_cover` of the debt of an unsafe position of `who` and pays
/// the liquidator its equivalent in `collateral_asset` plus the bonus.
///
/// Below 100% collateralization the position can't fund the bonus and the
/// call fails with `InsufficientCollateral`.
pub fn liquidate(
    env: &Env,
    liquidator: &Address,
    collateral_asset: &Address,
    who: &Address,
    debt_to_cover: i128,
) -> Result<(), Error> {
    liquidator.require_auth();

    require_positive_amount(env, debt_to_cover);
    require_supported_asset(env, collateral_asset)?;

    let mut price_provider = PriceProvider::new(env);

    let starting_health_factor = health_factor(env, who, &mut price_provider)?;
    assert_with_error!(
        env,
        starting_health_factor < MIN_HEALTH_FACTOR,
        Error::HealthFactorOk
    );

    let debt_equivalent =
        price_provider.token_amount_from_usd(collateral_asset, debt_to_cover)?;
    let bonus = percent_mul(debt_equivalent, LIQUIDATION_BONUS).ok_or(Error::MathOverflowError)?;
    let total_collateral_to_seize = debt_equivalent
        .checked_add(bonus)
        .ok_or(Error::MathOverflowError)?;

    do_redeem_collateral(
        env,
        collateral_asset,
        total_collateral_to_seize,
        who,
        liquidator,
    )?;
    do_burn_dsc(env, debt_to_cover, who, liquidator)?;

    let ending_health_factor = health_factor(env, who, &mut price_provider)?;
    assert_with_error!(
        env,
        ending_health_factor > starting_health_factor,
        Error::HealthFactorNotImproved
    );

    require_health_factor_not_broken(env, liquidator, &mut price_provider)?;

    event::liquidation(
        env,
        liquidator,
        who,
        collateral_asset,
        debt_to_cover,
        total_collateral_to_seize,
    );

    Ok(())
}
