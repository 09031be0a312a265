use dsc_engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::types::price_provider::PriceProvider;

use super::burn_dsc::do_burn_dsc;
use super::redeem_collateral::do_redeem_collateral;
use super::utils::validation::require_health_factor_not_broken;

/// Burns `amount_dsc` and redeems `amount_collateral` of `asset`, checking the
/// position once both are applied
pub fn redeem_collateral_for_dsc(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount_collateral: i128,
    amount_dsc: i128,
) -> Result<(), Error> {
    who.require_auth();

    do_burn_dsc(env, amount_dsc, who, who)?;
    do_redeem_collateral(env, asset, amount_collateral, who, who)?;

    require_health_factor_not_broken(env, who, &mut PriceProvider::new(env))
}
