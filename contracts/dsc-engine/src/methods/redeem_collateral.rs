use dsc_engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_collateral, write_collateral};
use crate::types::price_provider::PriceProvider;

use super::utils::transfer::transfer;
use super::utils::validation::{
    require_health_factor_not_broken, require_positive_amount, require_supported_asset,
};

pub fn redeem_collateral(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    do_redeem_collateral(env, asset, amount, who, who)?;

    require_health_factor_not_broken(env, who, &mut PriceProvider::new(env))
}

/// Moves `amount` of `asset` out of the position of `from` and sends it to `to`.
/// Used with `from != to` when a liquidator seizes collateral.
pub(crate) fn do_redeem_collateral(
    env: &Env,
    asset: &Address,
    amount: i128,
    from: &Address,
    to: &Address,
) -> Result<(), Error> {
    require_positive_amount(env, amount);
    require_supported_asset(env, asset)?;

    let collateral = read_collateral(env, from, asset);
    if amount > collateral {
        return Err(Error::InsufficientCollateral);
    }
    write_collateral(env, from, asset, collateral - amount)?;

    event::collateral_redeemed(env, from, to, asset, amount);

    transfer(env, asset, &env.current_contract_address(), to, amount)
}
