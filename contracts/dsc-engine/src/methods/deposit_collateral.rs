use dsc_engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_collateral, write_collateral};

use super::utils::transfer::transfer;
use super::utils::validation::{require_positive_amount, require_supported_asset};

pub fn deposit_collateral(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    do_deposit_collateral(env, who, asset, amount)
}

/// Books the deposit and pulls `amount` of `asset` from `who`
pub(crate) fn do_deposit_collateral(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
) -> Result<(), Error> {
    require_positive_amount(env, amount);
    require_supported_asset(env, asset)?;

    let collateral_after = read_collateral(env, who, asset)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;
    write_collateral(env, who, asset, collateral_after)?;

    event::collateral_deposited(env, who, asset, amount);

    transfer(env, asset, who, &env.current_contract_address(), amount)
}
