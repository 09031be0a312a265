use dsc_engine_interface::types::error::Error;
use dsc_token_interface::DscTokenClient;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_dsc, read_dsc_minted, write_dsc_minted};

use super::utils::transfer::transfer;
use super::utils::validation::require_positive_amount;

/// Burning only lowers debt, so the health factor isn't checked
pub fn burn_dsc(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    do_burn_dsc(env, amount, who, who)
}

/// Reduces the debt of `on_behalf_of` by `amount` paid with DSC of `payer`
pub(crate) fn do_burn_dsc(
    env: &Env,
    amount: i128,
    on_behalf_of: &Address,
    payer: &Address,
) -> Result<(), Error> {
    require_positive_amount(env, amount);

    let dsc_minted = read_dsc_minted(env, on_behalf_of);
    if amount > dsc_minted {
        return Err(Error::InsufficientDebt);
    }
    write_dsc_minted(env, on_behalf_of, dsc_minted - amount)?;

    let dsc = read_dsc(env)?;
    let engine = env.current_contract_address();

    transfer(env, &dsc, payer, &engine, amount)?;
    DscTokenClient::new(env, &dsc).burn(&engine, &amount);

    event::dsc_burned(env, on_behalf_of, payer, amount);

    Ok(())
}
