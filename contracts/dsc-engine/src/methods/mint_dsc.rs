use dsc_engine_interface::types::error::Error;
use dsc_token_interface::DscTokenClient;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_dsc, read_dsc_minted, write_dsc_minted};
use crate::types::price_provider::PriceProvider;

use super::utils::validation::{require_health_factor_not_broken, require_positive_amount};

pub fn mint_dsc(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    do_mint_dsc(env, who, amount, &mut PriceProvider::new(env))
}

/// Books the debt, checks the position and only then mints to `who`
pub(crate) fn do_mint_dsc(
    env: &Env,
    who: &Address,
    amount: i128,
    price_provider: &mut PriceProvider,
) -> Result<(), Error> {
    require_positive_amount(env, amount);

    let dsc_minted_after = read_dsc_minted(env, who)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;
    write_dsc_minted(env, who, dsc_minted_after)?;

    require_health_factor_not_broken(env, who, price_provider)?;

    let dsc = read_dsc(env)?;
    match DscTokenClient::new(env, &dsc).try_mint(who, &amount) {
        Ok(Ok(true)) => {}
        _ => return Err(Error::MintFailed),
    }

    event::dsc_minted(env, who, amount);

    Ok(())
}
