use dsc_engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::types::price_provider::PriceProvider;

use super::deposit_collateral::do_deposit_collateral;
use super::mint_dsc::do_mint_dsc;

pub fn deposit_collateral_and_mint_dsc(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount_collateral: i128,
    amount_dsc: i128,
) -> Result<(), Error> {
    who.require_auth();

    do_deposit_collateral(env, who, asset, amount_collateral)?;
    do_mint_dsc(env, who, amount_dsc, &mut PriceProvider::new(env))
}
