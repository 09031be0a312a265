#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, Vec};
use types::account_information::AccountInformation;
use types::error::Error;

pub mod types;

pub struct Spec;

/// Interface for the DSC engine: collateral ledger, debt accounting and liquidations
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "DscEngineClient")]
pub trait DscEngineTrait {
    fn initialize(
        env: Env,
        collateral_assets: Vec<Address>,
        price_feeds: Vec<Address>,
        dsc: Address,
    ) -> Result<(), Error>;

    fn version() -> u32;

    fn deposit_collateral(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), Error>;

    fn deposit_collateral_and_mint_dsc(
        env: Env,
        who: Address,
        asset: Address,
        amount_collateral: i128,
        amount_dsc: i128,
    ) -> Result<(), Error>;

    fn redeem_collateral(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), Error>;

    fn redeem_collateral_for_dsc(
        env: Env,
        who: Address,
        asset: Address,
        amount_collateral: i128,
        amount_dsc: i128,
    ) -> Result<(), Error>;

    fn mint_dsc(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn burn_dsc(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn liquidate(
        env: Env,
        liquidator: Address,
        collateral_asset: Address,
        who: Address,
        debt_to_cover: i128,
    ) -> Result<(), Error>;

    fn health_factor(env: Env, who: Address) -> Result<i128, Error>;

    fn calculate_health_factor(
        env: Env,
        total_dsc_minted: i128,
        collateral_value_in_usd: i128,
    ) -> Result<i128, Error>;

    fn account_information(env: Env, who: Address) -> Result<AccountInformation, Error>;

    fn account_collateral_value(env: Env, who: Address) -> Result<i128, Error>;

    fn usd_value(env: Env, asset: Address, amount: i128) -> Result<i128, Error>;

    fn token_amount_from_usd(env: Env, asset: Address, usd_amount: i128) -> Result<i128, Error>;

    fn collateral_balance(env: Env, who: Address, asset: Address) -> i128;

    fn dsc_minted(env: Env, who: Address) -> i128;

    fn collateral_assets(env: Env) -> Vec<Address>;

    fn price_feed(env: Env, asset: Address) -> Option<Address>;

    fn dsc(env: Env) -> Result<Address, Error>;
}
