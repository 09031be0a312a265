#![deny(warnings)]
#![no_std]

use dsc_engine_interface::types::{account_information::AccountInformation, error::Error};
use dsc_engine_interface::DscEngineTrait;
use methods::{
    account_data::{calc_account_data, calc_collateral_value, calc_health_factor, health_factor},
    burn_dsc::burn_dsc,
    deposit_collateral::deposit_collateral,
    deposit_collateral_and_mint_dsc::deposit_collateral_and_mint_dsc,
    initialize::initialize,
    liquidate::liquidate,
    mint_dsc::mint_dsc,
    redeem_collateral::redeem_collateral,
    redeem_collateral_for_dsc::redeem_collateral_for_dsc,
    utils::validation::require_nonnegative,
};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use crate::storage::*;
use crate::types::price_provider::PriceProvider;
use crate::types::reentrancy_guard::ReentrancyGuard;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;
mod types;

#[contract]
pub struct DscEngine;

#[contractimpl]
impl DscEngineTrait for DscEngine {
    /// Registers collateral assets paired 1:1 with their price feeds and the DSC token.
    ///
    /// # Errors
    ///
    /// - AlreadyInitialized
    /// - ConfigLengthMismatch if `collateral_assets` and `price_feeds` differ in length
    /// - DuplicateCollateralAsset
    /// - InvalidFeedDecimals if a feed doesn't quote with 8 decimals
    ///
    fn initialize(
        env: Env,
        collateral_assets: Vec<Address>,
        price_feeds: Vec<Address>,
        dsc: Address,
    ) -> Result<(), Error> {
        initialize(&env, &collateral_assets, &price_feeds, &dsc)
    }

    fn version() -> u32 {
        1
    }

    /// Deposits `amount` of a supported collateral `asset` from `who`.
    ///
    /// # Errors
    ///
    /// - InvalidAmount if `amount` isn't positive
    /// - AssetNotSupported
    /// - TransferFailed if the token doesn't move the funds
    ///
    fn deposit_collateral(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), Error> {
        let _guard = ReentrancyGuard::enter(&env)?;

        deposit_collateral(&env, &who, &asset, amount)
    }

    /// Deposits collateral and mints DSC against it in one operation.
    /// Fails as a whole if either part fails.
    fn deposit_collateral_and_mint_dsc(
        env: Env,
        who: Address,
        asset: Address,
        amount_collateral: i128,
        amount_dsc: i128,
    ) -> Result<(), Error> {
        let _guard = ReentrancyGuard::enter(&env)?;

        deposit_collateral_and_mint_dsc(&env, &who, &asset, amount_collateral, amount_dsc)
    }

    /// Withdraws `amount` of `asset` back to `who`.
    ///
    /// # Errors
    ///
    /// - InsufficientCollateral if `amount` exceeds the deposited balance
    /// - HealthFactorBroken if the remaining collateral doesn't back the debt
    /// - TransferFailed
    ///
    fn redeem_collateral(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), Error> {
        let _guard = ReentrancyGuard::enter(&env)?;

        redeem_collateral(&env, &who, &asset, amount)
    }

    /// Burns DSC then redeems collateral in one operation.
    /// Fails as a whole if either part fails.
    fn redeem_collateral_for_dsc(
        env: Env,
        who: Address,
        asset: Address,
        amount_collateral: i128,
        amount_dsc: i128,
    ) -> Result<(), Error> {
        let _guard = ReentrancyGuard::enter(&env)?;

        redeem_collateral_for_dsc(&env, &who, &asset, amount_collateral, amount_dsc)
    }

    /// Mints `amount` DSC to `who` against the deposited collateral.
    ///
    /// # Errors
    ///
    /// - HealthFactorBroken if the position would become unsafe
    /// - MintFailed if the token refuses to mint
    ///
    fn mint_dsc(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        let _guard = ReentrancyGuard::enter(&env)?;

        mint_dsc(&env, &who, amount)
    }

    /// Repays `amount` of the debt of `who` with DSC of `who`.
    ///
    /// # Errors
    ///
    /// - InsufficientDebt if `amount` exceeds the minted DSC
    /// - TransferFailed if `who` can't pay
    ///
    fn burn_dsc(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        let _guard = ReentrancyGuard::enter(&env)?;

        burn_dsc(&env, &who, amount)
    }

    /// Covers `debt_to_cover` of the debt of an unsafe `who` with DSC of `liquidator`.
    /// The liquidator receives the equivalent `collateral_asset` plus a 10% bonus.
    ///
    /// # Errors
    ///
    /// - HealthFactorOk if `who` is safe
    /// - InsufficientCollateral if the position can't pay the seized amount
    /// - HealthFactorNotImproved if the health factor of `who` doesn't grow
    /// - HealthFactorBroken if the liquidator ends up unsafe
    ///
    fn liquidate(
        env: Env,
        liquidator: Address,
        collateral_asset: Address,
        who: Address,
        debt_to_cover: i128,
    ) -> Result<(), Error> {
        let _guard = ReentrancyGuard::enter(&env)?;

        liquidate(&env, &liquidator, &collateral_asset, &who, debt_to_cover)
    }

    fn health_factor(env: Env, who: Address) -> Result<i128, Error> {
        health_factor(&env, &who, &mut PriceProvider::new(&env))
    }

    fn calculate_health_factor(
        env: Env,
        total_dsc_minted: i128,
        collateral_value_in_usd: i128,
    ) -> Result<i128, Error> {
        require_nonnegative(&env, total_dsc_minted);
        require_nonnegative(&env, collateral_value_in_usd);

        calc_health_factor(&env, total_dsc_minted, collateral_value_in_usd)
    }

    fn account_information(env: Env, who: Address) -> Result<AccountInformation, Error> {
        calc_account_data(&env, &who, &mut PriceProvider::new(&env))
    }

    fn account_collateral_value(env: Env, who: Address) -> Result<i128, Error> {
        calc_collateral_value(&env, &who, &mut PriceProvider::new(&env))
    }

    fn usd_value(env: Env, asset: Address, amount: i128) -> Result<i128, Error> {
        PriceProvider::new(&env).usd_value(&asset, amount)
    }

    fn token_amount_from_usd(env: Env, asset: Address, usd_amount: i128) -> Result<i128, Error> {
        PriceProvider::new(&env).token_amount_from_usd(&asset, usd_amount)
    }

    fn collateral_balance(env: Env, who: Address, asset: Address) -> i128 {
        read_collateral(&env, &who, &asset)
    }

    fn dsc_minted(env: Env, who: Address) -> i128 {
        read_dsc_minted(&env, &who)
    }

    fn collateral_assets(env: Env) -> Vec<Address> {
        read_collateral_assets(&env)
    }

    fn price_feed(env: Env, asset: Address) -> Option<Address> {
        read_price_feed(&env, &asset)
    }

    fn dsc(env: Env) -> Result<Address, Error> {
        read_dsc(&env)
    }
}
