//! Note, the PriceFeedTrait follows the SEP-40 `decimals`/`lastprice` pair
//! with an asset keyed by its contract address.
//! More details can be found at the following link:
//! https://github.com/stellar/stellar-protocol/blob/master/ecosystem/sep-0040.md

#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};
use types::price_data::PriceData;

pub mod types;

pub struct Spec;

/// Oracle feed interface description
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedTrait {
    /// Return the number of decimals for all assets quoted by the oracle
    fn decimals(env: Env) -> u32;

    /// Get the most recent price for an asset
    fn lastprice(env: Env, asset: Address) -> Option<PriceData>;
}
