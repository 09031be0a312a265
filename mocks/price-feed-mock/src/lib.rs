#![deny(warnings)]
#![no_std]

mod storage;

use crate::storage::*;
use common::FEED_DECIMALS;
use price_feed_interface::{types::price_data::PriceData, PriceFeedTrait};
use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
pub struct PriceFeedMock;

#[contractimpl]
impl PriceFeedTrait for PriceFeedMock {
    fn decimals(env: Env) -> u32 {
        read_decimals(&env).unwrap_or(FEED_DECIMALS)
    }

    fn lastprice(env: Env, asset: Address) -> Option<PriceData> {
        read_price_data(&env, &asset)
    }
}

#[contractimpl]
impl PriceFeedMock {
    /// Publishes a new round for the asset stamped with the current ledger timestamp
    pub fn set_price(env: Env, asset: Address, price: i128) {
        let round_id = read_price_data(&env, &asset)
            .map(|prev| prev.round_id + 1)
            .unwrap_or(1);

        write_price_data(
            &env,
            &asset,
            &PriceData {
                price,
                timestamp: env.ledger().timestamp(),
                round_id,
            },
        );
    }

    /// Overrides the reported decimals. Not a SEP-40 method.
    pub fn set_decimals(env: Env, decimals: u32) {
        write_decimals(&env, decimals);
    }
}
