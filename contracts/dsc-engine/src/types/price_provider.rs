use common::{mul_div, ADDITIONAL_FEED_PRECISION, PRECISION};
use dsc_engine_interface::types::error::Error;
use price_feed_interface::PriceFeedClient;
use soroban_sdk::{log, Address, Env, Map};

use crate::storage::read_price_feed;

/// Reads feed answers at most once per asset, so a single operation
/// values every position against the same prices.
pub struct PriceProvider<'a> {
    env: &'a Env,
    prices: Map<Address, i128>,
}

impl<'a> PriceProvider<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self {
            env,
            prices: Map::new(env),
        }
    }

    /// USD value with 18 decimals of `amount` of `asset`
    pub fn usd_value(&mut self, asset: &Address, amount: i128) -> Result<i128, Error> {
        let price = self.scaled_price(asset)?;

        mul_div(self.env, amount, price, PRECISION).ok_or(Error::MathOverflowError)
    }

    /// Amount of `asset` worth `usd_amount` (18 decimals)
    pub fn token_amount_from_usd(&mut self, asset: &Address, usd_amount: i128) -> Result<i128, Error> {
        let price = self.scaled_price(asset)?;

        mul_div(self.env, usd_amount, PRECISION, price).ok_or(Error::MathOverflowError)
    }

    fn scaled_price(&mut self, asset: &Address) -> Result<i128, Error> {
        self.price(asset)?
            .checked_mul(ADDITIONAL_FEED_PRECISION)
            .ok_or(Error::MathOverflowError)
    }

    // Staleness and sign of the answer are not checked
    fn price(&mut self, asset: &Address) -> Result<i128, Error> {
        if let Some(price) = self.prices.get(asset.clone()) {
            return Ok(price);
        }

        let feed = read_price_feed(self.env, asset).ok_or(Error::AssetNotSupported)?;
        let price_data = PriceFeedClient::new(self.env, &feed)
            .lastprice(asset)
            .ok_or_else(|| {
                log!(self.env, "no price for asset", asset.clone(), feed.clone());
                Error::NoPriceForAsset
            })?;

        self.prices.set(asset.clone(), price_data.price);

        Ok(price_data.price)
    }
}
