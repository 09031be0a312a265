use common::FEED_DECIMALS;
use dsc_engine_interface::types::error::Error;
use price_feed_interface::PriceFeedClient;
use soroban_sdk::{assert_with_error, Address, Env, Vec};

use crate::event;
use crate::storage::{read_price_feed, write_collateral_assets, write_dsc, write_price_feed};

use super::utils::validation::require_not_initialized;

pub fn initialize(
    env: &Env,
    collateral_assets: &Vec<Address>,
    price_feeds: &Vec<Address>,
    dsc: &Address,
) -> Result<(), Error> {
    require_not_initialized(env);

    if collateral_assets.len() != price_feeds.len() {
        return Err(Error::ConfigLengthMismatch);
    }

    for (asset, feed) in collateral_assets.iter().zip(price_feeds.iter()) {
        assert_with_error!(
            env,
            read_price_feed(env, &asset).is_none(),
            Error::DuplicateCollateralAsset
        );

        let decimals = PriceFeedClient::new(env, &feed).decimals();
        assert_with_error!(env, decimals == FEED_DECIMALS, Error::InvalidFeedDecimals);

        write_price_feed(env, &asset, &feed);
    }

    write_collateral_assets(env, collateral_assets);
    write_dsc(env, dsc);

    event::initialized(env, collateral_assets, price_feeds, dsc);

    Ok(())
}
