use price_feed_interface::types::price_data::PriceData;
use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Price(Address),
    Decimals,
}

pub fn read_price_data(env: &Env, asset: &Address) -> Option<PriceData> {
    env.storage()
        .instance()
        .get(&DataKey::Price(asset.clone()))
}

pub fn write_price_data(env: &Env, asset: &Address, price_data: &PriceData) {
    env.storage()
        .instance()
        .set(&DataKey::Price(asset.clone()), price_data);
}

pub fn read_decimals(env: &Env) -> Option<u32> {
    env.storage().instance().get(&DataKey::Decimals)
}

pub fn write_decimals(env: &Env, decimals: u32) {
    env.storage().instance().set(&DataKey::Decimals, &decimals);
}
