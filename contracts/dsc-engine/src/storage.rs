use dsc_engine_interface::types::error::Error;
use soroban_sdk::{assert_with_error, contracttype, vec, Address, Env, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_USER_DATA_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_USER_DATA_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Dsc,
    CollateralAssets,
    PriceFeed(Address),
    Collateral(Address, Address),
    DscMinted(Address),
    Entered,
}

pub fn has_dsc(env: &Env) -> bool {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().has(&DataKey::Dsc)
}

pub fn write_dsc(env: &Env, dsc: &Address) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::Dsc, dsc);
}

pub fn read_dsc(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::Dsc)
        .ok_or(Error::Uninitialized)
}

pub fn write_collateral_assets(env: &Env, assets: &Vec<Address>) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::CollateralAssets, assets);
}

pub fn read_collateral_assets(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::CollateralAssets)
        .unwrap_or(vec![env])
}

pub fn write_price_feed(env: &Env, asset: &Address, feed: &Address) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::PriceFeed(asset.clone()), feed);
}

/// A collateral asset is supported iff it has a price feed
pub fn read_price_feed(env: &Env, asset: &Address) -> Option<Address> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::PriceFeed(asset.clone()))
}

pub fn read_collateral(env: &Env, who: &Address, asset: &Address) -> i128 {
    let key = DataKey::Collateral(who.clone(), asset.clone());

    read_user_amount(env, &key)
}

pub fn write_collateral(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
) -> Result<(), Error> {
    let key = DataKey::Collateral(who.clone(), asset.clone());

    write_user_amount(env, &key, amount)
}

pub fn read_dsc_minted(env: &Env, who: &Address) -> i128 {
    read_user_amount(env, &DataKey::DscMinted(who.clone()))
}

pub fn write_dsc_minted(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    write_user_amount(env, &DataKey::DscMinted(who.clone()), amount)
}

pub fn is_entered(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Entered)
}

pub fn write_entered(env: &Env, entered: bool) {
    if entered {
        env.storage().instance().set(&DataKey::Entered, &true);
    } else {
        env.storage().instance().remove(&DataKey::Entered);
    }
}

fn read_user_amount(env: &Env, key: &DataKey) -> i128 {
    let amount = env.storage().persistent().get(key);

    if amount.is_some() {
        env.storage().persistent().extend_ttl(
            key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    amount.unwrap_or(0)
}

/// Zero amounts are removed, an absent entry reads as zero
fn write_user_amount(env: &Env, key: &DataKey, amount: i128) -> Result<(), Error> {
    assert_with_error!(env, !amount.is_negative(), Error::MustBeNonNegative);

    if amount == 0 {
        env.storage().persistent().remove(key);
        return Ok(());
    }

    env.storage().persistent().set(key, &amount);
    env.storage().persistent().extend_ttl(
        key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );

    Ok(())
}
