use soroban_sdk::{contracttype, Address, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_USER_DATA_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_USER_DATA_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

pub const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum CommonDataKey {
    Balance(Address),
    Engine,
    TotalSupply,
}

pub fn read_engine(env: &Env) -> Address {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&CommonDataKey::Engine)
        .unwrap_or_else(|| panic!("not initialized"))
}

pub fn write_engine(env: &Env, id: &Address) {
    env.storage().instance().set(&CommonDataKey::Engine, id);

    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn has_engine(env: &Env) -> bool {
    env.storage().instance().has(&CommonDataKey::Engine)
}

pub fn read_balance(env: &Env, addr: &Address) -> i128 {
    let key = CommonDataKey::Balance(addr.clone());
    let balance = env.storage().persistent().get(&key);

    if balance.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    balance.unwrap_or(0)
}

/// Zero balances are removed from storage
pub fn write_balance(env: &Env, addr: &Address, amount: i128) {
    let key = CommonDataKey::Balance(addr.clone());

    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }

    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&CommonDataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, val: i128) {
    env.storage()
        .instance()
        .set(&CommonDataKey::TotalSupply, &val);
}

pub fn read_metadata(env: &Env) -> TokenMetadata {
    TokenUtils::new(env).metadata().get_metadata()
}

pub fn read_decimal(env: &Env) -> u32 {
    read_metadata(env).decimal
}

pub fn read_name(env: &Env) -> String {
    read_metadata(env).name
}

pub fn read_symbol(env: &Env) -> String {
    read_metadata(env).symbol
}

pub fn write_metadata(env: &Env, metadata: TokenMetadata) {
    TokenUtils::new(env).metadata().set_metadata(&metadata);
}
