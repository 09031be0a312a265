use soroban_sdk::{contracttype, Address, Env};

/// How the mock reacts to `mint` and `transfer`
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Behavior {
    Regular,
    /// `mint` returns false, `transfer` panics
    Fail,
    /// `transfer` calls back into the engine's `deposit_collateral`
    Reenter(Address),
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Behavior,
}

pub fn read_behavior(env: &Env) -> Behavior {
    env.storage()
        .instance()
        .get(&DataKey::Behavior)
        .unwrap_or(Behavior::Regular)
}

pub fn write_behavior(env: &Env, behavior: &Behavior) {
    env.storage().instance().set(&DataKey::Behavior, behavior);
}
