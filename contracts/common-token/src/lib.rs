#![deny(warnings)]
#![no_std]

use soroban_sdk::{Address, Env};

pub mod balance;
pub mod storage;

/// Requires the engine registered at initialization to authorize the call
pub fn verify_caller_is_engine(e: &Env) -> Address {
    let engine = crate::storage::read_engine(e);
    engine.require_auth();
    engine
}

pub fn require_nonnegative_amount(amount: i128) {
    if amount < 0 {
        panic!("negative amount is not allowed: {}", amount)
    }
}

pub fn require_positive_amount(amount: i128) {
    if amount <= 0 {
        panic!("zero or negative amount is not allowed: {}", amount)
    }
}
