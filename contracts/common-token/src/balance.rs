use soroban_sdk::{Address, Env};

use crate::require_positive_amount;
use crate::storage::{read_balance, read_total_supply, write_balance, write_total_supply};

pub fn receive_balance(e: &Env, addr: &Address, amount: i128) {
    require_positive_amount(amount);

    let balance = read_balance(e, addr)
        .checked_add(amount)
        .unwrap_or_else(|| panic!("balance overflow"));

    write_balance(e, addr, balance);
}

pub fn spend_balance(e: &Env, addr: &Address, amount: i128) {
    require_positive_amount(amount);

    let balance = read_balance(e, addr);
    if balance < amount {
        panic!("insufficient balance");
    }

    write_balance(e, addr, balance - amount);
}

/// Moves `amount` between two holders
pub fn move_balance(e: &Env, from: &Address, to: &Address, amount: i128) {
    spend_balance(e, from, amount);
    receive_balance(e, to, amount);
}

/// Applies a signed delta to the total supply
pub fn add_total_supply(e: &Env, amount: i128) {
    let total_supply = read_total_supply(e)
        .checked_add(amount)
        .unwrap_or_else(|| panic!("total supply overflow"));

    if total_supply.is_negative() {
        panic!("negative total supply");
    }

    write_total_supply(e, total_supply);
}
