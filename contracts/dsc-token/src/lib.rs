#![deny(warnings)]
#![no_std]

use common_token::balance::{add_total_supply, move_balance, receive_balance, spend_balance};
use common_token::storage::*;
use common_token::{require_nonnegative_amount, require_positive_amount, verify_caller_is_engine};
use dsc_token_interface::DscTokenTrait;
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;

use crate::storage::{read_allowance, spend_allowance, write_allowance};

mod event;
mod storage;

const MAX_DECIMALS: u32 = 18;

#[contract]
pub struct DscToken;

#[contractimpl]
impl DscTokenTrait for DscToken {
    /// Initializes the DSC token contract.
    ///
    /// # Arguments
    ///
    /// - name - The name of the token.
    /// - symbol - The symbol of the token.
    /// - decimal - The number of decimals of the token.
    /// - engine - The address of the engine contract, the only minter.
    ///
    /// # Panics
    ///
    /// Panics if the specified decimal value exceeds 18.
    /// Panics if the contract has already been initialized.
    /// Panics if name or symbol is empty
    ///
    fn initialize(e: Env, name: String, symbol: String, decimal: u32, engine: Address) {
        if name.len() == 0 {
            panic!("dsc-token: no name");
        }

        if symbol.len() == 0 {
            panic!("dsc-token: no symbol");
        }

        if decimal > MAX_DECIMALS {
            panic!("dsc-token: decimal must not be greater than 18");
        }

        if has_engine(&e) {
            panic!("dsc-token: already initialized");
        }

        write_engine(&e, &engine);
        write_metadata(
            &e,
            TokenMetadata {
                decimal,
                name: name.clone(),
                symbol: symbol.clone(),
            },
        );

        event::initialized(&e, engine, decimal, name, symbol);
    }

    /// Returns the current version of the contract.
    fn version() -> u32 {
        1
    }

    /// Returns the amount of tokens that the `spender` is allowed to withdraw from the `from` address.
    ///
    /// # Arguments
    ///
    /// - from - The address of the token owner.
    /// - spender - The address of the spender.
    ///
    /// # Returns
    ///
    /// The amount of tokens that the `spender` is allowed to withdraw from the `from` address.
    ///
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&e, &from, &spender).amount
    }

    /// Set the allowance for a spender to withdraw from the `from` address by a specified amount of tokens.
    ///
    /// # Arguments
    ///
    /// - from - The address of the token owner.
    /// - spender - The address of the spender.
    /// - amount - The new allowance.
    /// - expiration_ledger - The ledger the allowance expires after.
    ///
    /// # Panics
    ///
    /// Panics if the caller is not authorized.
    /// Panics if the amount is negative.
    /// Panics if a positive allowance expires in the past.
    ///
    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();

        require_nonnegative_amount(amount);

        write_allowance(&e, &from, &spender, amount, expiration_ledger);
        event::approve(&e, from, spender, amount, expiration_ledger);
    }

    /// Returns the balance of tokens for a specified `id`.
    fn balance(e: Env, id: Address) -> i128 {
        read_balance(&e, &id)
    }

    /// Transfers a specified amount of tokens from one account (`from`) to another account (`to`).
    ///
    /// # Panics
    ///
    /// Panics if the caller (`from`) is not authorized.
    /// Panics if the amount is not positive or exceeds the balance.
    ///
    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        move_balance(&e, &from, &to, amount);
        event::transfer(&e, from, to, amount);
    }

    /// Transfers a specified amount of tokens from the from account to the to account on behalf of the spender account.
    ///
    /// # Panics
    ///
    /// Panics if the spender is not authorized.
    /// Panics if the spender is not allowed to spend `amount`.
    /// Panics if the amount is not positive or exceeds the balance.
    ///
    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        require_positive_amount(amount);

        spend_allowance(&e, &from, &spender, amount);
        move_balance(&e, &from, &to, amount);
        event::transfer(&e, from, to, amount);
    }

    /// Burns a specified amount of tokens from the from account.
    ///
    /// # Arguments
    ///
    /// - from - The address of the token holder to burn tokens from.
    /// - amount - The amount of tokens to burn.
    ///
    /// # Panics
    ///
    /// Panics if the holder is not authorized.
    /// Panics if the amount is not positive or exceeds the balance.
    ///
    fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();

        do_burn(&e, from, amount);
    }

    /// Burns tokens of the from account on behalf of the spender account.
    ///
    /// # Panics
    ///
    /// Panics if the spender is not authorized.
    /// Panics if the spender is not allowed to spend `amount`.
    ///
    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        require_positive_amount(amount);

        spend_allowance(&e, &from, &spender, amount);
        do_burn(&e, from, amount);
    }

    /// Mints a specified amount of tokens for a given `to`.
    ///
    /// # Arguments
    ///
    /// - to - The address of the user to mint tokens for.
    /// - amount - The amount of tokens to mint.
    ///
    /// # Returns
    ///
    /// Always `true`, any failure panics.
    ///
    /// # Panics
    ///
    /// Panics if the amount is not positive.
    /// Panics if the caller is not the engine associated with this token.
    ///
    fn mint(e: Env, to: Address, amount: i128) -> bool {
        let engine = verify_caller_is_engine(&e);

        receive_balance(&e, &to, amount);
        add_total_supply(&e, amount);
        event::mint(&e, engine, to, amount);

        true
    }

    /// Returns the number of decimal places used by the token.
    fn decimals(e: Env) -> u32 {
        read_decimal(&e)
    }

    /// Returns the name of the token.
    fn name(e: Env) -> String {
        read_name(&e)
    }

    /// Returns the symbol of the token.
    fn symbol(e: Env) -> String {
        read_symbol(&e)
    }

    /// Returns the total supply of tokens.
    fn total_supply(e: Env) -> i128 {
        read_total_supply(&e)
    }

    /// Returns the engine allowed to mint.
    fn engine(e: Env) -> Address {
        read_engine(&e)
    }
}

fn do_burn(e: &Env, from: Address, amount: i128) {
    spend_balance(e, &from, amount);
    add_total_supply(e, -amount);
    event::burn(e, from, amount);
}
