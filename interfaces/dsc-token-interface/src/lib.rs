#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, String};
pub struct Spec;

/// Interface for the DSC token. SEP-41 plus engine-only minting
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "DscTokenClient")]
pub trait DscTokenTrait {
    fn initialize(e: Env, name: String, symbol: String, decimal: u32, engine: Address);

    fn version() -> u32;

    fn allowance(e: Env, from: Address, spender: Address) -> i128;

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32);

    fn balance(e: Env, id: Address) -> i128;

    fn transfer(e: Env, from: Address, to: Address, amount: i128);

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128);

    fn burn(e: Env, from: Address, amount: i128);

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128);

    fn mint(e: Env, to: Address, amount: i128) -> bool;

    fn decimals(e: Env) -> u32;

    fn name(e: Env) -> String;

    fn symbol(e: Env) -> String;

    fn total_supply(e: Env) -> i128;

    fn engine(e: Env) -> Address;
}
