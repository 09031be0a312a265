#![deny(warnings)]
#![no_std]

use common_token::balance::{add_total_supply, move_balance, receive_balance, spend_balance};
use common_token::storage::{read_balance, read_total_supply};
use dsc_engine_interface::DscEngineClient;
use soroban_sdk::{contract, contractimpl, Address, Env};

pub use storage::Behavior;
use storage::{read_behavior, write_behavior};

mod storage;

pub const DECIMALS: u32 = 18;

#[contract]
pub struct TokenMock;

#[contractimpl]
impl TokenMock {
    pub fn set_behavior(env: Env, behavior: Behavior) {
        write_behavior(&env, &behavior);
    }

    pub fn behavior(env: Env) -> Behavior {
        read_behavior(&env)
    }

    /// Unrestricted mint. Returns false in the failing mode
    pub fn mint(env: Env, to: Address, amount: i128) -> bool {
        if read_behavior(&env) == Behavior::Fail {
            return false;
        }

        receive_balance(&env, &to, amount);
        add_total_supply(&env, amount);

        true
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        match read_behavior(&env) {
            Behavior::Regular => {}
            Behavior::Fail => panic!("token-mock: transfer failed"),
            Behavior::Reenter(engine) => {
                DscEngineClient::new(&env, &engine).deposit_collateral(
                    &from,
                    &env.current_contract_address(),
                    &amount,
                );
            }
        }

        from.require_auth();
        move_balance(&env, &from, &to, amount);
    }

    pub fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();

        spend_balance(&env, &from, amount);
        add_total_supply(&env, -amount);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }
}
