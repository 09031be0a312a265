extern crate std;

use soroban_sdk::testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation, Events};
use soroban_sdk::{symbol_short, vec, IntoVal, Symbol};
use token_mock::Behavior;

use crate::tests::sut::{init_engine, ONE};
use crate::*;

#[test]
fn should_require_authorized_caller() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let user = Address::generate(&env);
    let asset = sut.weth().token.address.clone();

    sut.weth().token.mint(&user, &ONE);
    sut.engine.deposit_collateral(&user, &asset, &ONE);

    assert_eq!(
        env.auths(),
        [(
            user.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    sut.engine.address.clone(),
                    Symbol::new(&env, "deposit_collateral"),
                    (&user, &asset, ONE).into_val(&env)
                )),
                sub_invocations: std::vec![AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        asset.clone(),
                        symbol_short!("transfer"),
                        (&user, &sut.engine.address, ONE).into_val(&env)
                    )),
                    sub_invocations: std::vec![]
                }]
            }
        )]
    );
}

#[test]
fn should_fail_when_invalid_amount() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let user = Address::generate(&env);

    assert_eq!(
        sut.engine
            .try_deposit_collateral(&user, &sut.weth().token.address, &0)
            .unwrap_err()
            .unwrap(),
        Error::InvalidAmount
    );
    assert_eq!(
        sut.engine
            .try_deposit_collateral(&user, &sut.weth().token.address, &-1)
            .unwrap_err()
            .unwrap(),
        Error::InvalidAmount
    );
}

#[test]
fn should_fail_when_asset_not_supported() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let user = Address::generate(&env);

    assert_eq!(
        sut.engine
            .try_deposit_collateral(&user, &Address::generate(&env), &ONE)
            .unwrap_err()
            .unwrap(),
        Error::AssetNotSupported
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #101)")]
fn should_panic_when_asset_not_supported() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let user = Address::generate(&env);

    sut.engine
        .deposit_collateral(&user, &sut.dsc.address, &ONE);
}

#[test]
fn should_change_balances() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let user = Address::generate(&env);
    let token = &sut.weth().token;

    token.mint(&user, &(10 * ONE));
    sut.engine
        .deposit_collateral(&user, &token.address, &(4 * ONE));

    assert_eq!(token.balance(&user), 6 * ONE);
    assert_eq!(token.balance(&sut.engine.address), 4 * ONE);
    assert_eq!(sut.engine.collateral_balance(&user, &token.address), 4 * ONE);

    sut.engine
        .deposit_collateral(&user, &token.address, &(6 * ONE));

    assert_eq!(token.balance(&user), 0);
    assert_eq!(token.balance(&sut.engine.address), 10 * ONE);
    assert_eq!(sut.engine.collateral_balance(&user, &token.address), 10 * ONE);
    assert_eq!(sut.engine.dsc_minted(&user), 0);
}

#[test]
fn should_emit_events() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let user = Address::generate(&env);
    let asset = sut.weth().token.address.clone();

    sut.weth().token.mint(&user, &ONE);
    sut.engine.deposit_collateral(&user, &asset, &ONE);

    let event = env.events().all().pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.engine.address.clone(),
                (Symbol::new(&env, "collateral_deposited"), user.clone()).into_val(&env),
                (asset, ONE).into_val(&env)
            ),
        ]
    );
}

#[test]
fn should_fail_when_transfer_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let user = Address::generate(&env);
    let token = &sut.weth().token;

    token.mint(&user, &ONE);

    // not enough tokens
    assert_eq!(
        sut.engine
            .try_deposit_collateral(&user, &token.address, &(2 * ONE))
            .unwrap_err()
            .unwrap(),
        Error::TransferFailed
    );

    token.set_behavior(&Behavior::Fail);

    assert_eq!(
        sut.engine
            .try_deposit_collateral(&user, &token.address, &ONE)
            .unwrap_err()
            .unwrap(),
        Error::TransferFailed
    );
    assert_eq!(sut.engine.collateral_balance(&user, &token.address), 0);
    assert_eq!(token.balance(&user), ONE);
}
