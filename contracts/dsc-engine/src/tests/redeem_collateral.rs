use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, IntoVal, Symbol};
use token_mock::Behavior;

use crate::tests::sut::{fill_position, init_engine, ONE};
use crate::*;

#[test]
fn should_redeem_collateral() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let token = &sut.weth().token;
    let user = fill_position(&env, &sut, sut.weth(), 10 * ONE, 0);

    sut.engine.redeem_collateral(&user, &token.address, &(4 * ONE));

    assert_eq!(sut.engine.collateral_balance(&user, &token.address), 6 * ONE);
    assert_eq!(token.balance(&user), 4 * ONE);
    assert_eq!(token.balance(&sut.engine.address), 6 * ONE);

    sut.engine.redeem_collateral(&user, &token.address, &(6 * ONE));

    assert_eq!(sut.engine.collateral_balance(&user, &token.address), 0);
    assert_eq!(token.balance(&user), 10 * ONE);
}

#[test]
fn should_fail_when_exceeds_balance() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let token = &sut.weth().token;
    let user = fill_position(&env, &sut, sut.weth(), 10 * ONE, 0);
    fill_position(&env, &sut, sut.weth(), 10 * ONE, 0);

    // the engine holds 20 tokens but only 10 belong to the user
    assert_eq!(
        sut.engine
            .try_redeem_collateral(&user, &token.address, &(10 * ONE + 1))
            .unwrap_err()
            .unwrap(),
        Error::InsufficientCollateral
    );
    assert_eq!(sut.engine.collateral_balance(&user, &token.address), 10 * ONE);
}

#[test]
fn should_fail_when_health_factor_broken() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let token = &sut.weth().token;
    let user = fill_position(&env, &sut, sut.weth(), 10 * ONE, 5_000 * ONE);

    // 4 ETH left back $4,000 against 5,000 DSC
    assert_eq!(
        sut.engine
            .try_redeem_collateral(&user, &token.address, &(6 * ONE))
            .unwrap_err()
            .unwrap(),
        Error::HealthFactorBroken
    );
    assert_eq!(sut.engine.collateral_balance(&user, &token.address), 10 * ONE);
    assert_eq!(token.balance(&user), 0);

    // 5 ETH left keep the position exactly at the minimum
    sut.engine.redeem_collateral(&user, &token.address, &(5 * ONE));
    assert_eq!(token.balance(&user), 5 * ONE);
}

#[test]
fn should_fail_when_invalid_amount() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let user = fill_position(&env, &sut, sut.weth(), 10 * ONE, 0);

    assert_eq!(
        sut.engine
            .try_redeem_collateral(&user, &sut.weth().token.address, &0)
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
    let user = fill_position(&env, &sut, sut.weth(), 10 * ONE, 0);

    assert_eq!(
        sut.engine
            .try_redeem_collateral(&user, &Address::generate(&env), &ONE)
            .unwrap_err()
            .unwrap(),
        Error::AssetNotSupported
    );
}

#[test]
fn should_fail_when_transfer_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let token = &sut.weth().token;
    let user = fill_position(&env, &sut, sut.weth(), 10 * ONE, 0);

    token.set_behavior(&Behavior::Fail);

    assert_eq!(
        sut.engine
            .try_redeem_collateral(&user, &token.address, &ONE)
            .unwrap_err()
            .unwrap(),
        Error::TransferFailed
    );
    assert_eq!(sut.engine.collateral_balance(&user, &token.address), 10 * ONE);
}

#[test]
fn should_emit_events() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let asset = sut.weth().token.address.clone();
    let user = fill_position(&env, &sut, sut.weth(), 10 * ONE, 0);

    sut.engine.redeem_collateral(&user, &asset, &ONE);

    let event = env.events().all().pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.engine.address.clone(),
                (
                    Symbol::new(&env, "collateral_redeemed"),
                    user.clone(),
                    user.clone()
                )
                    .into_val(&env),
                (asset, ONE).into_val(&env)
            ),
        ]
    );
}
