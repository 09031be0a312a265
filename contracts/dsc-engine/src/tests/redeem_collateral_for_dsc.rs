use soroban_sdk::testutils::Address as _;

use crate::tests::sut::{fill_position, init_engine, ONE};
use crate::*;

#[test]
fn should_burn_and_redeem() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let token = &sut.weth().token;
    let user = fill_position(&env, &sut, sut.weth(), 10 * ONE, 10_000 * ONE);

    sut.engine
        .redeem_collateral_for_dsc(&user, &token.address, &(4 * ONE), &(4_000 * ONE));

    assert_eq!(sut.engine.collateral_balance(&user, &token.address), 6 * ONE);
    assert_eq!(sut.engine.dsc_minted(&user), 6_000 * ONE);
    assert_eq!(sut.dsc.balance(&user), 6_000 * ONE);
    assert_eq!(sut.dsc.total_supply(), 6_000 * ONE);
    assert_eq!(token.balance(&user), 4 * ONE);
}

#[test]
fn should_close_position() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let token = &sut.weth().token;
    let user = fill_position(&env, &sut, sut.weth(), 10 * ONE, 10_000 * ONE);

    sut.engine
        .redeem_collateral_for_dsc(&user, &token.address, &(10 * ONE), &(10_000 * ONE));

    let account_information = sut.engine.account_information(&user);
    assert_eq!(account_information.total_dsc_minted, 0);
    assert_eq!(account_information.collateral_value_in_usd, 0);
    assert_eq!(token.balance(&user), 10 * ONE);
}

#[test]
fn should_not_keep_burn_when_redeem_breaks_health_factor() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let token = &sut.weth().token;
    let user = fill_position(&env, &sut, sut.weth(), 10 * ONE, 10_000 * ONE);

    // 1,000 DSC repaid frees only 1 ETH
    assert_eq!(
        sut.engine
            .try_redeem_collateral_for_dsc(&user, &token.address, &(2 * ONE), &(1_000 * ONE))
            .unwrap_err()
            .unwrap(),
        Error::HealthFactorBroken
    );
    assert_eq!(sut.engine.dsc_minted(&user), 10_000 * ONE);
    assert_eq!(sut.dsc.balance(&user), 10_000 * ONE);
    assert_eq!(sut.dsc.total_supply(), 10_000 * ONE);
    assert_eq!(sut.engine.collateral_balance(&user, &token.address), 10 * ONE);
}

#[test]
fn should_not_keep_burn_when_redeem_exceeds_balance() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let token = &sut.weth().token;
    let user = fill_position(&env, &sut, sut.weth(), 10 * ONE, 5_000 * ONE);

    assert_eq!(
        sut.engine
            .try_redeem_collateral_for_dsc(&user, &token.address, &(11 * ONE), &(5_000 * ONE))
            .unwrap_err()
            .unwrap(),
        Error::InsufficientCollateral
    );
    assert_eq!(sut.engine.dsc_minted(&user), 5_000 * ONE);
    assert_eq!(sut.dsc.balance(&user), 5_000 * ONE);
}

#[test]
fn should_fail_when_asset_not_supported() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let user = fill_position(&env, &sut, sut.weth(), 10 * ONE, 5_000 * ONE);

    assert_eq!(
        sut.engine
            .try_redeem_collateral_for_dsc(&user, &Address::generate(&env), &ONE, &ONE)
            .unwrap_err()
            .unwrap(),
        Error::AssetNotSupported
    );
    assert_eq!(sut.engine.dsc_minted(&user), 5_000 * ONE);
}
