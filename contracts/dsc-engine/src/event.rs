use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

pub(crate) fn initialized(
    e: &Env,
    collateral_assets: &Vec<Address>,
    price_feeds: &Vec<Address>,
    dsc: &Address,
) {
    let topics = (Symbol::new(e, "initialize"),);
    e.events().publish(
        topics,
        (collateral_assets.clone(), price_feeds.clone(), dsc.clone()),
    );
}

pub(crate) fn collateral_deposited(e: &Env, who: &Address, asset: &Address, amount: i128) {
    let topics = (Symbol::new(e, "collateral_deposited"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn collateral_redeemed(
    e: &Env,
    from: &Address,
    to: &Address,
    asset: &Address,
    amount: i128,
) {
    let topics = (Symbol::new(e, "collateral_redeemed"), from.clone(), to.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn dsc_minted(e: &Env, who: &Address, amount: i128) {
    let topics = (Symbol::new(e, "dsc_minted"), who.clone());
    e.events().publish(topics, amount);
}

pub(crate) fn dsc_burned(e: &Env, on_behalf_of: &Address, payer: &Address, amount: i128) {
    let topics = (Symbol::new(e, "dsc_burned"), on_behalf_of.clone(), payer.clone());
    e.events().publish(topics, amount);
}

pub(crate) fn liquidation(
    e: &Env,
    liquidator: &Address,
    who: &Address,
    asset: &Address,
    debt_covered: i128,
    collateral_seized: i128,
) {
    let topics = (symbol_short!("liquidate"), liquidator.clone(), who.clone());
    e.events()
        .publish(topics, (asset.clone(), debt_covered, collateral_seized));
}
