mod deposit_collateral;
mod redeem_collateral;
mod redeem_collateral_for_dsc;
