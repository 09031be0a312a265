pub mod account_data;
pub mod burn_dsc;
pub mod deposit_collateral;
pub mod deposit_collateral_and_mint_dsc;
pub mod initialize;
pub mod liquidate;
pub mod mint_dsc;
pub mod redeem_collateral;
pub mod redeem_collateral_for_dsc;

pub(crate) mod utils;
