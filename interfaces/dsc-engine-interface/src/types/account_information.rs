use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AccountInformation {
    /// DSC minted on behalf of the account
    pub total_dsc_minted: i128,
    /// Collateral value in USD with 18 decimals
    pub collateral_value_in_usd: i128,
}
