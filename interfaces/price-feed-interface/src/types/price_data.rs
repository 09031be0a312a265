use soroban_sdk::contracttype;

/// Latest answer of a feed. `price` is a fixed point value with `decimals()` digits
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub timestamp: u64,
    pub round_id: u64,
}
