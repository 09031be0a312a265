pub mod price_provider;
pub mod reentrancy_guard;
