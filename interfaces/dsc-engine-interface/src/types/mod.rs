pub mod account_information;
pub mod error;
