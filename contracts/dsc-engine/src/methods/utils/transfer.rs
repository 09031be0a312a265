use dsc_engine_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

/// SEP-41 transfer. Any failure of the token call surfaces as `TransferFailed`
pub fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    match token::Client::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}
