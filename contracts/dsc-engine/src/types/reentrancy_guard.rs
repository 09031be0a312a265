use dsc_engine_interface::types::error::Error;
use soroban_sdk::Env;

use crate::storage::{is_entered, write_entered};

/// Marks the engine as busy until dropped.
///
/// Every ledger-mutating entry point holds one for its whole body. A nested
/// entry fails with [`Error::ReentrantCall`] and the flag is cleared on every
/// exit path, error paths included.
pub struct ReentrancyGuard {
    env: Env,
}

impl ReentrancyGuard {
    pub fn enter(env: &Env) -> Result<Self, Error> {
        if is_entered(env) {
            return Err(Error::ReentrantCall);
        }

        write_entered(env, true);

        Ok(Self { env: env.clone() })
    }
}

impl Drop for ReentrancyGuard {
    fn drop(&mut self) {
        write_entered(&self.env, false);
    }
}
