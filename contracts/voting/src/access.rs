//! Role guards run at the top of every entry point, before any storage write.

use soroban_sdk::{log, Address, Env};

use crate::errors::VotingError;
use crate::storage;
use crate::types::Voter;

/// Require that `caller` signed the invocation and is the session administrator.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
    caller.require_auth();
    let admin = storage::get_admin(env);

    if *caller != admin {
        log!(env, "rejected non-admin caller", caller.clone());
        return Err(VotingError::Unauthorized);
    }

    Ok(())
}

/// Require that `caller` signed the invocation and is a registered voter.
/// Returns the caller's current voter record.
pub fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
    caller.require_auth();

    match storage::get_voter(env, caller) {
        Some(voter) if voter.is_registered => Ok(voter),
        _ => {
            log!(env, "rejected unregistered caller", caller.clone());
            Err(VotingError::NotAVoter)
        }
    }
}
