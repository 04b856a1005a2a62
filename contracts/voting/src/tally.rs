use soroban_sdk::Env;

use crate::constants::NO_WINNER;
use crate::errors::VotingError;
use crate::storage;

/// Running plurality leader. The leader only changes on a strictly greater
/// count, so the first proposal to reach the maximum wins a tie.
struct Leader {
    proposal_id: u32,
    vote_count: u32,
}

impl Leader {
    fn new() -> Self {
        Leader {
            proposal_id: NO_WINNER,
            vote_count: 0,
        }
    }

    fn observe(&mut self, proposal_id: u32, vote_count: u32) {
        if vote_count > self.vote_count {
            self.proposal_id = proposal_id;
            self.vote_count = vote_count;
        }
    }
}

/// Compute the winner across every stored proposal.
pub fn winning_proposal(env: &Env) -> Result<u32, VotingError> {
    let mut leader = Leader::new();
    for proposal_id in 1..=storage::get_proposal_count(env) {
        let proposal = storage::get_proposal(env, proposal_id)?;
        leader.observe(proposal.id, proposal.vote_count);
    }
    Ok(leader.proposal_id)
}
