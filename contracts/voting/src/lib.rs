#![no_std]
//! # Voting Session Contract
//!
//! An administrator drives a session through a fixed sequence of phases:
//! voter registration, proposal registration, voting, and tallying.
//! Registered voters submit proposals and cast one vote each; the tally picks
//! the proposal with the most votes, the earliest proposal winning a tie.
//!
//! Every entry point takes the calling identity as `caller` and requires its
//! authorization. All guards run before the first storage write.

mod access;
mod constants;
mod errors;
mod events;
mod storage;
mod tally;
mod types;
mod validation;
mod workflow;

pub use constants::{MAX_DESCRIPTION_LEN, NO_WINNER};
pub use errors::VotingError;
pub use types::{Proposal, Voter, WorkflowStatus};

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Deployment ───────────────────────────────────────────────────────────

    /// Fix the session administrator at deployment. There is no transfer.
    pub fn __constructor(env: Env, admin: Address) {
        storage::set_admin(&env, &admin);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);
        storage::set_proposal_count(&env, 0);
        storage::set_winning_proposal_id(&env, NO_WINNER);
        storage::extend_instance_ttl(&env);

        log!(&env, "session created", admin);
    }

    // ── Administrator ────────────────────────────────────────────────────────

    pub fn register_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::require_phase(&env, WorkflowStatus::RegisteringVoters)?;

        if storage::get_voter(&env, &voter).is_some() {
            return Err(VotingError::AlreadyRegistered);
        }

        storage::set_voter(
            &env,
            &voter,
            &Voter {
                is_registered: true,
                has_voted: false,
                voted_proposal_id: 0,
            },
        );
        storage::extend_instance_ttl(&env);

        log!(&env, "voter registered", voter.clone());
        events::voter_registered(&env, &voter);
        Ok(())
    }

    pub fn start_proposals_registration(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::advance(&env, WorkflowStatus::RegisteringVoters)
    }

    pub fn end_proposals_registration(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::advance(&env, WorkflowStatus::ProposalsRegistrationStarted)
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::advance(&env, WorkflowStatus::ProposalsRegistrationEnded)
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::advance(&env, WorkflowStatus::VotingSessionStarted)
    }

    /// Record the plurality winner and close the session. Returns the winning
    /// proposal id, or `NO_WINNER` if no vote was cast.
    pub fn tally_votes(env: Env, caller: Address) -> Result<u32, VotingError> {
        access::require_admin(&env, &caller)?;
        let transition = workflow::plan_transition(&env, WorkflowStatus::VotingSessionEnded)?;
        let winner = tally::winning_proposal(&env)?;

        storage::set_winning_proposal_id(&env, winner);
        log!(&env, "votes tallied", winner);
        workflow::commit_transition(&env, transition);

        Ok(winner)
    }

    // ── Registered voters ────────────────────────────────────────────────────

    /// Look up any address. Unregistered addresses return the default record.
    pub fn get_voter(env: Env, caller: Address, voter: Address) -> Result<Voter, VotingError> {
        access::require_voter(&env, &caller)?;
        Ok(storage::get_voter(&env, &voter).unwrap_or_default())
    }

    pub fn get_proposal(
        env: Env,
        caller: Address,
        proposal_id: u32,
    ) -> Result<Proposal, VotingError> {
        access::require_voter(&env, &caller)?;
        storage::get_proposal(&env, proposal_id)
    }

    /// Register a proposal and return its id.
    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, VotingError> {
        access::require_voter(&env, &caller)?;
        workflow::require_phase(&env, WorkflowStatus::ProposalsRegistrationStarted)?;
        validation::validate_description(&description)?;

        let proposal_id = storage::get_proposal_count(&env) + 1;
        storage::set_proposal(
            &env,
            &Proposal {
                id: proposal_id,
                description,
                vote_count: 0,
            },
        );
        storage::set_proposal_count(&env, proposal_id);
        storage::extend_instance_ttl(&env);

        log!(&env, "proposal registered", proposal_id, caller.clone());
        events::proposal_registered(&env, proposal_id);
        Ok(proposal_id)
    }

    pub fn cast_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        let mut voter = access::require_voter(&env, &caller)?;
        workflow::require_phase(&env, WorkflowStatus::VotingSessionStarted)?;
        let mut proposal = storage::get_proposal(&env, proposal_id)?;

        if voter.has_voted {
            return Err(VotingError::AlreadyVoted);
        }

        proposal.vote_count += 1;
        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;

        storage::set_proposal(&env, &proposal);
        storage::set_voter(&env, &caller, &voter);
        storage::extend_instance_ttl(&env);

        log!(&env, "vote cast", caller.clone(), proposal_id);
        events::voted(&env, &caller, proposal_id);
        Ok(())
    }

    // ── Public state ─────────────────────────────────────────────────────────

    pub fn admin(env: Env) -> Address {
        storage::get_admin(&env)
    }

    pub fn workflow_status(env: Env) -> WorkflowStatus {
        storage::get_status(&env)
    }

    pub fn winning_proposal_id(env: Env) -> u32 {
        storage::get_winning_proposal_id(&env)
    }

    pub fn proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }
}
