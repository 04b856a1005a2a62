use soroban_sdk::{Address, Env};

use crate::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, NO_WINNER, RECORD_BUMP_AMOUNT,
    RECORD_LIFETIME_THRESHOLD,
};
use crate::errors::VotingError;
use crate::types::{DataKey, Proposal, Voter, WorkflowStatus};

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_record_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("admin is set by the constructor")
}

// ── Workflow status ──────────────────────────────────────────────────────────

pub fn get_status(env: &Env) -> WorkflowStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
}

// ── Tally ────────────────────────────────────────────────────────────────────

pub fn get_winning_proposal_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::WinningProposal)
        .unwrap_or(NO_WINNER)
}

pub fn set_winning_proposal_id(env: &Env, proposal_id: u32) {
    env.storage()
        .instance()
        .set(&DataKey::WinningProposal, &proposal_id);
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn get_voter(env: &Env, address: &Address) -> Option<Voter> {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(address.clone()))
}

pub fn set_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    extend_record_ttl(env, &key);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn set_proposal_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &count);
}

pub fn get_proposal(env: &Env, proposal_id: u32) -> Result<Proposal, VotingError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
        .ok_or(VotingError::ProposalNotFound)
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    extend_record_ttl(env, &key);
}
