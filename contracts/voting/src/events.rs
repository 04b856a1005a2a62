//! Notifications published by the voting session.
//!
//! Events are emitted inside the invocation that caused them, so their ledger
//! order is the order in which operations were applied.

use soroban_sdk::{symbol_short, Address, Env};

use crate::types::WorkflowStatus;

pub fn voter_registered(env: &Env, voter: &Address) {
    env.events()
        .publish((symbol_short!("voter_reg"),), voter.clone());
}

pub fn workflow_status_changed(env: &Env, previous: WorkflowStatus, new: WorkflowStatus) {
    env.events()
        .publish((symbol_short!("status"),), (previous, new));
}

pub fn proposal_registered(env: &Env, proposal_id: u32) {
    env.events()
        .publish((symbol_short!("proposal"),), proposal_id);
}

pub fn voted(env: &Env, voter: &Address, proposal_id: u32) {
    env.events()
        .publish((symbol_short!("voted"),), (voter.clone(), proposal_id));
}
