use soroban_sdk::{log, Env};

use crate::errors::VotingError;
use crate::events;
use crate::storage;
use crate::types::WorkflowStatus;

impl WorkflowStatus {
    /// The single status reachable from `self`, if any.
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => {
                Some(WorkflowStatus::VotingSessionStarted)
            }
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }
}

/// Fail with `WrongPhase` unless the session is currently in `expected`.
pub fn require_phase(env: &Env, expected: WorkflowStatus) -> Result<(), VotingError> {
    let current = storage::get_status(env);
    if current != expected {
        log!(
            env,
            "wrong phase: current, expected",
            current as u32,
            expected as u32
        );
        return Err(VotingError::WrongPhase);
    }
    Ok(())
}

/// Check that the session is in `from` and compute its successor.
///
/// Nothing is written; pair with [`commit_transition`] once every other
/// precondition of the calling operation has passed.
pub fn plan_transition(
    env: &Env,
    from: WorkflowStatus,
) -> Result<(WorkflowStatus, WorkflowStatus), VotingError> {
    require_phase(env, from)?;
    let to = from.next().ok_or(VotingError::WrongPhase)?;
    Ok((from, to))
}

pub fn commit_transition(env: &Env, (from, to): (WorkflowStatus, WorkflowStatus)) {
    storage::set_status(env, to);
    storage::extend_instance_ttl(env);

    log!(env, "workflow status changed", from as u32, to as u32);
    events::workflow_status_changed(env, from, to);
}

/// Move the session one step forward from `from`.
pub fn advance(env: &Env, from: WorkflowStatus) -> Result<(), VotingError> {
    let transition = plan_transition(env, from)?;
    commit_transition(env, transition);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: [WorkflowStatus; 6] = [
        WorkflowStatus::RegisteringVoters,
        WorkflowStatus::ProposalsRegistrationStarted,
        WorkflowStatus::ProposalsRegistrationEnded,
        WorkflowStatus::VotingSessionStarted,
        WorkflowStatus::VotingSessionEnded,
        WorkflowStatus::VotesTallied,
    ];

    #[test]
    fn next_steps_forward_by_one() {
        for pair in ORDER.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn tallied_is_terminal() {
        assert_eq!(WorkflowStatus::VotesTallied.next(), None);
    }

    #[test]
    fn discriminants_follow_phase_order() {
        for (index, status) in ORDER.iter().enumerate() {
            assert_eq!(*status as u32, index as u32);
        }
    }
}
