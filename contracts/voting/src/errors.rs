//! Error codes returned by the voting session contract.
//!
//! Codes are part of the contract ABI and must stay stable:
//! - 1-2: access control
//! - 3: workflow phase
//! - 4-8: data integrity

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    /// Caller is not the session administrator
    Unauthorized = 1,

    /// Caller is not a registered voter
    NotAVoter = 2,

    /// The current workflow status does not allow this operation
    WrongPhase = 3,

    /// The address already has a voter record
    AlreadyRegistered = 4,

    /// The voter has already cast a vote
    AlreadyVoted = 5,

    /// Proposal description is empty or whitespace only
    EmptyProposal = 6,

    /// Proposal description exceeds `MAX_DESCRIPTION_LEN` bytes
    DescriptionTooLong = 7,

    /// No stored proposal has the given id
    ProposalNotFound = 8,
}
