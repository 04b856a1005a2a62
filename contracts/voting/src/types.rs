use soroban_sdk::{contracttype, Address, String};

/// Phases of a voting session, in the only order they can occur.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

/// Per-address voter record. Unregistered addresses read as the default.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Zero until the voter has voted
    pub voted_proposal_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// 1-based insertion order
    pub id: u32,
    pub description: String,
    pub vote_count: u32,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance storage
    Admin,
    Status,
    ProposalCount,
    WinningProposal,
    // Persistent storage
    Voter(Address),
    Proposal(u32),
}
