//! Compile-time limits for the voting session contract.

// ── Ledger TTL ───────────────────────────────────────────────────────────────
// At ~5s per ledger one day is 17,280 ledgers.
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance entries (admin, status, counters) are bumped to 30 days.
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Voter and proposal records are bumped to 60 days.
pub const RECORD_BUMP_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;
pub const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ── Proposals ────────────────────────────────────────────────────────────────

/// Maximum proposal description length in bytes
pub const MAX_DESCRIPTION_LEN: usize = 2048;

/// Id reported before a tally, or when no proposal received a vote
pub const NO_WINNER: u32 = 0;
