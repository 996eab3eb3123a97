//! System-wide constants for QuorumVault.

/// Length of the daily-limit window in seconds.
///
/// The window is a UTC day-index truncation, not a sliding 24h window:
/// `day_index = unix_seconds.div_euclid(SECONDS_PER_DAY)`.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Domain-separation tag for operation id derivation.
pub const OPERATION_ID_TAG: &[u8] = b"quorumvault:operation:v1:";

/// Initial capacity hint for the pending-operation map.
pub const PENDING_OPERATIONS_CAPACITY: usize = 16;
