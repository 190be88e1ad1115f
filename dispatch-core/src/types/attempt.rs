use chrono::{DateTime, Utc};

use crate::RejectionReason;

/// Outcome of a single submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AttemptOutcome {
    /// The submit call never completed; nothing is known about its
    /// effect on the endpoint.
    Pending,
    /// Accepted by the primary endpoint.
    Accepted,
    /// Rejected with a structured reason.
    Rejected(RejectionReason),
}

/// One submission attempt for a request.
///
/// Attempts are strictly sequential within a dispatch invocation and
/// never reused; indexes are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmissionAttempt {
    /// Position in the attempt sequence, starting at 1.
    pub index: u32,
    /// Ordering counter consumed by this attempt.
    pub nonce: u64,
    /// Wall-clock time the attempt started.
    pub started_at: DateTime<Utc>,
    /// What became of the attempt.
    pub outcome: AttemptOutcome,
}
