use crate::{DispatchError, Receipt, RejectionReason, SubmissionAttempt};

/// Terminal outcome of a dispatch invocation.
///
/// Every variant carries the full attempt history so callers can
/// correlate outcomes with the ordering counters that were consumed.
#[derive(Debug)]
pub enum DispatchResult {
    /// An attempt was accepted and confirmed by the primary endpoint.
    Success {
        /// Confirmation record for the accepted attempt.
        receipt: Receipt,
        /// Every attempt made, in order.
        attempts: Vec<SubmissionAttempt>,
    },
    /// Every permitted attempt was rejected with a retryable reason.
    Exhausted {
        /// The rejection that ended the final attempt.
        last: RejectionReason,
        /// Every attempt made, in order.
        attempts: Vec<SubmissionAttempt>,
    },
    /// A non-recoverable failure; no further attempts were made.
    Fatal {
        /// The classified reason.
        error: DispatchError,
        /// Every attempt made before the failure, in order.
        attempts: Vec<SubmissionAttempt>,
    },
    /// The caller's cancellation signal fired, or the deadline elapsed,
    /// mid-retry.
    Cancelled {
        /// Every attempt made before cancellation, in order.
        attempts: Vec<SubmissionAttempt>,
    },
}

impl DispatchResult {
    /// True only for a confirmed success.
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchResult::Success { .. })
    }

    /// The attempt history, regardless of outcome.
    pub fn attempts(&self) -> &[SubmissionAttempt] {
        match self {
            DispatchResult::Success { attempts, .. }
            | DispatchResult::Exhausted { attempts, .. }
            | DispatchResult::Fatal { attempts, .. }
            | DispatchResult::Cancelled { attempts } => attempts,
        }
    }

    /// The receipt, when the dispatch succeeded.
    pub fn receipt(&self) -> Option<&Receipt> {
        match self {
            DispatchResult::Success { receipt, .. } => Some(receipt),
            _ => None,
        }
    }
}
