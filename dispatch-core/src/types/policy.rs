use std::time::Duration;

/// Bounded-retry policy for a dispatch invocation.
///
/// The inter-attempt delay is fixed, not exponential: ordering
/// conflicts clear as soon as the endpoint's pending view advances, so
/// backing off further buys nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of submission attempts. Must be at least 1.
    pub max_attempts: u32,
    /// Fixed delay between a retryable rejection and the next attempt.
    /// Never applied before the first attempt.
    pub retry_delay: Duration,
    /// Timeout applied to each individual remote call.
    pub call_timeout: Duration,
    /// Overall budget for the invocation. When the budget would be
    /// crossed mid-retry the dispatch resolves to `Cancelled`.
    pub deadline: Option<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            retry_delay: Duration::from_millis(1_000),
            call_timeout: Duration::from_secs(30),
            deadline: None,
        }
    }
}

impl RetryPolicy {
    /// Single-attempt policy: submit once, never retry.
    pub fn once() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Cap the whole invocation's wall-clock budget.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Policy for polling a secondary endpoint until a submission becomes
/// visible there.
///
/// The poll bound is mandatory and finite; running the poller without a
/// bound is not expressible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationPolicy {
    /// Delay between consecutive polls.
    pub poll_interval: Duration,
    /// Maximum number of polls. Must be at least 1.
    pub max_polls: u32,
    /// Timeout applied to each individual poll.
    pub poll_timeout: Duration,
    /// Optional wall-clock budget counted from primary acceptance;
    /// whichever of bound and budget is reached first ends the wait.
    pub deadline: Option<Duration>,
}

impl Default for ConfirmationPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(50),
            // 30 seconds at the default interval
            max_polls: 600,
            poll_timeout: Duration::from_secs(10),
            deadline: None,
        }
    }
}

impl ConfirmationPolicy {
    /// Cap the wait's wall-clock budget in addition to the poll bound.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}
