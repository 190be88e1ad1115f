use std::sync::Arc;
use std::time::Duration;

use derive_new::new;
use tokio::time::{sleep, timeout, Instant};
use tracing::{debug, info, instrument, warn};

use dispatch_core::{ConfirmationPolicy, LedgerClient, NetworkError, Receipt, H256};

/// Result of waiting for a submission to become visible on a secondary
/// endpoint. Running out the bound is an expected, reportable outcome,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// The fingerprint became visible on the secondary endpoint.
    Visible {
        /// The secondary endpoint's receipt.
        receipt: Receipt,
        /// Wall-clock time from primary acceptance to visibility.
        latency: Duration,
        /// Number of polls issued, the finding poll included.
        polls: u32,
    },
    /// The poll bound or deadline was reached first.
    TimedOut {
        /// Number of polls issued.
        polls: u32,
        /// Wall-clock time spent waiting.
        elapsed: Duration,
    },
}

/// Polls a secondary, independently-replicated endpoint until a
/// submission accepted on the primary becomes visible there, measuring
/// propagation latency.
#[derive(Debug, Clone, new)]
pub struct ConfirmationPoller<C> {
    secondary: Arc<C>,
}

impl<C: LedgerClient> ConfirmationPoller<C> {
    /// Cheap reachability check against the secondary endpoint; returns
    /// its latest block height.
    pub async fn probe(&self, probe_timeout: Duration) -> Result<u64, NetworkError> {
        timeout(probe_timeout, self.secondary.latest_block())
            .await
            .unwrap_or(Err(NetworkError::Timeout(probe_timeout)))
    }

    /// Wait for `fingerprint` to become visible on the secondary
    /// endpoint, polling at the policy interval. `accepted_at` is the
    /// moment primary acceptance was observed; latency is measured from
    /// it. The wait always ends: the poll bound is finite, and an
    /// optional deadline can end it sooner.
    ///
    /// Individual poll failures are transient by assumption (the
    /// secondary endpoint may simply not have replicated yet), so they
    /// are logged and the loop continues, consuming a poll from the
    /// bound.
    #[instrument(skip(self, policy), fields(%fingerprint))]
    pub async fn await_visibility(
        &self,
        fingerprint: H256,
        accepted_at: Instant,
        policy: &ConfirmationPolicy,
    ) -> Confirmation {
        assert!(policy.max_polls >= 1);
        let deadline = policy.deadline.map(|budget| accepted_at + budget);

        let mut polls = 0u32;
        while polls < policy.max_polls {
            sleep(policy.poll_interval).await;
            if deadline.map_or(false, |d| Instant::now() >= d) {
                break;
            }
            polls += 1;

            let found = match timeout(
                policy.poll_timeout,
                self.secondary.find_by_fingerprint(fingerprint),
            )
            .await
            {
                Ok(Ok(found)) => found,
                Ok(Err(err)) => {
                    debug!(poll = polls, %err, "Poll failed; will poll again");
                    None
                }
                Err(_) => {
                    debug!(poll = polls, "Poll timed out; will poll again");
                    None
                }
            };

            if let Some(receipt) = found {
                let latency = accepted_at.elapsed();
                info!(
                    polls,
                    latency_ms = latency.as_millis() as u64,
                    block = receipt.block_number,
                    "Submission visible on secondary endpoint"
                );
                return Confirmation::Visible {
                    receipt,
                    latency,
                    polls,
                };
            }
        }

        let elapsed = accepted_at.elapsed();
        warn!(
            polls,
            elapsed_ms = elapsed.as_millis() as u64,
            "Submission did not become visible within the poll bound"
        );
        Confirmation::TimedOut { polls, elapsed }
    }
}
