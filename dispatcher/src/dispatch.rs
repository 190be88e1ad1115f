use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::time::{sleep, timeout, Instant};
use tracing::{info, instrument, warn};

use dispatch_core::{
    AttemptOutcome, DispatchResult, LedgerClient, NetworkError, RequestSigner, RetryPolicy,
    SubmissionAttempt, SubmissionRequest, SubmitError,
};

use crate::classify::{classify, ErrorDisposition};
use crate::nonce::NonceAllocator;

// An accepted submission ordinarily lands within a few blocks; waiting
// longer than this means the endpoint dropped it.
const RECEIPT_TIMEOUT: Duration = Duration::from_secs(300);

/// The retry state machine for submitting one logical request.
///
/// One instance serves many requests, but each [`Dispatcher::dispatch`]
/// invocation owns its own attempt counter and history; there is no
/// process-wide mutable state. Attempts within an invocation are
/// strictly sequential, and exactly one ordering counter is consumed
/// per attempt.
///
/// Submission is at-least-once: a rejection classified as retryable
/// does not prove the prior attempt had no effect on the endpoint (it
/// may have been superseded rather than truly dropped), so callers get
/// ordered, bounded-retry submission semantics, not exactly-once
/// delivery.
#[derive(Debug, Clone)]
pub struct Dispatcher<C, S> {
    client: Arc<C>,
    signer: Arc<S>,
    allocator: NonceAllocator<C>,
    cancel: Option<watch::Receiver<bool>>,
}

impl<C, S> Dispatcher<C, S>
where
    C: LedgerClient,
    S: RequestSigner,
{
    /// Build a dispatcher over a primary endpoint and a signer.
    pub fn new(client: Arc<C>, signer: Arc<S>) -> Self {
        let allocator = NonceAllocator::new(client.clone());
        Self {
            client,
            signer,
            allocator,
            cancel: None,
        }
    }

    /// Observe a cancellation signal. When the sender flips it to
    /// `true` mid-retry, the in-flight dispatch resolves to
    /// [`DispatchResult::Cancelled`] instead of running out its bound.
    pub fn with_cancellation(mut self, cancel: watch::Receiver<bool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// The account every request is signed and submitted as.
    pub fn account(&self) -> dispatch_core::Address {
        self.signer.address()
    }

    /// Submit `request` under `policy`.
    ///
    /// Each attempt re-acquires the endpoint's pending ordering counter
    /// (an explicit override on the request is honored for the first
    /// attempt only, since a retry means the counter was stale),
    /// submits, and on rejection either retries after the fixed delay
    /// or aborts, per classification. The delay is never applied before
    /// the first attempt.
    #[instrument(skip_all, fields(request = %request.id, to = %request.to, metadata = %request.metadata))]
    pub async fn dispatch(
        &self,
        request: &SubmissionRequest,
        policy: &RetryPolicy,
    ) -> DispatchResult {
        assert!(policy.max_attempts >= 1);

        let deadline = policy.deadline.map(|budget| Instant::now() + budget);
        let mut attempts: Vec<SubmissionAttempt> = Vec::new();

        loop {
            if self.cancelled() || deadline.map_or(false, |d| Instant::now() >= d) {
                return DispatchResult::Cancelled { attempts };
            }

            let index = attempts.len() as u32 + 1;

            let nonce = match request.nonce.filter(|_| index == 1) {
                Some(nonce) => nonce,
                None => {
                    let allocated = timeout(
                        policy.call_timeout,
                        self.allocator.allocate(self.signer.address()),
                    )
                    .await
                    .unwrap_or(Err(NetworkError::Timeout(policy.call_timeout)));
                    match allocated {
                        Ok(nonce) => nonce,
                        Err(err) => {
                            warn!(%err, "Could not acquire an ordering counter");
                            return DispatchResult::Fatal {
                                error: err.into(),
                                attempts,
                            };
                        }
                    }
                }
            };

            let signed = match self.signer.sign(request, nonce).await {
                Ok(signed) => signed,
                Err(err) => {
                    return DispatchResult::Fatal {
                        error: err.into(),
                        attempts,
                    }
                }
            };

            let mut attempt = SubmissionAttempt {
                index,
                nonce,
                started_at: Utc::now(),
                outcome: AttemptOutcome::Pending,
            };
            info!(attempt = index, nonce, fingerprint = %signed.fingerprint, "Submitting request");

            let submitted = timeout(policy.call_timeout, self.client.submit(&signed))
                .await
                .unwrap_or(Err(SubmitError::Network(NetworkError::Timeout(
                    policy.call_timeout,
                ))));

            match submitted {
                Ok(handle) => {
                    attempt.outcome = AttemptOutcome::Accepted;
                    attempts.push(attempt);
                    info!(attempt = index, %handle, "Request accepted; awaiting confirmation");
                    return match timeout(RECEIPT_TIMEOUT, self.client.fetch_receipt(handle))
                        .await
                        .unwrap_or(Err(NetworkError::Timeout(RECEIPT_TIMEOUT)))
                    {
                        Ok(receipt) => {
                            info!(block = receipt.block_number, "Request confirmed");
                            DispatchResult::Success { receipt, attempts }
                        }
                        Err(err) => {
                            warn!(%err, %handle, "Accepted request never confirmed");
                            DispatchResult::Fatal {
                                error: err.into(),
                                attempts,
                            }
                        }
                    };
                }
                Err(SubmitError::Network(err)) => {
                    // The call never completed, so the attempt's effect
                    // on the endpoint is unknown; it stays Pending.
                    attempts.push(attempt);
                    warn!(attempt = index, %err, "Submission call failed before completing");
                    return DispatchResult::Fatal {
                        error: err.into(),
                        attempts,
                    };
                }
                Err(SubmitError::Rejected(reason)) => {
                    attempt.outcome = AttemptOutcome::Rejected(reason.clone());
                    attempts.push(attempt);

                    match classify(&reason) {
                        ErrorDisposition::Fatal => {
                            warn!(attempt = index, %reason, "Rejected with a fatal reason; aborting");
                            return DispatchResult::Fatal {
                                error: reason.into(),
                                attempts,
                            };
                        }
                        ErrorDisposition::Retryable
                            if attempts.len() as u32 >= policy.max_attempts =>
                        {
                            warn!(
                                attempts = attempts.len(),
                                %reason,
                                "Ordering conflicts exhausted the attempt bound"
                            );
                            return DispatchResult::Exhausted {
                                last: reason,
                                attempts,
                            };
                        }
                        ErrorDisposition::Retryable => {
                            info!(
                                attempt = index,
                                %reason,
                                delay_ms = policy.retry_delay.as_millis() as u64,
                                "Ordering conflict; retrying with a fresh counter"
                            );
                            if !self.wait_before_retry(policy.retry_delay, deadline).await {
                                return DispatchResult::Cancelled { attempts };
                            }
                        }
                    }
                }
            }
        }
    }

    fn cancelled(&self) -> bool {
        self.cancel.as_ref().map_or(false, |rx| *rx.borrow())
    }

    /// Resolves once the cancellation signal fires; pends forever when
    /// no signal can arrive anymore.
    async fn cancel_signalled(&self) {
        match &self.cancel {
            Some(rx) => {
                let mut rx = rx.clone();
                if rx.wait_for(|cancelled| *cancelled).await.is_err() {
                    std::future::pending::<()>().await;
                }
            }
            None => std::future::pending::<()>().await,
        }
    }

    /// Sleep the fixed inter-attempt delay. Returns `false` when the
    /// dispatch should resolve to `Cancelled` instead of retrying.
    async fn wait_before_retry(&self, delay: Duration, deadline: Option<Instant>) -> bool {
        if let Some(deadline) = deadline {
            if Instant::now() + delay >= deadline {
                return false;
            }
        }
        tokio::select! {
            _ = sleep(delay) => true,
            _ = self.cancel_signalled() => false,
        }
    }
}
