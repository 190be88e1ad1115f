use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use dispatch_core::{
    Address, DispatchResult, LedgerClient, RequestSigner, RetryPolicy, SubmissionRequest, U256,
};

use crate::dispatch::Dispatcher;

/// Outcome for one recipient in a batch disbursement.
#[derive(Debug)]
pub struct RecipientResult {
    /// Position in the input list; results are returned in input order,
    /// so this is also the result's position in the output.
    pub index: usize,
    /// The recipient account.
    pub recipient: Address,
    /// The amount requested for this recipient.
    pub amount: U256,
    /// Terminal dispatch outcome for this recipient.
    pub result: DispatchResult,
    /// Recipient balance observed after a successful transfer.
    /// Advisory: a failed read leaves this empty without failing the
    /// recipient.
    pub balance_after: Option<U256>,
}

/// Success/failure counts over a finished batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisbursementSummary {
    /// Recipients whose dispatch succeeded.
    pub succeeded: usize,
    /// Recipients whose dispatch ended in any non-success outcome.
    pub failed: usize,
}

/// Disburses funds from one account to a list of recipients: one
/// dispatch per recipient, strictly in input order, one result per
/// input. An individual failure is recorded and the batch moves on;
/// it never aborts the run.
pub struct BatchDisburser<C, S> {
    client: Arc<C>,
    dispatcher: Dispatcher<C, S>,
}

impl<C, S> BatchDisburser<C, S>
where
    C: LedgerClient,
    S: RequestSigner,
{
    /// Build a disburser whose transfers are signed by `signer`; the
    /// signing account is the funding account.
    pub fn new(client: Arc<C>, signer: Arc<S>) -> Self {
        let dispatcher = Dispatcher::new(client.clone(), signer);
        Self { client, dispatcher }
    }

    /// Wrap an existing dispatcher (to share its cancellation signal).
    pub fn with_dispatcher(client: Arc<C>, dispatcher: Dispatcher<C, S>) -> Self {
        Self { client, dispatcher }
    }

    /// Transfer `amount` to each recipient in order, one dispatch each.
    ///
    /// Returns exactly one result per input recipient, order preserved,
    /// so callers can correlate results to inputs positionally.
    #[instrument(skip_all, fields(recipients = recipients.len()))]
    pub async fn disburse(
        &self,
        recipients: &[(Address, U256)],
        policy: &RetryPolicy,
    ) -> Vec<RecipientResult> {
        self.check_funding_balance(recipients).await;

        let mut results = Vec::with_capacity(recipients.len());
        for (index, (recipient, amount)) in recipients.iter().enumerate() {
            info!(index, %recipient, %amount, "Disbursing to recipient");
            let request = SubmissionRequest::transfer(*recipient, *amount)
                .with_metadata(format!("disburse #{index}"));
            let result = self.dispatcher.dispatch(&request, policy).await;

            let balance_after = match &result {
                DispatchResult::Success { .. } => {
                    self.client.balance_of(*recipient).await.ok()
                }
                _ => {
                    warn!(index, %recipient, "Disbursement to recipient failed; continuing");
                    None
                }
            };

            results.push(RecipientResult {
                index,
                recipient: *recipient,
                amount: *amount,
                result,
                balance_after,
            });
        }

        let summary = Self::summarize(&results);
        info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            "Batch disbursement finished"
        );
        results
    }

    /// Count successes and failures over a finished batch.
    pub fn summarize(results: &[RecipientResult]) -> DisbursementSummary {
        let succeeded = results.iter().filter(|r| r.result.is_success()).count();
        DisbursementSummary {
            succeeded,
            failed: results.len() - succeeded,
        }
    }

    /// Advisory check that the funding account covers the whole batch.
    /// A shortfall (or an unreadable balance) is logged and never
    /// blocks submission.
    async fn check_funding_balance(&self, recipients: &[(Address, U256)]) {
        let required = recipients
            .iter()
            .fold(U256::zero(), |acc, (_, amount)| acc.saturating_add(*amount));
        let funder = self.dispatcher.account();
        match self.client.balance_of(funder).await {
            Ok(balance) if balance < required => {
                warn!(%funder, %balance, %required, "Funding balance may not cover all transfers");
            }
            Ok(balance) => {
                debug!(%funder, %balance, %required, "Funding balance covers the batch");
            }
            Err(err) => {
                warn!(%funder, %err, "Could not read funding balance; proceeding without the check");
            }
        }
    }
}

#[cfg(test)]
mod test {
    use mockall::Sequence;

    use dispatch_core::{RejectionReason, RetryPolicy, SubmitError};
    use dispatch_test::{mocks::MockLedger, receipt_in_block, StaticSigner};

    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn recipients() -> Vec<(Address, U256)> {
        vec![
            (Address::repeat_byte(0xa1), U256::from(1_000)),
            (Address::repeat_byte(0xa2), U256::from(1_000)),
            (Address::repeat_byte(0xa3), U256::from(1_000)),
        ]
    }

    fn funded_signer() -> Arc<StaticSigner> {
        Arc::new(StaticSigner::new(Address::repeat_byte(1)))
    }

    #[tokio::test(start_paused = true)]
    async fn one_fatal_recipient_does_not_abort_the_batch() {
        init_tracing();
        let mut client = MockLedger::new();
        // funding-balance advisory, then post-transfer reads for the
        // two successful recipients
        client
            .expect__balance_of()
            .times(3)
            .returning(|_| Ok(U256::from(1_000_000)));
        client.expect__pending_nonce().times(3).returning(|_| Ok(7));
        let mut seq = Sequence::new();
        client
            .expect__submit()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|signed| Ok(signed.fingerprint));
        client
            .expect__submit()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(SubmitError::Rejected(RejectionReason::InsufficientFunds)));
        client
            .expect__submit()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|signed| Ok(signed.fingerprint));
        client
            .expect__fetch_receipt()
            .times(2)
            .returning(|_| Ok(receipt_in_block(3)));

        let disburser = BatchDisburser::new(Arc::new(client), funded_signer());
        let results = disburser.disburse(&recipients(), &RetryPolicy::default()).await;

        assert_eq!(results.len(), 3, "one result per input recipient");
        assert!(results[0].result.is_success());
        assert!(!results[1].result.is_success());
        assert!(results[2].result.is_success(), "processing continued past the failure");
        assert_eq!(
            results.iter().map(|r| r.index).collect::<Vec<_>>(),
            vec![0, 1, 2],
            "order preserved"
        );
        assert!(results[0].balance_after.is_some());
        assert!(results[1].balance_after.is_none());

        let summary = BatchDisburser::<MockLedger, StaticSigner>::summarize(&results);
        assert_eq!(summary, DisbursementSummary { succeeded: 2, failed: 1 });
    }

    #[tokio::test(start_paused = true)]
    async fn funding_shortfall_is_advisory_only() {
        init_tracing();
        let mut client = MockLedger::new();
        let mut balances = Sequence::new();
        // the advisory read sees less than the 3000 required
        client
            .expect__balance_of()
            .times(1)
            .in_sequence(&mut balances)
            .returning(|_| Ok(U256::from(10)));
        client
            .expect__balance_of()
            .times(3)
            .in_sequence(&mut balances)
            .returning(|_| Ok(U256::from(1_000)));
        client.expect__pending_nonce().times(3).returning(|_| Ok(7));
        client
            .expect__submit()
            .times(3)
            .returning(|signed| Ok(signed.fingerprint));
        client
            .expect__fetch_receipt()
            .times(3)
            .returning(|_| Ok(receipt_in_block(3)));

        let disburser = BatchDisburser::new(Arc::new(client), funded_signer());
        let results = disburser.disburse(&recipients(), &RetryPolicy::default()).await;

        assert_eq!(results.len(), 3, "the warning never blocks submission");
        assert!(results.iter().all(|r| r.result.is_success()));
    }

    #[tokio::test(start_paused = true)]
    async fn unreadable_funding_balance_does_not_block_the_batch() {
        let mut client = MockLedger::new();
        let mut balances = Sequence::new();
        client
            .expect__balance_of()
            .times(1)
            .in_sequence(&mut balances)
            .returning(|_| {
                Err(dispatch_core::NetworkError::Unreachable("503".into()))
            });
        client
            .expect__balance_of()
            .times(1)
            .in_sequence(&mut balances)
            .returning(|_| Ok(U256::from(1_000)));
        client.expect__pending_nonce().times(1).returning(|_| Ok(7));
        client
            .expect__submit()
            .times(1)
            .returning(|signed| Ok(signed.fingerprint));
        client
            .expect__fetch_receipt()
            .times(1)
            .returning(|_| Ok(receipt_in_block(3)));

        let disburser = BatchDisburser::new(Arc::new(client), funded_signer());
        let single = [(Address::repeat_byte(0xa1), U256::from(1_000))];
        let results = disburser.disburse(&single, &RetryPolicy::default()).await;

        assert_eq!(results.len(), 1);
        assert!(results[0].result.is_success());
    }

    #[tokio::test(start_paused = true)]
    async fn empty_batch_returns_no_results() {
        let mut client = MockLedger::new();
        client
            .expect__balance_of()
            .times(1)
            .returning(|_| Ok(U256::zero()));

        let disburser = BatchDisburser::new(Arc::new(client), funded_signer());
        let results = disburser.disburse(&[], &RetryPolicy::default()).await;
        assert!(results.is_empty());
    }
}
