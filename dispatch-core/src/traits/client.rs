use std::fmt::Debug;

use async_trait::async_trait;
use auto_impl::auto_impl;

use crate::{Address, NetworkError, Receipt, SignedSubmission, SubmitError, H256, U256};

/// Interface to a ledger endpoint.
///
/// The dispatcher is agnostic to transport; implementations translate
/// every raw endpoint failure into the closed taxonomy in
/// [`crate::error`] at this boundary.
#[async_trait]
#[auto_impl(&, Box, Arc)]
pub trait LedgerClient: Send + Sync + Debug {
    /// The endpoint's pending view of the account's next ordering
    /// counter, including not-yet-finalized submissions.
    async fn pending_nonce(&self, account: Address) -> Result<u64, NetworkError>;

    /// Submit a signed request. On acceptance returns a handle usable
    /// with [`LedgerClient::fetch_receipt`]; rejections surface as
    /// [`SubmitError::Rejected`].
    async fn submit(&self, submission: &SignedSubmission) -> Result<H256, SubmitError>;

    /// Wait until the accepted submission lands and return its receipt.
    async fn fetch_receipt(&self, handle: H256) -> Result<Receipt, NetworkError>;

    /// Look a submission up by content fingerprint. `None` when this
    /// endpoint has not seen it yet.
    async fn find_by_fingerprint(&self, fingerprint: H256) -> Result<Option<Receipt>, NetworkError>;

    /// Native balance of an account.
    async fn balance_of(&self, account: Address) -> Result<U256, NetworkError>;

    /// Height of the endpoint's latest block. Doubles as a cheap
    /// reachability probe.
    async fn latest_block(&self) -> Result<u64, NetworkError>;
}
