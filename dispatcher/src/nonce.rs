use std::sync::Arc;

use derive_new::new;
use tracing::debug;

use dispatch_core::{Address, LedgerClient, NetworkError};

/// Acquires the next valid ordering counter for an account.
///
/// Always asks the endpoint for its *pending* view, which includes
/// not-yet-finalized submissions. Values are never cached and no local
/// offset is applied: a stale counter is exactly the failure the
/// dispatcher's retry loop recovers from, so the freshest remote view
/// is re-read before every attempt. The counter itself is owned by the
/// endpoint, not by this process.
#[derive(Debug, Clone, new)]
pub struct NonceAllocator<C> {
    client: Arc<C>,
}

impl<C: LedgerClient> NonceAllocator<C> {
    /// Query the pending ordering counter for `account`. Read-only; a
    /// network failure surfaces unclassified, and whether it aborts the
    /// dispatch is the caller's decision.
    pub async fn allocate(&self, account: Address) -> Result<u64, NetworkError> {
        let nonce = self.client.pending_nonce(account).await?;
        debug!(%account, nonce, "Observed pending ordering counter");
        Ok(nonce)
    }
}
