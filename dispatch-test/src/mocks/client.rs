#![allow(non_snake_case)]

use async_trait::async_trait;
use mockall::*;

use dispatch_core::*;

mock! {
    pub Ledger {
        pub fn _pending_nonce(&self, account: Address) -> Result<u64, NetworkError>;

        pub fn _submit(&self, submission: SignedSubmission) -> Result<H256, SubmitError>;

        pub fn _fetch_receipt(&self, handle: H256) -> Result<Receipt, NetworkError>;

        pub fn _find_by_fingerprint(&self, fingerprint: H256) -> Result<Option<Receipt>, NetworkError>;

        pub fn _balance_of(&self, account: Address) -> Result<U256, NetworkError>;

        pub fn _latest_block(&self) -> Result<u64, NetworkError>;
    }
}

impl std::fmt::Debug for MockLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockLedger")
    }
}

#[async_trait]
impl LedgerClient for MockLedger {
    async fn pending_nonce(&self, account: Address) -> Result<u64, NetworkError> {
        self._pending_nonce(account)
    }

    async fn submit(&self, submission: &SignedSubmission) -> Result<H256, SubmitError> {
        self._submit(submission.clone())
    }

    async fn fetch_receipt(&self, handle: H256) -> Result<Receipt, NetworkError> {
        self._fetch_receipt(handle)
    }

    async fn find_by_fingerprint(&self, fingerprint: H256) -> Result<Option<Receipt>, NetworkError> {
        self._find_by_fingerprint(fingerprint)
    }

    async fn balance_of(&self, account: Address) -> Result<U256, NetworkError> {
        self._balance_of(account)
    }

    async fn latest_block(&self) -> Result<u64, NetworkError> {
        self._latest_block()
    }
}
