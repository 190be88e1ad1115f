#![allow(non_snake_case)]

use async_trait::async_trait;
use mockall::*;

use dispatch_core::*;

mock! {
    pub Signer {
        pub fn _address(&self) -> Address;

        pub fn _sign(&self, request: SubmissionRequest, nonce: u64) -> Result<SignedSubmission, SignerError>;
    }
}

impl std::fmt::Debug for MockSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockSigner")
    }
}

#[async_trait]
impl RequestSigner for MockSigner {
    fn address(&self) -> Address {
        self._address()
    }

    async fn sign(
        &self,
        request: &SubmissionRequest,
        nonce: u64,
    ) -> Result<SignedSubmission, SignerError> {
        self._sign(request.clone(), nonce)
    }
}
