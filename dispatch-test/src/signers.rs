use async_trait::async_trait;

use dispatch_core::{
    fingerprint_of, Address, RequestSigner, SignedSubmission, SignerError, SubmissionRequest,
};

/// Deterministic signer for tests.
///
/// "Signs" by serializing the request's destination, value, and the
/// ordering counter, so equal `(request, nonce)` pairs yield equal
/// fingerprints and a retry with a fresh counter yields a new one. No
/// real key material is involved.
#[derive(Debug, Clone)]
pub struct StaticSigner {
    address: Address,
}

impl StaticSigner {
    /// A signer that claims `address` as its account.
    pub fn new(address: Address) -> Self {
        Self { address }
    }
}

#[async_trait]
impl RequestSigner for StaticSigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn sign(
        &self,
        request: &SubmissionRequest,
        nonce: u64,
    ) -> Result<SignedSubmission, SignerError> {
        let mut raw = Vec::with_capacity(72);
        raw.extend_from_slice(request.to.as_bytes());
        let mut value = [0u8; 32];
        request.value.to_big_endian(&mut value);
        raw.extend_from_slice(&value);
        raw.extend_from_slice(&nonce.to_be_bytes());

        let fingerprint = fingerprint_of(&raw);
        Ok(SignedSubmission {
            raw,
            fingerprint,
            nonce,
            from: self.address,
        })
    }
}
