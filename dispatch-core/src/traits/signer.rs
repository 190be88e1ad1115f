use std::fmt::Debug;

use async_trait::async_trait;
use auto_impl::auto_impl;

use crate::{Address, SignedSubmission, SignerError, SubmissionRequest};

/// Produces signed, transmittable forms of requests.
///
/// Key custody, keystore decryption, and signature schemes are entirely
/// the signer's responsibility; the dispatcher only ever sees the
/// finished [`SignedSubmission`].
#[async_trait]
#[auto_impl(&, Box, Arc)]
pub trait RequestSigner: Send + Sync + Debug {
    /// The signing account's address.
    fn address(&self) -> Address;

    /// Sign `request` with the given ordering counter.
    async fn sign(
        &self,
        request: &SubmissionRequest,
        nonce: u64,
    ) -> Result<SignedSubmission, SignerError>;
}
