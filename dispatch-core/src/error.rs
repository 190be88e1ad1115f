use std::time::Duration;

/// A transport-level failure: the endpoint could not be reached, or did
/// not answer before the call's timeout. Network errors are always
/// surfaced to the caller; the dispatcher never silently retries them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The endpoint could not be reached at all.
    #[error("endpoint unreachable: {0}")]
    Unreachable(String),
    /// A call did not complete within its timeout.
    #[error("call timed out after {0:?}")]
    Timeout(Duration),
    /// The endpoint answered with something that could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// The closed set of structured rejection kinds a ledger endpoint can
/// produce for a submission.
///
/// RPC clients translate raw endpoint failures into exactly one of
/// these variants at the boundary, so downstream classification matches
/// on tags rather than probing error objects or message text. The one
/// deliberate exception is [`RejectionReason::GasEstimationFailed`],
/// which keeps the endpoint's message: some endpoints report a stale
/// ordering counter through a failed gas estimation, and only the
/// message distinguishes that case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum RejectionReason {
    /// The ordering counter was below the endpoint's pending view.
    #[error("ordering counter too low")]
    NonceTooLow,
    /// The ordering counter was already consumed by a finalized request.
    #[error("ordering counter expired")]
    NonceExpired,
    /// A competing request with the same counter superseded this one.
    #[error("request superseded by a replacement")]
    Replaced,
    /// Gas estimation failed before the request could be accepted.
    #[error("gas estimation failed: {message}")]
    GasEstimationFailed {
        /// The endpoint's own description of the failure.
        message: String,
    },
    /// The sending account cannot cover value plus fees.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The sending account is not permitted to perform the call.
    #[error("permission denied")]
    PermissionDenied,
    /// The endpoint could not parse or validate the payload.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    /// Anything the client could not map onto a closed variant.
    #[error("{0}")]
    Other(String),
}

/// Failure of a single submission call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The call never completed; nothing is known about the attempt's
    /// effect on the endpoint.
    #[error(transparent)]
    Network(#[from] NetworkError),
    /// The endpoint received the request and rejected it.
    #[error("submission rejected: {0}")]
    Rejected(#[from] RejectionReason),
}

/// An error incurred by a signer. Key custody and decryption failures
/// all surface through here.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct SignerError(#[from] Box<dyn std::error::Error + Send + Sync>);

impl SignerError {
    /// Wrap any signer-internal error.
    pub fn new<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self(Box::new(err))
    }
}

/// The reason a dispatch invocation ended without success. Carried on
/// the `Fatal` terminal outcome; `Exhausted` carries the last
/// [`RejectionReason`] directly.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// An endpoint was unreachable before an attempt could complete.
    #[error(transparent)]
    Network(#[from] NetworkError),
    /// The signer refused or failed to produce a transmittable form.
    #[error("signing failed: {0}")]
    Signer(#[from] SignerError),
    /// The endpoint rejected the attempt for a non-recoverable reason.
    #[error(transparent)]
    Rejected(#[from] RejectionReason),
}
