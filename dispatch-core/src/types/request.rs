use std::ops::Deref;

use uuid::Uuid;

use crate::{Address, H256, U256};

/// Unique request identifier, used to correlate attempts in logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Create a new random request identifier.
    pub fn random() -> Self {
        RequestId(Uuid::new_v4())
    }
}

impl Deref for RequestId {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single logical state-mutating request to a ledger endpoint.
///
/// Immutable once built. One request may be signed and submitted
/// several times; each submission attempt carries a freshly acquired
/// ordering counter, so the counter is deliberately not part of the
/// request itself. `nonce` is an explicit override honored on the
/// first attempt only.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmissionRequest {
    /// Unique identifier for log correlation.
    pub id: RequestId,
    /// Destination account.
    pub to: Address,
    /// Native value transferred.
    pub value: U256,
    /// Explicit ordering-counter override for the first attempt.
    pub nonce: Option<u64>,
    /// Resource limit hint; the endpoint estimates when absent.
    pub gas_limit: Option<U256>,
    /// Fee cap hint.
    pub max_fee_per_gas: Option<U256>,
    /// Priority fee hint.
    pub max_priority_fee_per_gas: Option<U256>,
    /// Printed in logs for easier debugging.
    pub metadata: String,
}

impl SubmissionRequest {
    /// A plain value transfer with endpoint-estimated resources.
    pub fn transfer(to: Address, value: U256) -> Self {
        Self {
            id: RequestId::random(),
            to,
            value,
            nonce: None,
            gas_limit: None,
            max_fee_per_gas: None,
            max_priority_fee_per_gas: None,
            metadata: String::new(),
        }
    }

    /// Pin the first attempt to an explicit ordering counter.
    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Supply a resource limit instead of relying on endpoint estimation.
    pub fn with_gas_limit(mut self, gas_limit: U256) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    /// Cap the total and priority fee the request may pay.
    pub fn with_fee_caps(mut self, max_fee_per_gas: U256, max_priority_fee_per_gas: U256) -> Self {
        self.max_fee_per_gas = Some(max_fee_per_gas);
        self.max_priority_fee_per_gas = Some(max_priority_fee_per_gas);
        self
    }

    /// Attach a log-correlation label.
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = metadata.into();
        self
    }
}

/// A signed, transmittable form of a request, produced by a
/// [`RequestSigner`](crate::RequestSigner).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SignedSubmission {
    /// Raw transmittable bytes.
    pub raw: Vec<u8>,
    /// Keccak-256 content hash of `raw`; stable across endpoints.
    pub fingerprint: H256,
    /// Ordering counter the request was signed with.
    pub nonce: u64,
    /// Signing account.
    pub from: Address,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn transfer_builder_fills_hints() {
        let to = Address::repeat_byte(2);
        let request = SubmissionRequest::transfer(to, U256::from(1_000))
            .with_gas_limit(U256::from(42_000))
            .with_fee_caps(U256::from(2_000_000_000u64), U256::from(1_000_000_000u64))
            .with_metadata("fund validator 2");

        assert_eq!(request.to, to);
        assert_eq!(request.nonce, None);
        assert_eq!(request.gas_limit, Some(U256::from(42_000)));
        assert_eq!(request.max_priority_fee_per_gas, Some(U256::from(1_000_000_000u64)));
        assert_eq!(request.metadata, "fund validator 2");
    }

    #[test]
    fn request_ids_are_unique() {
        assert_ne!(RequestId::random(), RequestId::random());
    }
}
