use crate::{H256, U256};

/// Confirmation record returned by an endpoint once an accepted
/// submission lands in a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Receipt {
    /// Hash of the landed transaction.
    pub tx_hash: H256,
    /// Block the transaction landed in.
    pub block_number: u64,
    /// Hash of that block.
    pub block_hash: H256,
    /// True if executed, false otherwise (reverted, etc.).
    pub executed: bool,
    /// Resources consumed by execution.
    pub gas_used: U256,
}
