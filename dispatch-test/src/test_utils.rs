use dispatch_core::{Receipt, H256, U256};

/// A successful receipt landed in the given block.
pub fn receipt_in_block(block_number: u64) -> Receipt {
    Receipt {
        tx_hash: H256::repeat_byte(0x11),
        block_number,
        block_hash: H256::repeat_byte(0x22),
        executed: true,
        gas_used: U256::from(21_000),
    }
}
