use sha3::{Digest, Keccak256};

use crate::H256;

/// Keccak-256 content hash of a signed submission's raw bytes.
///
/// The fingerprint is stable across endpoints, which is what makes it
/// usable to look a submission up on an endpoint other than the one it
/// was submitted to.
pub fn fingerprint_of(raw: &[u8]) -> H256 {
    H256::from_slice(Keccak256::new().chain_update(raw).finalize().as_slice())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic_and_content_addressed() {
        let a = fingerprint_of(b"transfer 1000 to 0x02");
        let b = fingerprint_of(b"transfer 1000 to 0x02");
        let c = fingerprint_of(b"transfer 1000 to 0x03");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, H256::zero());
    }
}
