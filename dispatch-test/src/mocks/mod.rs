//! Mockall mocks of the collaborator traits.

pub use client::MockLedger;
pub use signer::MockSigner;

mod client;
mod signer;
