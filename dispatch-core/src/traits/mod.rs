pub use client::*;
pub use signer::*;

mod client;
mod signer;
