//! Core data model, collaborator traits, and error taxonomy for the
//! reliable ledger request dispatcher.
//!
//! This crate owns everything the dispatcher and its callers share:
//! request/attempt/receipt types, the retry and confirmation policies,
//! the closed rejection taxonomy produced at the RPC-client boundary,
//! and the `LedgerClient`/`RequestSigner` collaborator traits. It
//! contains no retry logic of its own.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use error::*;
pub use traits::*;
pub use types::*;
pub use utils::*;

mod error;
mod traits;
mod types;
mod utils;

pub use primitive_types::{H256, U256};
