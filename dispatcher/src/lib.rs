//! Reliable submission of ordered, state-mutating requests to ledger
//! endpoints.
//!
//! The dispatcher acquires a fresh ordering counter before every
//! attempt, distinguishes transient ordering conflicts (retried up to a
//! bound, with a fixed delay) from fatal rejections (surfaced
//! immediately), and optionally confirms that an accepted submission
//! becomes visible on a second, independently-replicated endpoint.
//! Batch disbursement layers per-recipient dispatch on top, tolerating
//! individual failures.
//!
//! Concurrency contract: dispatch independent accounts in parallel
//! freely, but serialize dispatch per account. Racing two dispatchers
//! on one account manufactures the very ordering conflicts the retry
//! loop exists to absorb.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use classify::{classify, ErrorDisposition};
pub use confirm::{Confirmation, ConfirmationPoller};
pub use disburse::{BatchDisburser, DisbursementSummary, RecipientResult};
pub use dispatch::Dispatcher;
pub use nonce::NonceAllocator;

mod classify;
mod confirm;
mod disburse;
mod dispatch;
mod nonce;
