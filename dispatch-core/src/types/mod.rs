pub use attempt::*;
pub use policy::*;
pub use receipt::*;
pub use request::*;
pub use result::*;

mod attempt;
mod policy;
mod receipt;
mod request;
mod result;

/// Account identifier. Always 32 bytes; ledgers with shorter native
/// addresses left-pad with zeroes.
pub type Address = crate::H256;
