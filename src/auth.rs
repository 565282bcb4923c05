//! Auth-domain identifiers and requested method tokens.

pub mod id;
pub mod method;

pub use id::*;
pub use method::*;
