//! Core definitions (error type, result helpers and macros), relied upon by all seqview-* crates.

pub mod error;
pub mod macros;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
