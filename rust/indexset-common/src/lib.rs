//! Core definitions (error type and precondition helpers), relied upon by all indexset-* crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
