//! Diagnostics
//!
//! Error codes, diagnostics and the fatal error types surfaced by a run.

pub mod src {
    pub mod diagnostic;
    pub mod error;
    pub mod error_code;
}

pub use src::diagnostic::*;
pub use src::error::*;
pub use src::error_code::*;
