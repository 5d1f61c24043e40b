//! File System Helpers
//!
//! Path manipulation in POSIX form and atomic output writes.

pub mod src {
    pub mod util;
    pub mod write;
}

pub use src::util::*;
pub use src::write::*;
