//! Logging
//!
//! Leveled console logging for the generator.

pub mod src {
    pub mod console_logger;
    pub mod logger;
}

pub use src::console_logger::*;
pub use src::logger::*;
