//! Alias Config
//!
//! Loads the manually curated alias overrides and checks them against the
//! collected exports.

pub mod src {
    pub mod alias_config;
    pub mod validate;
}

pub use src::alias_config::*;
pub use src::validate::*;
