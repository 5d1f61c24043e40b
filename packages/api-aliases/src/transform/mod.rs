//! Name Transformer
//!
//! Maps a generated export name to its stable alias: manual override first,
//! then a fixed list of rewrite rules, otherwise the name itself.

pub mod src {
    pub mod resolve;
    pub mod rules;
}

pub use src::resolve::*;
pub use src::rules::*;

#[cfg(test)]
mod test;
