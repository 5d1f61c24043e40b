//! Alias File Emitter
//!
//! Resolves every public hook to its final name, rejects collisions, renders
//! the alias module and compares it against the committed copy.

pub mod src {
    pub mod check;
    pub mod emit;
    pub mod render;
}

pub use src::check::*;
pub use src::emit::*;
pub use src::render::*;

#[cfg(test)]
mod test;
