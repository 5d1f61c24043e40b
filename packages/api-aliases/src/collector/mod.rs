//! Export Collector
//!
//! Walks the generated source tree and records the exported hooks, types and
//! plain functions together with the module path that defines them.

pub mod src {
    pub mod collect;
    pub mod registry;
    pub mod scanner;
}

pub use src::collect::*;
pub use src::registry::*;
pub use src::scanner::*;
