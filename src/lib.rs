//! # sst-printer
//!
//! Renders a code-entity tree (types, members, statements, expressions and references) into
//! deterministic, tab-separated pseudocode.
//!
//! Temporaries introduced upstream (`$0`, `$1`, ...) are inlined: their assignments print nothing
//! and every later reference prints the captured right-hand side instead.

pub mod model;
pub mod renderer;

pub use model::*;
pub use renderer::*;
