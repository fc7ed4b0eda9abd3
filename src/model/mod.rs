//! The code-entity tree rendered by this crate.
//!
//! The model is produced upstream; here it is plain data with serde derives so that documents can
//! be loaded from JSON.

pub mod declarations;
pub mod expressions;
pub mod loader;
pub mod names;
pub mod statements;

pub use declarations::*;
pub use expressions::*;
pub use loader::*;
pub use names::*;
pub use statements::*;
