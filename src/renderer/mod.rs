pub mod components;
pub mod context;
pub mod renderer;
pub mod renders;
pub mod traits;

pub use components::*;
pub use context::*;
pub use renderer::*;
pub use traits::*;
