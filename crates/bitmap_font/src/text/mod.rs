//! Text rendering system
//!
//! Text layout, text materials, and the text renderer that ties a cached
//! font to its generated geometry.

pub mod config;
pub mod layout;
pub mod material;
pub mod renderer;

pub use config::*;
pub use layout::*;
pub use material::*;
pub use renderer::*;
