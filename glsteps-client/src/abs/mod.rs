//! Owned wrappers around the window, the GL context and the GPU objects the
//! lessons create. Every wrapper releases its object on drop.

pub mod app;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use app::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;
