//! The GL-free core of glsteps. Everything the lessons need that can be
//! reasoned about without a GPU lives here: configuration, vertex layouts
//! and the hard-coded geometry, the embedded shader sources, the render loop
//! state machine and the per-frame motion math.

pub mod config;
pub mod geometry;
pub mod glerror;
pub mod input;
pub mod layout;
pub mod lesson;
pub mod motion;
pub mod runloop;
pub mod shaders;

pub use config::Config;
pub use glerror::GlError;
pub use input::{InputState, Key};
pub use layout::{Attribute, VertexLayout};
pub use lesson::LessonKind;
pub use runloop::{Frame, LoopState, RenderLoop, Surface};
