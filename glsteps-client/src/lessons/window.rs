//! An empty window cleared to black.

use std::sync::Arc;

use glow::HasContext;
use glsteps_core::Frame;

use super::Lesson;

/// Clears the window to black every frame.
pub struct Blank {
    gl: Arc<glow::Context>,
}

impl Blank {
    /// Needs no GPU objects beyond the context.
    pub fn new(gl: &Arc<glow::Context>) -> Self {
        Self { gl: Arc::clone(gl) }
    }
}

impl Lesson for Blank {
    fn render(&mut self, _frame: &Frame) {
        unsafe {
            self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }
}
