//! Vertex-colored shapes: the triangle, the six-vertex quad and the indexed
//! quad all share one shader pair and differ only in their geometry.

use std::sync::Arc;

use glow::HasContext;
use glsteps_core::{Frame, LessonKind};

use super::{Lesson, program_and_mesh};
use crate::abs::{Mesh, ShaderProgram};

/// One vertex-colored mesh drawn with the `colored` shader pair.
pub struct Colored {
    gl: Arc<glow::Context>,
    mesh: Mesh,
    program: ShaderProgram,
}

impl Colored {
    /// Builds the mesh of `kind`, which must be a triangle, quad or elements lesson.
    pub fn new(gl: &Arc<glow::Context>, kind: LessonKind) -> Result<Self, String> {
        let (program, mesh) = program_and_mesh(gl, kind)?;
        program.use_program();
        Ok(Self {
            gl: Arc::clone(gl),
            mesh,
            program,
        })
    }
}

impl Lesson for Colored {
    fn render(&mut self, _frame: &Frame) {
        unsafe {
            self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
        self.program.use_program();
        self.mesh.draw();
    }
}
