//! A flat triangle whose red channel pulses over time.

use std::sync::Arc;

use glam::Vec3;
use glow::HasContext;
use glsteps_core::motion::pulse;
use glsteps_core::{Frame, LessonKind};

use super::{Lesson, program_and_mesh, required_uniform};
use crate::abs::{Mesh, ShaderProgram, UniformSlot};

/// A triangle colored by the `triangleColor` uniform.
pub struct Pulsing {
    gl: Arc<glow::Context>,
    mesh: Mesh,
    program: ShaderProgram,
    triangle_color: UniformSlot,
}

impl Pulsing {
    /// Starts out plain red.
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, String> {
        let (program, mesh) = program_and_mesh(gl, LessonKind::Uniforms)?;
        program.use_program();
        let triangle_color = required_uniform(&program, "triangleColor");
        program.set(&triangle_color, Vec3::new(1.0, 0.0, 0.0));

        Ok(Self {
            gl: Arc::clone(gl),
            mesh,
            program,
            triangle_color,
        })
    }
}

impl Lesson for Pulsing {
    fn render(&mut self, frame: &Frame) {
        unsafe {
            self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
        self.program.use_program();
        self.program
            .set(&self.triangle_color, Vec3::new(pulse(frame.elapsed), 0.0, 0.0));
        self.mesh.draw();
    }
}
