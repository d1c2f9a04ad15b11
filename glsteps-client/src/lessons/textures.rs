//! A textured quad whose upper half reflects the lower one through a ripple.

use std::sync::Arc;

use glow::HasContext;
use glsteps_core::{Config, Frame, LessonKind};

use super::{Lesson, Pets, program_and_mesh, required_uniform};
use crate::abs::{Mesh, ShaderProgram, UniformSlot};

/// The kitten quad with a rippling mirror image on top.
pub struct Rippling {
    gl: Arc<glow::Context>,
    pets: Pets,
    mesh: Mesh,
    program: ShaderProgram,
    time_diff: UniformSlot,
}

impl Rippling {
    /// Loads both images from the configured resource directory.
    pub fn new(gl: &Arc<glow::Context>, config: &Config) -> Result<Self, String> {
        let (program, mesh) = program_and_mesh(gl, LessonKind::Textures)?;
        program.use_program();
        let pets = Pets::load(gl, config, &program)?;
        let time_diff = required_uniform(&program, "timeDiff");

        Ok(Self {
            gl: Arc::clone(gl),
            pets,
            mesh,
            program,
            time_diff,
        })
    }
}

impl Lesson for Rippling {
    fn render(&mut self, frame: &Frame) {
        unsafe {
            self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
        self.program.use_program();
        self.program.set(&self.time_diff, frame.elapsed);
        self.pets.bind();
        self.mesh.draw();
    }
}
