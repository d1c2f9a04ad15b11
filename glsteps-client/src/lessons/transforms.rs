//! A textured quad spinning in perspective. Space kicks the spin.

use std::f32::consts::PI;
use std::sync::Arc;

use glow::HasContext;
use glsteps_core::motion::{Camera, Spin, model_rotation};
use glsteps_core::{Config, Frame, Key, LessonKind};

use super::{Lesson, Pets, program_and_mesh, required_uniform};
use crate::abs::{Mesh, ShaderProgram, UniformSlot};

/// Half a turn per second.
const BASE_SPEED: f32 = PI;

/// A blended kitten/puppy quad turning about Z.
pub struct Spinning {
    gl: Arc<glow::Context>,
    pets: Pets,
    mesh: Mesh,
    program: ShaderProgram,
    model: UniformSlot,
    spin: Spin,
}

impl Spinning {
    /// Sets the fixed view and a projection for `viewport`.
    pub fn new(
        gl: &Arc<glow::Context>,
        config: &Config,
        viewport: (u32, u32),
    ) -> Result<Self, String> {
        let (program, mesh) = program_and_mesh(gl, LessonKind::Transforms)?;
        program.use_program();
        let pets = Pets::load(gl, config, &program)?;

        let camera = Camera::close_up();
        program.set(&required_uniform(&program, "view"), camera.view());
        program.set(
            &required_uniform(&program, "proj"),
            camera.projection(viewport.0, viewport.1),
        );
        let model = required_uniform(&program, "model");

        Ok(Self {
            gl: Arc::clone(gl),
            pets,
            mesh,
            program,
            model,
            spin: Spin::new(BASE_SPEED),
        })
    }
}

impl Lesson for Spinning {
    fn render(&mut self, frame: &Frame) {
        if frame.input.was_pressed(Key::Space) {
            self.spin.impulse();
            log::info!("Spin! ({:.1} rad/s)", self.spin.speed());
        }
        self.spin.update(frame.delta);

        unsafe {
            self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
        self.program.use_program();
        self.program
            .set(&self.model, model_rotation(self.spin.angle()));
        self.pets.bind();
        self.mesh.draw();
    }
}
