//! A spinning cube mirrored in the floor it stands on.
//!
//! The floor is drawn into the stencil buffer only, then the mirrored cube is
//! drawn where the stencil was set, darkened so it reads as a reflection.

use std::f32::consts::PI;
use std::sync::Arc;

use glam::Vec3;
use glow::HasContext;
use glsteps_core::geometry::{CUBE_VERTICES, FLOOR_VERTICES, FLOOR_Z};
use glsteps_core::motion::{Camera, Spin, model_rotation, reflect_across_floor};
use glsteps_core::{Config, Frame, LessonKind};

use super::{Lesson, Pets, program_and_mesh, required_uniform};
use crate::abs::{Mesh, ShaderProgram, UniformSlot};

const BASE_SPEED: f32 = PI;
/// Tint of the reflected cube.
const REFLECTION_TINT: Vec3 = Vec3::splat(0.3);

/// A cube, its floor and its stencil-clipped reflection.
pub struct Mirrored {
    gl: Arc<glow::Context>,
    pets: Pets,
    mesh: Mesh,
    program: ShaderProgram,
    model: UniformSlot,
    override_color: UniformSlot,
    spin: Spin,
}

impl Mirrored {
    /// Sets the fixed camera and enables depth testing.
    pub fn new(
        gl: &Arc<glow::Context>,
        config: &Config,
        viewport: (u32, u32),
    ) -> Result<Self, String> {
        let (program, mesh) = program_and_mesh(gl, LessonKind::Reflection)?;
        program.use_program();
        let pets = Pets::load(gl, config, &program)?;

        let camera = Camera::overview();
        program.set(&required_uniform(&program, "view"), camera.view());
        program.set(
            &required_uniform(&program, "proj"),
            camera.projection(viewport.0, viewport.1),
        );
        let model = required_uniform(&program, "model");
        let override_color = required_uniform(&program, "overrideColor");
        program.set(&override_color, Vec3::ONE);

        unsafe {
            gl.enable(glow::DEPTH_TEST);
        }

        Ok(Self {
            gl: Arc::clone(gl),
            pets,
            mesh,
            program,
            model,
            override_color,
            spin: Spin::new(BASE_SPEED),
        })
    }
}

impl Lesson for Mirrored {
    fn render(&mut self, frame: &Frame) {
        self.spin.update(frame.delta);
        let model = model_rotation(self.spin.angle());

        let gl = &self.gl;
        unsafe {
            gl.clear_color(1.0, 1.0, 1.0, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
        self.program.use_program();
        self.pets.bind();

        // Cube
        self.program.set(&self.model, model);
        self.mesh.draw_range(0, CUBE_VERTICES);

        unsafe {
            // Floor: marks the mirror area in the stencil buffer and
            // leaves depth untouched so the reflection is not rejected.
            gl.enable(glow::STENCIL_TEST);
            gl.stencil_func(glow::ALWAYS, 1, 0xFF);
            gl.stencil_op(glow::KEEP, glow::KEEP, glow::REPLACE);
            gl.stencil_mask(0xFF);
            gl.depth_mask(false);
            gl.clear(glow::STENCIL_BUFFER_BIT);
        }
        self.mesh.draw_range(CUBE_VERTICES, FLOOR_VERTICES);

        unsafe {
            gl.stencil_func(glow::EQUAL, 1, 0xFF);
            gl.stencil_mask(0x00);
            gl.depth_mask(true);
        }

        // Reflection
        self.program
            .set(&self.model, reflect_across_floor(model, FLOOR_Z));
        self.program.set(&self.override_color, REFLECTION_TINT);
        self.mesh.draw_range(0, CUBE_VERTICES);
        self.program.set(&self.override_color, Vec3::ONE);

        unsafe {
            gl.disable(glow::STENCIL_TEST);
        }
    }
}
