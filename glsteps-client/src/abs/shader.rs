//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders.
//! Uniform locations are resolved once into a [`UniformSlot`] and values are pushed through
//! the [`Uniform`] trait.

use std::sync::Arc;

use glam::{Mat4, Vec3};
use glow::HasContext;
use glsteps_core::shaders::{self, FRAGMENT_OUTPUT, Stage};

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    ///
    /// A failed compile logs the driver's diagnostics and returns them.
    pub fn new(gl: &Arc<glow::Context>, stage: Stage, source: &str) -> Result<Self, String> {
        let shader_type = match stage {
            Stage::Vertex => glow::VERTEX_SHADER,
            Stage::Fragment => glow::FRAGMENT_SHADER,
        };
        unsafe {
            let shader = gl.create_shader(shader_type).map_err(|e| e.to_string())?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                log::error!("{} shader issues!\n{}", stage.label(), log.trim_end());
                return Err(format!("{} shader failed to compile", stage.label()));
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// A value that can be written to a uniform variable.
pub trait Uniform {
    /// Writes the value to the uniform at `location` of the program in use.
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation);
}

impl Uniform for i32 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_1_i32(Some(location), *self);
        }
    }
}

impl Uniform for f32 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_1_f32(Some(location), *self);
        }
    }
}

impl Uniform for Vec3 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_3_f32(Some(location), self.x, self.y, self.z);
        }
    }
}

impl Uniform for Mat4 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_matrix_4_f32_slice(Some(location), false, self.as_ref());
        }
    }
}

impl<T: Uniform> Uniform for &T {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        (*self).set_uniform(gl, location);
    }
}

/// A uniform location resolved once at setup.
///
/// Uniforms the linker optimized away resolve to an empty slot; writing to it
/// does nothing, like writing to location -1 in plain GL.
#[derive(Debug, Clone)]
pub struct UniformSlot {
    name: String,
    location: Option<glow::UniformLocation>,
}

impl UniformSlot {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.location.is_some()
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    ///
    /// Fragment output 0 is bound to `outColor` before linking.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, String> {
        unsafe {
            let program = gl.create_program().map_err(|e| e.to_string())?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.bind_frag_data_location(program, 0, FRAGMENT_OUTPUT);
            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                log::error!("Shader program issues!\n{}", log.trim_end());
                return Err("Shader program failed to link".to_string());
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// Compiles and links one of the embedded shader pairs.
    pub fn from_pair(gl: &Arc<glow::Context>, pair: &str) -> Result<Self, String> {
        let source = |stage: Stage| {
            shaders::source(pair, stage)
                .ok_or_else(|| format!("No embedded {} shader for `{}`", stage.label(), pair))
        };
        let vert = Shader::new(gl, Stage::Vertex, source(Stage::Vertex)?)?;
        let frag = Shader::new(gl, Stage::Fragment, source(Stage::Fragment)?)?;
        let program = Self::new(gl, &[&vert, &frag])?;
        log::debug!("Linked shader pair `{}`", pair);
        Ok(program)
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Location of a vertex attribute, `None` if it is not active.
    pub fn attrib_location(&self, name: &str) -> Option<u32> {
        unsafe { self.gl.get_attrib_location(self.id, name) }
    }

    /// Resolves a uniform location.
    pub fn uniform(&self, name: &str) -> UniformSlot {
        let location = unsafe { self.gl.get_uniform_location(self.id, name) };
        UniformSlot {
            name: name.to_string(),
            location,
        }
    }

    /// Writes a uniform of this program. The program must be in use.
    pub fn set<T: Uniform>(&self, slot: &UniformSlot, value: T) {
        if let Some(location) = &slot.location {
            value.set_uniform(&self.gl, location);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}
