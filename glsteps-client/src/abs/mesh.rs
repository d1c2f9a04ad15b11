//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for managing mesh data on the GPU side.
//! Attributes are bound by name against a linked [`ShaderProgram`], following a
//! [`VertexLayout`].

use std::sync::Arc;

use glow::HasContext;
use glsteps_core::VertexLayout;
use glsteps_core::layout::validate_indices;

use crate::abs::ShaderProgram;

/// Represents a mesh stored on the GPU side.
pub struct Mesh {
    gl: Arc<glow::Context>,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<glow::Buffer>,
    vertex_count: usize,
    index_count: usize,
}

impl Mesh {
    /// Uploads interleaved `vertices` and optional `indices`, and records the
    /// attribute layout in a new vertex array.
    pub fn new(
        gl: &Arc<glow::Context>,
        program: &ShaderProgram,
        layout: &VertexLayout,
        vertices: &[f32],
        indices: Option<&[u32]>,
    ) -> Result<Self, String> {
        let vertex_count = layout.vertex_count(vertices)?;
        if let Some(indices) = indices {
            validate_indices(indices, vertex_count)?;
        }

        unsafe {
            // The VAO goes first: only bindings made while it is bound stick to it.
            let vao = gl.create_vertex_array()?;
            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(e) => {
                    gl.delete_vertex_array(vao);
                    return Err(e);
                }
            };
            let mut mesh = Self {
                gl: Arc::clone(gl),
                vao,
                vbo,
                ebo: None,
                vertex_count,
                index_count: 0,
            };

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                std::slice::from_raw_parts(
                    vertices.as_ptr() as *const u8,
                    std::mem::size_of_val(vertices),
                ),
                glow::STATIC_DRAW,
            );

            if let Some(indices) = indices {
                let ebo = gl.create_buffer()?;
                mesh.ebo = Some(ebo);
                mesh.index_count = indices.len();
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                gl.buffer_data_u8_slice(
                    glow::ELEMENT_ARRAY_BUFFER,
                    std::slice::from_raw_parts(
                        indices.as_ptr() as *const u8,
                        std::mem::size_of_val(indices),
                    ),
                    glow::STATIC_DRAW,
                );
            }

            for attribute in layout.bound() {
                let Some(location) = program.attrib_location(attribute.name) else {
                    log::debug!("Attribute `{}` is not active, skipping", attribute.name);
                    continue;
                };
                gl.enable_vertex_attrib_array(location);
                gl.vertex_attrib_pointer_f32(
                    location,
                    attribute.components as i32,
                    glow::FLOAT,
                    false,
                    attribute.stride as i32,
                    attribute.offset as i32,
                );
            }

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            Ok(mesh)
        }
    }

    /// Draws the whole mesh, through the element buffer if there is one.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            if self.ebo.is_some() {
                self.gl.draw_elements(
                    glow::TRIANGLES,
                    self.index_count as i32,
                    glow::UNSIGNED_INT,
                    0,
                );
            } else {
                self.gl
                    .draw_arrays(glow::TRIANGLES, 0, self.vertex_count as i32);
            }
            self.gl.bind_vertex_array(None);
        }
    }

    /// Draws `count` vertices starting at `first`, ignoring any element buffer.
    pub fn draw_range(&self, first: usize, count: usize) {
        debug_assert!(first + count <= self.vertex_count);
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl
                .draw_arrays(glow::TRIANGLES, first as i32, count as i32);
            self.gl.bind_vertex_array(None);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            if let Some(ebo) = self.ebo {
                self.gl.delete_buffer(ebo);
            }
            self.gl.delete_buffer(self.vbo);
            self.gl.delete_vertex_array(self.vao);
        }
    }
}
