//! Structs and functions for handling textures.
//!
//! The module provides the [`Texture`] struct which is a CPU representation of a GPU texture.

use std::path::Path;
use std::sync::Arc;

use glow::HasContext;
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

/// Represents a texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Creates a new texture from the given [`image::DynamicImage`].
    ///
    /// Edges are clamped and sampling is linear.
    pub fn new(gl: &Arc<glow::Context>, image: &DynamicImage) -> Result<Self, String> {
        let (width, height) = image.dimensions();
        let data = image.to_rgba8().into_raw();
        unsafe {
            let texture = gl.create_texture()?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(data.as_slice())),
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_S,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_T,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
                width,
                height,
            })
        }
    }

    /// Loads an image file into a texture.
    ///
    /// An unreadable file is logged and replaced by [`placeholder_image`].
    pub fn load(gl: &Arc<glow::Context>, path: &Path) -> Result<Self, String> {
        let image = match image::open(path) {
            Ok(image) => {
                log::debug!("Loaded {} ({}x{})", path.display(), image.width(), image.height());
                image
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}, using a placeholder", path.display(), e);
                DynamicImage::ImageRgba8(placeholder_image())
            }
        };
        Self::new(gl, &image)
    }

    /// Returns the width of the texture.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the texture.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Binds the texture to the specified texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}

/// A 2x2 magenta and black checker, stretched over whatever samples it.
pub fn placeholder_image() -> RgbaImage {
    const MAGENTA: Rgba<u8> = Rgba([255, 0, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    RgbaImage::from_fn(2, 2, |x, y| if (x + y) % 2 == 0 { MAGENTA } else { BLACK })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_a_checker() {
        let image = placeholder_image();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(0, 0), image.get_pixel(1, 1));
        assert_eq!(image.get_pixel(1, 0), image.get_pixel(0, 1));
        assert_ne!(image.get_pixel(0, 0), image.get_pixel(1, 0));
    }
}
