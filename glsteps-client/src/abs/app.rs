//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context a lesson draws into, and plugs it into the render loop
//! as its [`Surface`].

use std::sync::Arc;

use glow::HasContext;
use glsteps_core::{Config, InputState, Key, Surface};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::video::{GLProfile, SwapInterval};

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates the window and a current GL context as described by `config`.
    pub fn new(config: &Config) -> Result<Self, String> {
        let sdl = sdl2::init().map_err(|e| format!("Failed to init SDL2: {}", e))?;
        let video_subsystem = sdl
            .video()
            .map_err(|e| format!("Failed to init SDL2 video: {}", e))?;

        {
            let gl_attr = video_subsystem.gl_attr();
            gl_attr.set_context_profile(GLProfile::Core);
            gl_attr.set_context_version(config.gl.major, config.gl.minor);
            gl_attr.set_context_flags().forward_compatible().set();
            gl_attr.set_double_buffer(true);
            gl_attr.set_depth_size(24);
            gl_attr.set_stencil_size(8);
        }

        let mut builder = video_subsystem.window(
            &config.window.title,
            config.window.width,
            config.window.height,
        );
        builder.opengl().position_centered();
        if config.window.resizable {
            builder.resizable();
        }
        let window = builder
            .build()
            .map_err(|e| format!("Failed to create window: {}", e))?;

        let gl_context = window
            .gl_create_context()
            .map_err(|e| format!("Failed to create an OpenGL {}.{} context: {}", config.gl.major, config.gl.minor, e))?;
        window
            .gl_make_current(&gl_context)
            .map_err(|e| format!("Failed to make the context current: {}", e))?;

        if config.window.vsync {
            if let Err(e) = video_subsystem.gl_set_swap_interval(SwapInterval::VSync) {
                log::warn!("Vertical sync unavailable: {}", e);
            }
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };

        let (width, height) = window.drawable_size();
        unsafe {
            gl.viewport(0, 0, width as i32, height as i32);
        }

        let event_pump = sdl
            .event_pump()
            .map_err(|e| format!("Failed to get the SDL event pump: {}", e))?;

        log::info!(
            "Opened a {}x{} window with OpenGL {}.{}",
            width,
            height,
            config.gl.major,
            config.gl.minor
        );

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl: Arc::new(gl),
            event_pump,
        })
    }

    /// Size of the drawable area in pixels.
    pub fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }
}

impl Surface for App {
    fn poll_input(&mut self, input: &mut InputState) {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => input.quit_requested = true,
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    if let Some(key) = map_keycode(keycode) {
                        input.key_down(key);
                    }
                }
                Event::KeyUp {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    if let Some(key) = map_keycode(keycode) {
                        input.key_up(key);
                    }
                }
                _ => {}
            }
        }
    }

    fn swap_buffers(&mut self) {
        self.window.gl_swap_window();
    }

    fn next_error(&mut self) -> u32 {
        unsafe { self.gl.get_error() }
    }
}

/// Maps the SDL keys the lessons care about.
pub fn map_keycode(keycode: Keycode) -> Option<Key> {
    match keycode {
        Keycode::Escape => Some(Key::Escape),
        Keycode::Space => Some(Key::Space),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_lesson_keys_are_mapped() {
        assert_eq!(map_keycode(Keycode::Escape), Some(Key::Escape));
        assert_eq!(map_keycode(Keycode::Space), Some(Key::Space));
        assert_eq!(map_keycode(Keycode::Q), None);
    }
}
