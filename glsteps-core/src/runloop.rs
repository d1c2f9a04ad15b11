//! The render loop shared by every lesson.
//!
//! The loop is a two-state machine, [`LoopState::Running`] and
//! [`LoopState::Closing`]. One iteration polls input, hands a [`Frame`] to the
//! lesson, swaps buffers, checks the close condition and drains the driver's
//! error queue. The window side is abstracted behind [`Surface`] so the loop
//! can be driven by a fake window in tests.

use std::time::Instant;

use crate::glerror::{GlError, drain_errors};
use crate::input::InputState;

/// The window and context side of the loop.
pub trait Surface {
    /// Pumps pending window events into `input`.
    fn poll_input(&mut self, input: &mut InputState);

    /// Presents the back buffer. Blocks on vertical sync when enabled.
    fn swap_buffers(&mut self);

    /// Pops one code from the driver's error queue, `0` when empty.
    fn next_error(&mut self) -> u32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closing,
}

/// Per-frame values handed to the lesson.
pub struct Frame<'a> {
    /// Zero-based frame number.
    pub index: u64,
    /// Seconds since the loop started.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
    pub input: &'a InputState,
}

pub struct RenderLoop {
    state: LoopState,
    input: InputState,
    start: Instant,
    last_frame: Instant,
    frames: u64,
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderLoop {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            state: LoopState::Running,
            input: InputState::default(),
            start: now,
            last_frame: now,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one iteration and returns the driver errors it drained.
    ///
    /// Does nothing once the loop is closing.
    pub fn step<S, F>(&mut self, surface: &mut S, draw: &mut F) -> Vec<GlError>
    where
        S: Surface,
        F: FnMut(&Frame),
    {
        if self.state == LoopState::Closing {
            return Vec::new();
        }

        self.input.begin_frame();
        surface.poll_input(&mut self.input);

        let now = Instant::now();
        let frame = Frame {
            index: self.frames,
            elapsed: now.duration_since(self.start).as_secs_f32(),
            delta: now.duration_since(self.last_frame).as_secs_f32(),
            input: &self.input,
        };
        self.last_frame = now;

        draw(&frame);
        surface.swap_buffers();
        self.frames += 1;

        if self.input.wants_close() {
            log::debug!("Close requested after {} frames", self.frames);
            self.state = LoopState::Closing;
        }

        let errors = drain_errors(|| surface.next_error());
        for error in &errors {
            log::error!("GL error: {}", error);
        }
        errors
    }

    /// Steps until the loop is closing. Returns the number of frames rendered.
    pub fn run<S, F>(mut self, surface: &mut S, mut draw: F) -> u64
    where
        S: Surface,
        F: FnMut(&Frame),
    {
        while self.state == LoopState::Running {
            self.step(surface, &mut draw);
        }
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glerror::{INVALID_ENUM, NO_ERROR};
    use crate::input::Key;

    /// A window that asks to close after a fixed number of polls.
    #[derive(Default)]
    struct FakeSurface {
        polls: u32,
        close_after: u32,
        escape_after: Option<u32>,
        swaps: u32,
        errors: Vec<u32>,
    }

    impl Surface for FakeSurface {
        fn poll_input(&mut self, input: &mut InputState) {
            self.polls += 1;
            if self.polls >= self.close_after && self.close_after > 0 {
                input.quit_requested = true;
            }
            if self.escape_after == Some(self.polls) {
                input.key_down(Key::Escape);
            }
        }

        fn swap_buffers(&mut self) {
            self.swaps += 1;
        }

        fn next_error(&mut self) -> u32 {
            self.errors.pop().unwrap_or(NO_ERROR)
        }
    }

    #[test]
    fn loop_ends_on_close_request() {
        let mut surface = FakeSurface {
            close_after: 3,
            ..Default::default()
        };
        let mut drawn = Vec::new();
        let frames = RenderLoop::new().run(&mut surface, |frame| drawn.push(frame.index));
        assert_eq!(frames, 3);
        assert_eq!(drawn, vec![0, 1, 2]);
        assert_eq!(surface.swaps, 3);
    }

    #[test]
    fn loop_ends_on_escape() {
        let mut surface = FakeSurface {
            escape_after: Some(5),
            ..Default::default()
        };
        let frames = RenderLoop::new().run(&mut surface, |_| {});
        assert_eq!(frames, 5);
    }

    #[test]
    fn closing_loop_does_not_draw() {
        let mut surface = FakeSurface {
            close_after: 1,
            ..Default::default()
        };
        let mut render_loop = RenderLoop::new();
        let mut draws = 0;
        render_loop.step(&mut surface, &mut |_: &Frame| draws += 1);
        assert_eq!(render_loop.state(), LoopState::Closing);
        render_loop.step(&mut surface, &mut |_: &Frame| draws += 1);
        assert_eq!(draws, 1);
        assert_eq!(render_loop.frames(), 1);
    }

    #[test]
    fn step_drains_errors() {
        let mut surface = FakeSurface {
            errors: vec![INVALID_ENUM, INVALID_ENUM],
            ..Default::default()
        };
        let mut render_loop = RenderLoop::new();
        let errors = render_loop.step(&mut surface, &mut |_: &Frame| {});
        assert_eq!(errors, vec![GlError::InvalidEnum; 2]);
        assert!(render_loop.step(&mut surface, &mut |_: &Frame| {}).is_empty());
        assert_eq!(render_loop.state(), LoopState::Running);
    }

    #[test]
    fn frame_time_moves_forward() {
        let mut surface = FakeSurface {
            close_after: 2,
            ..Default::default()
        };
        let mut times = Vec::new();
        RenderLoop::new().run(&mut surface, |frame| times.push(frame.elapsed));
        assert_eq!(times.len(), 2);
        assert!(times[1] >= times[0]);
    }
}
