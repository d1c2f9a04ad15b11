//! Time-driven uniform values: color pulses, spinning and the camera.

use std::f32::consts::TAU;

use glam::{Mat4, Vec3};

/// Red channel of the `uniforms` lesson, oscillating between 0 and 1.
pub fn pulse(elapsed: f32) -> f32 {
    ((elapsed * 4.0).sin() + 1.0) / 2.0
}

/// A rotation angle that advances at a base speed and can be kicked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    angle: f32,
    speed: f32,
    base_speed: f32,
}

impl Spin {
    /// Speed added by one impulse, in radians per second.
    pub const IMPULSE: f32 = 4.0 * TAU;
    /// Time for the extra speed of an impulse to halve, in seconds.
    pub const HALF_LIFE: f32 = 0.5;

    /// Creates a spin turning at `base_speed` radians per second.
    pub fn new(base_speed: f32) -> Self {
        Self {
            angle: 0.0,
            speed: base_speed,
            base_speed,
        }
    }

    /// Current angle in radians, in `[0, TAU)`.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Adds a one-shot burst of speed.
    pub fn impulse(&mut self) {
        self.speed += Self::IMPULSE;
    }

    /// Advances the angle by `delta` seconds and lets the speed relax back
    /// to the base speed.
    pub fn update(&mut self, delta: f32) {
        self.angle = (self.angle + self.speed * delta).rem_euclid(TAU);
        let excess = self.speed - self.base_speed;
        self.speed = self.base_speed + excess * 0.5f32.powf(delta / Self::HALF_LIFE);
    }
}

/// Rotation of the model around the Z axis.
pub fn model_rotation(angle: f32) -> Mat4 {
    Mat4::from_rotation_z(angle)
}

/// Mirrors `model` across the horizontal plane at height `floor_z`.
pub fn reflect_across_floor(model: Mat4, floor_z: f32) -> Mat4 {
    model
        * Mat4::from_translation(Vec3::new(0.0, 0.0, 2.0 * floor_z))
        * Mat4::from_scale(Vec3::new(1.0, 1.0, -1.0))
}

/// A fixed look-at camera with a perspective projection. Z is up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Camera of the `transforms` lesson.
    pub fn close_up() -> Self {
        Self {
            eye: Vec3::new(1.2, 1.2, 1.2),
            ..Self::overview()
        }
    }

    /// Camera of the `reflection` lesson.
    pub fn overview() -> Self {
        Self {
            eye: Vec3::new(2.5, 2.5, 2.0),
            target: Vec3::ZERO,
            up: Vec3::Z,
            fov_y: 45f32.to_radians(),
            near: 1.0,
            far: 10.0,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection for a viewport of the given size. A zero height is
    /// treated as one pixel.
    pub fn projection(&self, width: u32, height: u32) -> Mat4 {
        let aspect = width as f32 / height.max(1) as f32;
        Mat4::perspective_rh_gl(self.fov_y, aspect, self.near, self.far)
    }
}
