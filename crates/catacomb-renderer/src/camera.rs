//! First-person fly camera for the tunnel walkthrough
//!
//! The camera consumes already-decoded input amounts (movement direction +
//! frame time, look deltas, scroll). Polling the window system is the
//! caller's job.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Camera uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// View matrix.
    pub view: [[f32; 4]; 4],
    /// Projection matrix.
    pub proj: [[f32; 4]; 4],
    /// Camera position (w = 1).
    pub eye: [f32; 4],
}

/// Movement direction relative to the camera orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Backward,
    /// Along the negative right vector.
    Left,
    /// Along the right vector.
    Right,
}

/// First-person fly camera
#[derive(Debug, Clone)]
pub struct FlyCamera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Yaw angle in degrees (-90 looks down negative Z).
    pub yaw: f32,
    /// Pitch angle in degrees, clamped to (-89, 89).
    pub pitch: f32,
    /// Vertical field of view in degrees, narrowed by zooming.
    pub fov_degrees: f32,
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Movement speed in units per second.
    pub move_speed: f32,
    /// Mouse look sensitivity in degrees per pixel.
    pub look_sensitivity: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
}

const WORLD_UP: Vec3 = Vec3::Y;
const PITCH_LIMIT: f32 = 89.0;
const FOV_MIN: f32 = 1.0;

impl FlyCamera {
    /// Create a camera at `position` with the given config and aspect ratio
    pub fn new(position: Vec3, config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self {
            position,
            yaw: -90.0,
            pitch: 0.0,
            fov_degrees: config.fov_degrees,
            aspect,
            near: config.near_plane,
            far: config.far_plane,
            move_speed: config.move_speed,
            look_sensitivity: config.look_sensitivity,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: WORLD_UP,
        };
        camera.update_vectors();
        camera
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Move the camera for one frame
    pub fn translate(&mut self, direction: MoveDirection, delta_time: f32) {
        let velocity = self.move_speed * delta_time;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a mouse-look delta in pixels
    pub fn look(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw += delta_x * self.look_sensitivity;
        self.pitch = (self.pitch + delta_y * self.look_sensitivity)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Apply a scroll-wheel zoom step (positive narrows the field of view)
    pub fn zoom(&mut self, scroll: f32) {
        self.fov_degrees = (self.fov_degrees - scroll).clamp(FOV_MIN, 45.0);
    }

    /// Unit view direction
    pub fn front(&self) -> Vec3 {
        self.front
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Get camera uniform data
    pub fn uniform(&self) -> CameraUniform {
        let view = self.view_matrix();
        let proj = self.projection_matrix();
        let view_proj = proj * view;

        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            eye: [self.position.x, self.position.y, self.position.z, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> FlyCamera {
        FlyCamera::new(Vec3::new(0.0, 0.0, 5.0), &CameraConfig::default(), 16.0 / 9.0)
    }

    #[test]
    fn test_initial_orientation_looks_down_negative_z() {
        let camera = camera();
        assert!((camera.front() - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_forward_moves_into_the_tunnel() {
        let mut camera = camera();
        camera.translate(MoveDirection::Forward, 1.0);
        assert!(camera.position.z < 5.0);
        assert!((camera.position.z - (5.0 - camera.move_speed)).abs() < 1e-5);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = camera();
        camera.look(0.0, 10000.0);
        assert_eq!(camera.pitch, 89.0);
        camera.look(0.0, -20000.0);
        assert_eq!(camera.pitch, -89.0);
    }

    #[test]
    fn test_zoom_clamps_fov() {
        let mut camera = camera();
        camera.zoom(100.0);
        assert_eq!(camera.fov_degrees, 1.0);
        camera.zoom(-100.0);
        assert_eq!(camera.fov_degrees, 45.0);
    }

    #[test]
    fn test_uniform_eye_matches_position() {
        let camera = camera();
        let uniform = camera.uniform();
        assert_eq!(uniform.eye, [0.0, 0.0, 5.0, 1.0]);
    }
}
