//! Orbit camera with inertial damping and zoom clamping.

use glam::{Mat4, Vec3};

/// A ray in world space, cast from the camera through a screen pixel.
#[derive(Debug, Clone, Copy)]
pub struct PickRay {
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

/// Camera orbiting a fixed target.
///
/// Position is spherical around the target: yaw about +Y, pitch toward +Y,
/// at `distance`. Dragging feeds angular velocity which decays over a few
/// frames, so releases glide to rest. Zoom is clamped to the configured
/// band.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
    min_distance: f32,
    max_distance: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,

    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// Drag-to-radians factor.
const ROTATE_SENSITIVITY: f32 = 0.005;
/// Wheel-to-distance factor.
const ZOOM_SENSITIVITY: f32 = 0.01;
/// Exponential decay rate of drag inertia, per second.
const DAMPING: f32 = 8.0;
/// Keep pitch shy of the poles so the up vector stays valid.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

impl OrbitCamera {
    pub fn new(
        target: Vec3,
        distance: f32,
        min_distance: f32,
        max_distance: f32,
        fov_y_deg: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self {
            target,
            yaw: 0.0,
            pitch: 0.0,
            distance: distance.clamp(min_distance, max_distance),
            min_distance,
            max_distance,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            fov_y_deg,
            aspect: 1.0,
            near,
            far,
        }
    }

    /// World position of the eye. Yaw 0 / pitch 0 looks down -Z from +Z.
    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + self.distance * Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch)
    }

    pub fn up(&self) -> Vec3 {
        Vec3::Y
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Feed a mouse drag, in pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw_velocity -= dx * ROTATE_SENSITIVITY;
        self.pitch_velocity += dy * ROTATE_SENSITIVITY;
    }

    /// Feed a wheel tick. Positive zooms in; distance stays in the band.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta * ZOOM_SENSITIVITY * self.distance)
            .clamp(self.min_distance, self.max_distance);
    }

    /// Advance the damping by one frame.
    pub fn update(&mut self, dt: f32) {
        self.yaw += self.yaw_velocity;
        self.pitch = (self.pitch + self.pitch_velocity).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let decay = (-DAMPING * dt.max(0.0)).exp();
        self.yaw_velocity *= decay;
        self.pitch_velocity *= decay;
    }

    /// Track a viewport resize so perspective stays undistorted.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, self.up())
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    /// Ray through a pixel. `(0, 0)` is the top-left corner of the surface.
    pub fn ray_through_pixel(&self, px: f32, py: f32, width: f32, height: f32) -> PickRay {
        let ndc_x = 2.0 * px / width - 1.0;
        let ndc_y = 1.0 - 2.0 * py / height;

        let origin = self.position();
        let forward = (self.target - origin).normalize();
        let right = forward.cross(self.up()).normalize();
        let up = right.cross(forward);

        let half_height = (0.5 * self.fov_y_deg.to_radians()).tan();
        let half_width = half_height * self.aspect;

        let direction =
            (forward + right * (ndc_x * half_width) + up * (ndc_y * half_height)).normalize();
        PickRay { origin, direction }
    }
}
