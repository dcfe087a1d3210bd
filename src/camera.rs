//! A first-person camera driven by keyboard movement and mouse look.
//!
//! Orientation is stored as yaw/pitch Euler angles (in degrees). The `front`, `right` and `up`
//! vectors are derived from them and recomputed after every orientation change, so they always
//! form a right-handed orthonormal basis.

use vek::*;

/// Yaw that points the camera down the negative z axis.
pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;

/// Tunable camera parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraConfig {
    /// World units travelled per second of movement input.
    pub movement_speed: f32,
    /// Degrees of rotation per unit of mouse offset.
    pub mouse_sensitivity: f32,
    /// Initial field of view, in degrees.
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]` degrees when constrained.
    pub pitch_limit: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            movement_speed: 5.0,
            mouse_sensitivity: 0.1,
            zoom: 45.0,
            min_zoom: 1.0,
            max_zoom: 60.0,
            pitch_limit: 89.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// A direction the camera can be moved in, independent of any windowing library's key codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    position: Vec3<f32>,
    yaw: f32,
    pitch: f32,
    world_up: Vec3<f32>,
    front: Vec3<f32>,
    right: Vec3<f32>,
    up: Vec3<f32>,
    zoom: f32,
    config: CameraConfig,
}

impl Camera {
    pub fn new(position: Vec3<f32>, world_up: Vec3<f32>, yaw: f32, pitch: f32) -> Self {
        Self::with_config(position, world_up, yaw, pitch, CameraConfig::default())
    }

    pub fn with_config(
        position: Vec3<f32>,
        world_up: Vec3<f32>,
        yaw: f32,
        pitch: f32,
        config: CameraConfig,
    ) -> Self {
        let mut this = Self {
            position,
            yaw,
            pitch,
            world_up,
            front: -Vec3::unit_z(),
            right: Vec3::unit_x(),
            up: Vec3::unit_y(),
            zoom: config.zoom.max(config.min_zoom).min(config.max_zoom),
            config,
        };
        this.update_basis();
        this
    }

    /// A camera at `position` looking down the negative z axis with +y up.
    pub fn at(position: Vec3<f32>) -> Self {
        Self::new(position, Vec3::unit_y(), DEFAULT_YAW, DEFAULT_PITCH)
    }

    pub fn position(&self) -> Vec3<f32> { self.position }
    pub fn yaw(&self) -> f32 { self.yaw }
    pub fn pitch(&self) -> f32 { self.pitch }
    pub fn world_up(&self) -> Vec3<f32> { self.world_up }
    pub fn front(&self) -> Vec3<f32> { self.front }
    pub fn right(&self) -> Vec3<f32> { self.right }
    pub fn up(&self) -> Vec3<f32> { self.up }
    /// The current field of view, in degrees.
    pub fn zoom(&self) -> f32 { self.zoom }
    pub fn config(&self) -> &CameraConfig { &self.config }

    pub fn set_world_up(&mut self, world_up: Vec3<f32>) {
        self.world_up = world_up;
        self.update_basis();
    }

    /// Translate the camera along its `front` or `right` vector.
    pub fn move_in(&mut self, direction: Movement, delta_time: f32) {
        let velocity = self.config.movement_speed * delta_time;
        self.position += match direction {
            Movement::Forward => self.front * velocity,
            Movement::Backward => -self.front * velocity,
            Movement::Left => -self.right * velocity,
            Movement::Right => self.right * velocity,
        };
    }

    /// Turn the camera by a mouse offset, clamping pitch to avoid flipping over the poles.
    pub fn look(&mut self, x_offset: f32, y_offset: f32) {
        self.look_with(x_offset, y_offset, true);
    }

    /// Turn the camera by a mouse offset.
    ///
    /// With `constrain_pitch` unset, pitch may reach the poles; if `front` then becomes parallel
    /// to `world_up`, the previous `right` vector is kept.
    pub fn look_with(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.config.mouse_sensitivity;
        self.pitch += y_offset * self.config.mouse_sensitivity;

        if constrain_pitch {
            let limit = self.config.pitch_limit;
            self.pitch = self.pitch.max(-limit).min(limit);
        }

        self.update_basis();
    }

    /// Narrow (positive offset) or widen (negative offset) the field of view.
    pub fn zoom_by(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset)
            .max(self.config.min_zoom)
            .min(self.config.max_zoom);
    }

    /// A right-handed look-at matrix from the camera's position along `front`.
    pub fn view_matrix(&self) -> Mat4<f32> {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// An OpenGL-style perspective projection using the current zoom as the vertical field of view.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4<f32> {
        Mat4::perspective_rh_no(
            self.zoom.to_radians(),
            aspect_ratio,
            self.config.near,
            self.config.far,
        )
    }

    // The order front -> right -> up keeps the basis right-handed.
    fn update_basis(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            pitch.cos() * yaw.cos(),
            pitch.sin(),
            pitch.cos() * yaw.sin(),
        )
        .normalized();

        let right = self.front.cross(self.world_up);
        if right.magnitude_squared() > f32::EPSILON {
            self.right = right.normalized();
        } else {
            log::warn!(
                "camera front {:?} is parallel to world up {:?}, keeping previous right vector",
                self.front, self.world_up,
            );
            self.right = (self.right - self.front * self.right.dot(self.front)).normalized();
        }
        self.up = self.right.cross(self.front).normalized();

        log::debug!(
            "camera yaw {:.2} pitch {:.2}: front {:?} right {:?} up {:?}",
            self.yaw, self.pitch, self.front, self.right, self.up,
        );
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::at(Vec3::zero())
    }
}

/// Turns absolute cursor positions into the relative offsets [`Camera::look`] expects.
///
/// The first position seen produces no offset. The y offset is reversed because window
/// coordinates grow downward while pitch grows upward.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CursorTracker {
    last: Option<Vec2<f32>>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&mut self, x: f32, y: f32) -> Vec2<f32> {
        let pos = Vec2::new(x, y);
        let last = self.last.replace(pos).unwrap_or(pos);
        Vec2::new(pos.x - last.x, last.y - pos.y)
    }

    /// Forget the last position, e.g. when the cursor re-enters the window.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
