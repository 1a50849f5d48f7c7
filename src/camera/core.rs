//! Core camera and viewport types.
//!
//! The camera owns a camera-to-world transform plus perspective
//! projection parameters, and provides the projection/unprojection
//! primitives the controller and picking code are built on.

use glam::{IVec2, Mat4, Vec2, Vec3};

/// Render-target extent in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport, clamping either extent to at least one pixel.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Convert a pixel position to normalized device coordinates,
    /// `2 * pixel / extent - 1` per axis.
    ///
    /// No Y flip is applied here; NDC y follows screen y (downward).
    /// Consumers that need world-up NDC negate y themselves.
    #[must_use]
    pub fn ndc(self, pixel: IVec2) -> Vec2 {
        Vec2::new(
            2.0 * pixel.x as f32 / self.width as f32 - 1.0,
            2.0 * pixel.y as f32 / self.height as f32 - 1.0,
        )
    }

    /// Width / height ratio.
    #[must_use]
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Perspective camera defined by a camera-to-world transform and
/// projection parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    transform: Mat4,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Create a camera at the world origin with an identity orientation.
    #[must_use]
    pub fn new(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            transform: Mat4::IDENTITY,
            fovy,
            aspect,
            znear,
            zfar,
        }
    }

    /// Place the camera at `eye` oriented toward `target`.
    pub fn look_at_from(&mut self, eye: Vec3, target: Vec3) {
        self.transform = Mat4::from_translation(eye);
        self.look_at(target);
    }

    /// Camera-to-world transform.
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Replace the camera-to-world transform.
    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }

    /// World-space direction of the camera's local `-Z` axis
    /// (direction-only, no translation component).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (-self.transform.z_axis.truncate()).normalize_or_zero()
    }

    /// World-space direction of the camera's local `+Y` axis.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.transform.y_axis.truncate().normalize_or_zero()
    }

    /// Re-orient the camera in place to face `target`.
    ///
    /// Degenerate targets (at the camera position) leave the orientation
    /// unchanged. A view direction parallel to world up falls back to the
    /// world Z axis as the up reference.
    pub fn look_at(&mut self, target: Vec3) {
        let eye = self.position();
        let dir = target - eye;
        if dir.length_squared() < f32::EPSILON {
            return;
        }
        let up = if dir.normalize().cross(Vec3::Y).length_squared() < 1e-6 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        self.transform = Mat4::look_at_rh(eye, target, up).inverse();
    }

    /// Translate the camera by a world-space delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.transform = Mat4::from_translation(delta) * self.transform;
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.transform.inverse()
    }

    /// Perspective projection matrix ([0, 1] depth range).
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world-space point to NDC (x, y in [-1, 1], z in [0, 1]).
    #[must_use]
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_proj().project_point3(world)
    }

    /// Un-project an NDC point (z in [0, 1]) back to world space via the
    /// inverse view-projection matrix.
    #[must_use]
    pub fn unproject_ndc(&self, ndc: Vec3) -> Vec3 {
        self.view_proj().inverse().project_point3(ndc)
    }
}
