//! Orbit camera controller.
//!
//! Consumes [`GestureEvent`]s and mutates a [`Camera`] around a movable
//! pivot point: secondary drags orbit, tertiary drags pan, scrolls dolly
//! along the view axis. All mutation is synchronous; when gestures arrive
//! off the render thread the caller wraps the invocation in a
//! [`FrameTaskQueue`](crate::sync::FrameTaskQueue) task.

use glam::{IVec2, Mat4, Quat, Vec2, Vec3};

use super::core::{Camera, Viewport};
use crate::input::{GestureEvent, PointerRole};
use crate::options::ControlOptions;

/// Squared length below which a rotation axis counts as degenerate.
const DEGENERATE_AXIS_EPS: f32 = 1e-10;

/// Gesture-driven orbit/pan/dolly controller.
///
/// Owns the orbit pivot and the viewport extent used for NDC conversion;
/// the camera itself is owned externally and mutated in place under the
/// single-writer rule (whichever thread currently drains the frame task
/// queue).
#[derive(Debug, Clone)]
pub struct OrbitController {
    pivot: Vec3,
    viewport: Viewport,
    options: ControlOptions,
}

impl OrbitController {
    /// Create a controller with the pivot at the world origin.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_options(viewport, ControlOptions::default())
    }

    /// Create a controller with explicit control options.
    #[must_use]
    pub fn with_options(viewport: Viewport, options: ControlOptions) -> Self {
        Self {
            pivot: Vec3::ZERO,
            viewport,
            options,
        }
    }

    /// Current orbit pivot in world space.
    #[must_use]
    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    /// Move the orbit pivot.
    pub fn set_pivot(&mut self, pivot: Vec3) {
        self.pivot = pivot;
    }

    /// Viewport used for pixel-to-NDC conversion.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Control options in effect.
    #[must_use]
    pub fn options(&self) -> &ControlOptions {
        &self.options
    }

    /// Mutable access to the control options.
    pub fn options_mut(&mut self) -> &mut ControlOptions {
        &mut self.options
    }

    /// Track a render-target resize, keeping the camera aspect in step
    /// with the viewport.
    pub fn resize(&mut self, camera: &mut Camera, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        camera.aspect = self.viewport.aspect();
    }

    /// React to a gesture by mutating the camera and/or pivot.
    ///
    /// Malformed input (degenerate axes, camera at the pivot) is a silent
    /// no-op; this path never fails and never produces NaN transforms.
    pub fn handle_gesture(
        &mut self,
        camera: &mut Camera,
        gesture: GestureEvent,
    ) {
        match gesture {
            GestureEvent::Drag { start, end, pointer } => match pointer {
                PointerRole::Secondary => self.orbit(camera, start, end),
                PointerRole::Tertiary => self.pan(camera, start, end),
                // Primary drags are reserved for selection/picking.
                PointerRole::Primary | PointerRole::PrimaryDouble => {}
            },
            GestureEvent::Scroll { distance } => self.dolly(camera, distance),
        }
    }

    /// Rotate the camera around the pivot so the grabbed point follows
    /// the drag.
    ///
    /// Drag endpoints are lifted onto a unit trackball sphere centered on
    /// the pivot and rotated into world orientation; the rotation axis is
    /// `cross(end, start)` and the angle is the exact angle between the
    /// two vectors (`acos` of the clamped dot product). Antiparallel
    /// vectors are an exact half-turn around the camera's up axis;
    /// parallel vectors are a no-op. The Y coordinates of start and end
    /// are swapped when assembling the endpoints, which gives dragging
    /// right the "view rotates left" feel.
    fn orbit(&mut self, camera: &mut Camera, start: IVec2, end: IVec2) {
        if self.pivot_degenerate(camera) {
            return;
        }
        let ndc_start = self.viewport.ndc(start);
        let ndc_end = self.viewport.ndc(end);
        let rotation_part = camera.transform();
        let view_start = rotation_part.transform_vector3(arcball_vector(
            Vec2::new(ndc_start.x, ndc_end.y),
        ));
        let view_end = rotation_part.transform_vector3(arcball_vector(
            Vec2::new(ndc_end.x, ndc_start.y),
        ));

        let dot = view_start.dot(view_end).clamp(-1.0, 1.0);
        let cross = view_end.cross(view_start);
        let axis = if cross.length_squared() > DEGENERATE_AXIS_EPS {
            cross.normalize()
        } else if dot < 0.0 {
            // Antiparallel: the half-turn axis is ambiguous, spin about
            // the view's up axis.
            camera.up()
        } else {
            log::debug!("degenerate rotation axis; orbit step skipped");
            return;
        };

        let angle = dot.acos() * self.options.rotate_speed;
        if !angle.is_finite() || angle.abs() < f32::EPSILON {
            return;
        }

        let rotation = Mat4::from_quat(Quat::from_axis_angle(axis, angle));
        let pivoted = Mat4::from_translation(self.pivot)
            * rotation
            * Mat4::from_translation(-self.pivot)
            * camera.transform();
        camera.set_transform(pivoted);
        // Re-apply the look-at so repeated orbits never accumulate roll.
        camera.look_at(self.pivot);
    }

    /// Translate pivot and camera together by the inverted drag vector,
    /// keeping the pivot's projected screen position fixed.
    fn pan(&mut self, camera: &mut Camera, start: IVec2, end: IVec2) {
        if self.pivot_degenerate(camera) {
            return;
        }
        let Some((view_start, view_end)) =
            self.drag_vectors(camera, start, end)
        else {
            return;
        };
        let delta = -(view_end - view_start) * self.options.pan_speed;
        if !delta.is_finite() {
            return;
        }
        self.pivot += delta;
        camera.translate(delta);
    }

    /// Translate the camera along its local forward axis; the pivot does
    /// not move.
    fn dolly(&self, camera: &mut Camera, distance: f32) {
        let delta = camera.forward() * distance * self.options.dolly_speed;
        if !delta.is_finite() {
            return;
        }
        camera.translate(delta);
    }

    /// Pivot-relative view vectors for a drag, unprojected at the
    /// pivot's NDC depth, with the Y-swap applied.
    fn drag_vectors(
        &self,
        camera: &Camera,
        start: IVec2,
        end: IVec2,
    ) -> Option<(Vec3, Vec3)> {
        let ndc_start = self.viewport.ndc(start);
        let ndc_end = self.viewport.ndc(end);
        let depth = camera.project(self.pivot).z;
        if !depth.is_finite() {
            return None;
        }
        let view_start = camera
            .unproject_ndc(Vec3::new(ndc_start.x, ndc_end.y, depth))
            - self.pivot;
        let view_end = camera
            .unproject_ndc(Vec3::new(ndc_end.x, ndc_start.y, depth))
            - self.pivot;
        (view_start.is_finite() && view_end.is_finite())
            .then_some((view_start, view_end))
    }

    fn pivot_degenerate(&self, camera: &Camera) -> bool {
        let distance = (camera.position() - self.pivot).length();
        if distance < self.options.min_pivot_distance {
            log::debug!("camera at pivot; gesture skipped");
            return true;
        }
        false
    }
}

/// Lift an NDC point onto the unit trackball sphere.
///
/// Points outside the unit circle clamp to the sphere's equator, so
/// corner-to-corner drags stay well defined.
fn arcball_vector(ndc: Vec2) -> Vec3 {
    let r2 = ndc.length_squared();
    if r2 >= 1.0 {
        let edge = ndc / r2.sqrt();
        Vec3::new(edge.x, edge.y, 0.0)
    } else {
        Vec3::new(ndc.x, ndc.y, (1.0 - r2).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-3;

    /// Square viewport with the camera at (0, 0, 10) looking at the
    /// origin pivot.
    fn test_rig() -> (OrbitController, Camera) {
        let viewport = Viewport::new(600, 600);
        let controller = OrbitController::new(viewport);
        let mut camera = Camera::new(45.0, viewport.aspect(), 0.1, 100.0);
        camera.look_at_from(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        (controller, camera)
    }

    fn assert_finite(camera: &Camera) {
        assert!(
            camera.transform().is_finite(),
            "camera transform contains NaN/inf"
        );
    }

    #[test]
    fn arcball_vectors_are_unit_length() {
        for ndc in [
            Vec2::ZERO,
            Vec2::new(0.3, -0.4),
            Vec2::new(1.0, 0.0),
            Vec2::new(-2.0, 2.0),
        ] {
            let v = arcball_vector(ndc);
            assert!((v.length() - 1.0).abs() < 1e-5, "{ndc} -> {v}");
        }
    }

    #[test]
    fn full_width_drag_is_a_half_turn() {
        let (mut controller, mut camera) = test_rig();
        // Pixels (0, 300) -> (600, 300) are NDC (-1, 0) -> (1, 0).
        controller.handle_gesture(
            &mut camera,
            GestureEvent::Drag {
                start: IVec2::new(0, 300),
                end: IVec2::new(600, 300),
                pointer: PointerRole::Secondary,
            },
        );
        assert_finite(&camera);
        assert!(
            camera
                .position()
                .abs_diff_eq(Vec3::new(0.0, 0.0, -10.0), 0.01),
            "expected half-turn, got {}",
            camera.position()
        );
        // Look-at re-application keeps the camera facing the pivot.
        assert!(camera.forward().abs_diff_eq(Vec3::Z, TOLERANCE));
    }

    #[test]
    fn orbit_preserves_distance_and_aim() {
        let (mut controller, mut camera) = test_rig();
        let before = camera.position();
        controller.handle_gesture(
            &mut camera,
            GestureEvent::Drag {
                // Off-axis drag so the rotation axis is well defined.
                start: IVec2::new(420, 300),
                end: IVec2::new(360, 360),
                pointer: PointerRole::Secondary,
            },
        );
        assert_finite(&camera);
        let position = camera.position();
        assert!(
            position.distance(before) > TOLERANCE,
            "camera did not move"
        );
        assert!(
            (position.length() - 10.0).abs() < 0.01,
            "orbit changed pivot distance: {}",
            position.length()
        );
        let to_pivot = (controller.pivot() - position).normalize();
        assert!(camera.forward().abs_diff_eq(to_pivot, TOLERANCE));
    }

    #[test]
    fn zero_length_drag_is_a_no_op() {
        let (mut controller, mut camera) = test_rig();
        let before = camera.transform();
        controller.handle_gesture(
            &mut camera,
            GestureEvent::Drag {
                start: IVec2::new(400, 250),
                end: IVec2::new(400, 250),
                pointer: PointerRole::Secondary,
            },
        );
        assert_finite(&camera);
        assert!(camera.transform().abs_diff_eq(before, TOLERANCE));
    }

    #[test]
    fn corner_to_corner_drag_stays_finite() {
        let (mut controller, mut camera) = test_rig();
        controller.handle_gesture(
            &mut camera,
            GestureEvent::Drag {
                start: IVec2::new(0, 0),
                end: IVec2::new(600, 600),
                pointer: PointerRole::Secondary,
            },
        );
        assert_finite(&camera);
        assert!((camera.position().length() - 10.0).abs() < 0.01);
    }

    #[test]
    fn camera_at_pivot_skips_orbit() {
        let (mut controller, mut camera) = test_rig();
        camera.set_transform(Mat4::IDENTITY);
        let before = camera.transform();
        controller.handle_gesture(
            &mut camera,
            GestureEvent::Drag {
                start: IVec2::new(100, 100),
                end: IVec2::new(200, 150),
                pointer: PointerRole::Secondary,
            },
        );
        assert_finite(&camera);
        assert_eq!(camera.transform(), before);
    }

    #[test]
    fn pan_moves_pivot_and_camera_together() {
        let (mut controller, mut camera) = test_rig();
        let pivot_before = controller.pivot();
        let camera_before = camera.position();
        let pivot_ndc_before = camera.project(pivot_before);

        controller.handle_gesture(
            &mut camera,
            GestureEvent::Drag {
                start: IVec2::new(300, 300),
                end: IVec2::new(360, 330),
                pointer: PointerRole::Tertiary,
            },
        );
        assert_finite(&camera);

        let pivot_delta = controller.pivot() - pivot_before;
        let camera_delta = camera.position() - camera_before;
        assert!(pivot_delta.length() > TOLERANCE, "pan did not move pivot");
        assert!(pivot_delta.abs_diff_eq(camera_delta, TOLERANCE));

        // The pivot's projected screen position is unchanged.
        let pivot_ndc_after = camera.project(controller.pivot());
        assert!(
            pivot_ndc_after.abs_diff_eq(pivot_ndc_before, TOLERANCE),
            "pivot drifted on screen: {pivot_ndc_before} -> {pivot_ndc_after}"
        );
    }

    #[test]
    fn dolly_translates_along_forward_only() {
        let (mut controller, mut camera) = test_rig();
        let pivot_before = controller.pivot();
        controller.handle_gesture(
            &mut camera,
            GestureEvent::Scroll { distance: 2.0 },
        );
        assert_finite(&camera);
        assert!(camera
            .position()
            .abs_diff_eq(Vec3::new(0.0, 0.0, 8.0), TOLERANCE));
        assert_eq!(controller.pivot(), pivot_before);

        controller.handle_gesture(
            &mut camera,
            GestureEvent::Scroll { distance: -1.0 },
        );
        assert!(camera
            .position()
            .abs_diff_eq(Vec3::new(0.0, 0.0, 9.0), TOLERANCE));
    }

    #[test]
    fn primary_drag_leaves_camera_untouched() {
        let (mut controller, mut camera) = test_rig();
        let before = camera.transform();
        controller.handle_gesture(
            &mut camera,
            GestureEvent::Drag {
                start: IVec2::new(100, 100),
                end: IVec2::new(300, 200),
                pointer: PointerRole::Primary,
            },
        );
        assert_eq!(camera.transform(), before);
    }

    #[test]
    fn resize_updates_viewport_and_aspect() {
        let (mut controller, mut camera) = test_rig();
        controller.resize(&mut camera, 1200, 600);
        assert_eq!(controller.viewport(), Viewport::new(1200, 600));
        assert_eq!(camera.aspect, 2.0);
    }
}
