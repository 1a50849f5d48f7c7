//! Screen-point picking integration.
//!
//! Builds world-space rays from screen pixels with the same
//! NDC/unprojection pipeline the camera controller uses, hands them to an
//! external ray caster, and keeps the single-slot selection state that
//! render-time highlight logic reads.
//!
//! Picking runs on the render thread; callers off that thread submit the
//! pick through a [`FrameTaskQueue`](crate::sync::FrameTaskQueue) task.

use glam::{IVec2, Vec3};

use crate::camera::{Camera, Viewport};

/// World-space ray with unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin (the camera's world position for pick rays).
    pub origin: Vec3,
    /// Normalized ray direction.
    pub direction: Vec3,
}

/// One intersection reported by a ray caster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit<Id> {
    /// Distance from the ray origin to the hit.
    pub distance: f32,
    /// The scene object that was hit.
    pub object: Id,
}

/// External bounding-volume hit tester.
///
/// Implemented by the surrounding engine; this crate only consumes it.
pub trait RayCaster {
    /// Identifier for hit scene objects.
    type ObjectId: Copy + PartialEq;

    /// Intersect `ray` with the scene, returning hits ordered
    /// nearest-first.
    fn cast_ray(&self, ray: &Ray) -> Vec<RayHit<Self::ObjectId>>;
}

/// Single-slot selected-object state.
#[derive(Debug, Clone, Copy)]
pub struct Selection<Id> {
    selected: Option<Id>,
}

impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<Id: Copy + PartialEq> Selection<Id> {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// The currently selected object, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Id> {
        self.selected
    }

    /// Select `object`, returning whether the selection changed.
    pub fn select(&mut self, object: Id) -> bool {
        let changed = self.selected != Some(object);
        self.selected = Some(object);
        changed
    }

    /// Clear the selection, returning whether the selection changed.
    pub fn clear(&mut self) -> bool {
        let changed = self.selected.is_some();
        self.selected = None;
        changed
    }
}

/// Build a world-space pick ray through a screen pixel.
///
/// Origin is the camera's world position; direction goes through the
/// pixel unprojected at mid depth. Screen y grows downward, so NDC y is
/// negated here.
#[must_use]
pub fn pick_ray(camera: &Camera, viewport: Viewport, point: IVec2) -> Ray {
    let ndc = viewport.ndc(point);
    let world = camera.unproject_ndc(Vec3::new(ndc.x, -ndc.y, 0.5));
    let origin = camera.position();
    Ray {
        origin,
        direction: (world - origin).normalize_or_zero(),
    }
}

/// Cast a pick ray through `point` and update the selection with the
/// nearest hit (or clear it on a miss).
///
/// Returns whether the selection changed.
pub fn pick_at<C: RayCaster>(
    caster: &C,
    camera: &Camera,
    viewport: Viewport,
    point: IVec2,
    selection: &mut Selection<C::ObjectId>,
) -> bool {
    let ray = pick_ray(camera, viewport, point);
    let hits = caster.cast_ray(&ray);
    match hits.first() {
        Some(hit) => selection.select(hit.object),
        None => selection.clear(),
    }
}
