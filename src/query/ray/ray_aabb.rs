use crate::bounding_volume::Aabb;
use crate::math::{Real, DIM};
use crate::query::Ray;

/// Slack applied to both ends of the slab interval when testing for overlap,
/// so grazing and edge-touching rays are not rejected to round-off.
const GRAZE_TOLERANCE: Real = 3.0e-7;

impl Aabb {
    /// Clips the line supporting `ray` against the slabs of this AABB.
    ///
    /// Returns `(tmin, tmax)`: the largest of the per-axis slab entry
    /// parameters and the smallest of the exit parameters. The line crosses
    /// this AABB iff `tmin <= tmax` up to tolerance, which is what
    /// [`intersects_local_ray`](Self::intersects_local_ray) tests.
    ///
    /// A zero direction component divides to an infinity, which the min/max
    /// reductions order like any other value. The construction-time side
    /// length floor keeps the box extents themselves away from zero.
    #[inline]
    pub fn clip_local_ray(&self, ray: &Ray) -> (Real, Real) {
        let t0 = (self.mins - ray.origin).component_div(&ray.dir);
        let t1 = (self.maxs - ray.origin).component_div(&ray.dir);

        let mut tmin = Real::NEG_INFINITY;
        let mut tmax = Real::INFINITY;

        for i in 0..DIM {
            tmin = tmin.max(t0[i].min(t1[i]));
            tmax = tmax.min(t0[i].max(t1[i]));
        }

        (tmin, tmax)
    }

    /// Tests whether the line supporting `ray` intersects this AABB, using
    /// the slab method.
    ///
    /// Both directions along the line count: a box entirely behind the ray
    /// origin still reports an intersection. Callers wanting forward-only
    /// semantics must clip the interval returned by
    /// [`clip_local_ray`](Self::clip_local_ray) against zero themselves.
    #[inline]
    pub fn intersects_local_ray(&self, ray: &Ray) -> bool {
        let (tmin, tmax) = self.clip_local_ray(ray);
        tmin - GRAZE_TOLERANCE < tmax + GRAZE_TOLERANCE
    }
}
