use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::SignedSquaredDistance;
use crate::shape::Triangle;
use num::Bounded;

/// The outcome of enclosing a triangle batch and splitting it in two.
///
/// This is the single-level building block of a bounding-volume-hierarchy
/// builder: such a builder calls [`split_triangle_batch`] on a batch, stores
/// the box, then recurses on the two output batches.
pub struct SplitResult {
    /// The AABB enclosing every input triangle.
    pub aabb: Aabb,
    /// The input vertex closest to the center of the (tight) vertex bounds.
    pub anchor: Point<Real>,
    /// The triangles whose centroid fell at or below the split threshold.
    pub left: Vec<Triangle>,
    /// The triangles whose centroid fell above the split threshold.
    pub right: Vec<Triangle>,
}

/// The axis a box with the given extents is split along: the longest one,
/// with exact ties resolved by this fixed comparison chain.
fn largest_extent_axis(extents: &Vector<Real>) -> usize {
    if extents.x > extents.y {
        if extents.x > extents.z {
            0
        } else {
            2
        }
    } else if extents.y > extents.z {
        1
    } else {
        2
    }
}

/// Encloses `batch` in an [`Aabb`] and partitions it into two non-empty
/// sub-batches.
///
/// The split plane passes through the spatial midpoint of the longest axis of
/// the batch's vertex bounds, not through a balanced-count median. A
/// triangle lands in the right sub-batch when its centroid coordinate on that
/// axis exceeds the midpoint. When every centroid lands on one side, the
/// spatial split is discarded and the input order is halved instead, so a
/// hierarchy builder always makes progress.
///
/// The threshold and the returned anchor are computed on the tight vertex
/// bounds, before the box side-length floor applies.
///
/// # Panics
/// Panics if `batch` contains fewer than two triangles.
pub fn split_triangle_batch(batch: &[Triangle]) -> SplitResult {
    assert!(
        batch.len() >= 2,
        "Triangle batch split: the input batch should contain at least two triangles."
    );

    let mut mins = Point::from(Vector::repeat(Real::max_value()));
    let mut maxs = Point::from(Vector::repeat(-Real::max_value()));

    for tri in batch {
        for vtx in tri.vertices() {
            mins = mins.inf(&vtx);
            maxs = maxs.sup(&vtx);
        }
    }

    let extents = maxs - mins;
    let axis = largest_extent_axis(&extents);
    let threshold = mins[axis] + extents[axis] / 2.0;
    let center = mins + extents / 2.0;

    let mut anchor = batch[0].a;
    let mut anchor_dist = SignedSquaredDistance::between(&center, &anchor);

    let mut left = Vec::new();
    let mut right = Vec::new();

    for tri in batch {
        if tri.center()[axis] > threshold {
            right.push(*tri);
        } else {
            left.push(*tri);
        }

        for vtx in tri.vertices() {
            let dist = SignedSquaredDistance::between(&center, &vtx);
            if dist < anchor_dist {
                anchor = vtx;
                anchor_dist = dist;
            }
        }
    }

    if left.is_empty() || right.is_empty() {
        // Every centroid landed on one side of the plane.
        log::trace!(
            "spatial split on axis {} degenerated, halving the input order instead",
            axis
        );

        let half = batch.len() / 2;
        left.clear();
        right.clear();
        left.extend_from_slice(&batch[..half]);
        right.extend_from_slice(&batch[half..]);
    }

    debug_assert!(!left.is_empty());
    debug_assert!(!right.is_empty());
    debug_assert_eq!(left.len() + right.len(), batch.len());

    SplitResult {
        aabb: Aabb::new(mins, maxs),
        anchor,
        left,
        right,
    }
}
