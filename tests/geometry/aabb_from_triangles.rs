use hew3d::bounding_volume::Aabb;
use hew3d::math::{Point, Real};
use hew3d::shape::Triangle;

pub fn random_point(rng: &mut oorandom::Rand32, scale: Real) -> Point<Real> {
    Point::new(
        (rng.rand_float() as Real - 0.5) * scale,
        (rng.rand_float() as Real - 0.5) * scale,
        (rng.rand_float() as Real - 0.5) * scale,
    )
}

pub fn random_batch(rng: &mut oorandom::Rand32, len: usize, scale: Real) -> Vec<Triangle> {
    (0..len)
        .map(|_| {
            Triangle::new(
                random_point(rng, scale),
                random_point(rng, scale),
                random_point(rng, scale),
            )
        })
        .collect()
}

#[test]
fn batch_aabb_contains_every_vertex() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..100 {
        let len = rng.rand_range(1..20) as usize;
        let batch = random_batch(&mut rng, len, 10.0);
        let aabb = Aabb::from_triangles(&batch);

        for tri in &batch {
            for vtx in tri.vertices() {
                for i in 0..3 {
                    assert!(aabb.mins[i] <= vtx[i] && vtx[i] <= aabb.maxs[i]);
                }
            }
            assert!(aabb.contains_local_point(&tri.center()));
        }
    }
}

#[test]
fn every_axis_extent_respects_the_floor() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..100 {
        let len = rng.rand_range(1..20) as usize;
        // A small scale makes thin batches likely.
        let batch = random_batch(&mut rng, len, 1.0e-4);
        let extents = Aabb::from_triangles(&batch).extents();

        for i in 0..3 {
            assert!(extents[i] >= Aabb::MIN_SIDE_LENGTH);
        }
    }
}

#[test]
fn flat_batch_is_inflated_symmetrically() {
    // Both triangles lie in the z = 1 plane.
    let batch = vec![
        Triangle::new(
            Point::new(0.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(0.0, 1.0, 1.0),
        ),
        Triangle::new(
            Point::new(1.0, 1.0, 1.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(0.0, 1.0, 1.0),
        ),
    ];

    let aabb = Aabb::from_triangles(&batch);
    let half = Aabb::MIN_SIDE_LENGTH / 2.0;

    assert_eq!(aabb.mins, Point::new(0.0, 0.0, 1.0 - half));
    assert_eq!(aabb.maxs, Point::new(1.0, 1.0, 1.0 + half));
    assert_eq!(aabb.center().z, 1.0);
}

#[test]
#[should_panic]
fn empty_batch_panics() {
    let _ = Aabb::from_triangles(&[]);
}
