use approx::assert_relative_eq;
use hew3d::bounding_volume::Aabb;
use hew3d::math::{Point, Vector};
use hew3d::query::Ray;

fn unit_box() -> Aabb {
    Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0))
}

#[test]
fn front_hit_interval() {
    let ray = Ray::new(Point::new(-1.0, 0.5, 0.5), Vector::new(1.0, 0.0, 0.0));
    let (tmin, tmax) = unit_box().clip_local_ray(&ray);

    assert_relative_eq!(tmin, 1.0);
    assert_relative_eq!(tmax, 2.0);
    assert!(unit_box().intersects_local_ray(&ray));
}

#[test]
fn zero_direction_components_are_tolerated() {
    // The slab divisions on y and z produce infinities.
    let inside = Ray::new(Point::new(0.5, 0.5, 0.5), Vector::new(0.0, 0.0, 1.0));
    assert!(unit_box().intersects_local_ray(&inside));

    let outside = Ray::new(Point::new(-1.0, 1.1, 0.5), Vector::new(1.0, 0.0, 0.0));
    assert!(!unit_box().intersects_local_ray(&outside));
}

#[test]
fn corner_touching_ray_is_a_hit() {
    // Touches the box exactly at the (0, 1, 0.5) edge point.
    let ray = Ray::new(Point::new(-1.0, 0.0, 0.5), Vector::new(1.0, 1.0, 0.0));
    let (tmin, tmax) = unit_box().clip_local_ray(&ray);

    assert_relative_eq!(tmin, 1.0);
    assert_relative_eq!(tmax, 1.0);
    assert!(unit_box().intersects_local_ray(&ray));
}

#[test]
fn backward_hit_still_counts() {
    // The box lies entirely behind the origin; the slab test is a line test.
    let ray = Ray::new(Point::new(2.0, 0.5, 0.5), Vector::new(1.0, 0.0, 0.0));
    let (tmin, tmax) = unit_box().clip_local_ray(&ray);

    assert!(tmax < 0.0);
    assert!(tmin <= tmax);
    assert!(unit_box().intersects_local_ray(&ray));
}

#[test]
fn diagonal_miss() {
    let ray = Ray::new(Point::new(-1.0, -1.0, -1.0), Vector::new(1.0, -1.0, 1.0));
    assert!(!unit_box().intersects_local_ray(&ray));
}

#[test]
fn unnormalized_direction_scales_the_parameters() {
    let ray = Ray::new(Point::new(-1.0, 0.5, 0.5), Vector::new(2.0, 0.0, 0.0));
    let (tmin, tmax) = unit_box().clip_local_ray(&ray);

    assert_relative_eq!(tmin, 0.5);
    assert_relative_eq!(tmax, 1.0);
    assert_relative_eq!(ray.point_at(tmin), Point::new(0.0, 0.5, 0.5));
}
