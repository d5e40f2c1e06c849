//! Worked examples through the public API.

use aam::{Aabb, Mat4, Precision, Ray3, Scalar, Sphere, Vec3, Vec4};

#[test]
fn sqrt_and_inverse_sqrt() {
    assert!((Scalar::sqrt(9.0_f32) - 3.0).abs() < 1e-5);
    assert!((Scalar::inv_sqrt(9.0_f32) - 0.3333).abs() < 1e-4);
    // The bit-trick path is close but not exact
    assert!((Precision::Approximate.sqrt(9.0_f32) - 3.0).abs() < 1e-2);
    assert!((Precision::Approximate.inv_sqrt(9.0_f32) - 0.3333).abs() < 1e-3);
}

#[test]
fn cross_of_unit_axes() {
    let z = Vec3::new(1.0, 0.0, 0.0).cross(Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(z, Vec3::new(0.0_f32, 0.0, 1.0));
    assert_eq!((z.x, z.y, z.z), (0.0, 0.0, 1.0));
}

#[test]
fn dot_with_normalized_diagonal() {
    let d = Vec3::new(1.0_f32, 0.0, 0.0).dot(Vec3::new(1.0, 1.0, 0.0).normalize());
    assert!((d - 0.7071).abs() < 1e-4);
}

#[test]
fn identity_leaves_vectors_unchanged() {
    let id = Mat4::<f64>::identity();
    for v in [
        Vec4::new(1.0, 2.0, 3.0, 4.0),
        Vec4::new(-7.5, 0.0, 1e6, -1e-6),
        Vec4::zero(),
    ] {
        let out = id * v;
        assert_eq!((out.x, out.y, out.z, out.w), (v.x, v.y, v.z, v.w));
    }
}

#[test]
fn aabb_from_point_set() {
    let points = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-1.0, 0.0, 5.0),
    ];
    let b = Aabb::from_points(&points).unwrap();
    assert_eq!(b.min, Vec3::new(-1.0_f64, 0.0, 0.0));
    assert_eq!(b.max, Vec3::new(1.0, 2.0, 5.0));
}

#[test]
fn ray_hits_unit_sphere() {
    let ray = Ray3::new(Vec3::new(0.0_f64, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
    let sphere = Sphere::new(Vec3::zero(), 1.0);
    assert!(sphere.intersects_ray(&ray));
    // And the slab test agrees on the sphere's bounding box
    let bounds = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    assert!(bounds.intersects_ray(&ray));
}
