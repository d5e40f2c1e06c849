//! Walk through the kernel: build a camera, move a few primitives around and
//! run the collision queries on them.
//!
//! Run with: RUST_LOG=debug cargo run -p aam --example tour

use aam::{
    Aabb, IVec3, Line3, LineSegment3, Linear, Mat3, Mat4, Plane, Precision, Quat, Ray3, Sphere,
    Transform, Vec3, Vec4,
};
use tracing::{debug, info};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Vectors
    let a = Vec3::new(1.0_f32, 0.0, 0.0);
    let b = Vec3::new(0.0, 1.0, 0.0);
    info!(cross = %a.cross(b), dot = a.dot(Vec3::new(1.0, 1.0, 0.0).normalize()), "vectors");
    let fast = Vec3::new(3.0_f32, 4.0, 0.0).normalize_with(Precision::Approximate);
    debug!(exact = %Vec3::new(3.0_f32, 4.0, 0.0).normalize(), approx = %fast, "precision modes");
    let cell = IVec3::new(2, -1, 5);
    info!(cell = %cell, as_float = %cell.as_float::<f32>(), "integer grid cell");

    // Camera
    let eye = Vec3::new(0.0_f64, 2.0, 8.0);
    let view = Mat4::look_at_rh(eye, Vec3::zero(), Vec3::y());
    let proj = Mat4::perspective_rh(60.0, 16.0 / 9.0, 0.1, 100.0);
    let clip = proj * view * Vec4::new(0.0, 0.0, 0.0, 1.0);
    info!(ndc = %clip.project(), "origin in normalized device coordinates");

    // Rotations: matrix, Euler angles and quaternion agree
    let m = Mat3::from_euler(0.3_f64, -0.7, 1.1);
    let (x, y, z) = m.to_euler();
    let (axis, angle) = m.to_axis_angle();
    let q = m.to_quat();
    info!(x, y, z, angle, axis = %axis, quat = %q, "decomposed rotation");
    let halfway = Quat::identity().slerp(&q, 0.5);
    debug!(slerp = %halfway, approx = %Quat::identity().approx_slerp(&q, 0.5), "halfway rotation");

    // Singular matrices fall back to identity with a warning
    let flat = Mat3::from_scale(Vec3::new(1.0_f64, 0.0, 1.0));
    info!(inverse_is_identity = flat.inverse() == Mat3::identity(), "singular inverse");

    // Collision
    let ray = Ray3::new(Vec3::new(0.0_f64, 0.0, -5.0), Vec3::z());
    let sphere = Sphere::new(Vec3::zero(), 1.0);
    info!(hit = sphere.intersects_ray(&ray), "ray against unit sphere");

    let points = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-1.0, 0.0, 5.0),
    ];
    if let (Some(bounds), Some(ball)) = (Aabb::from_points(&points), Sphere::bounding(&points)) {
        info!(min = %bounds.min, max = %bounds.max, hit = bounds.intersects_ray(&ray), "point-set box");
        info!(center = %ball.center, radius = ball.radius, "point-set sphere");
    }

    let ground = Plane::from_points(Vec3::zero(), Vec3::z(), Vec3::x());
    let xf = Transform::new(2.0, Quat::from_axis_angle(Vec3::x(), 0.25), Vec3::new(0.0, 1.0, 0.0));
    let moved = ground.transform(&xf);
    info!(
        normal = %moved.normal,
        offset = moved.offset,
        sphere_gap = moved.test_sphere(&Sphere::new(Vec3::new(0.0, 5.0, 0.0), 1.0)),
        "transformed ground plane"
    );

    let rail = LineSegment3::from_endpoints(Vec3::new(-1.0, 3.0, 0.0), Vec3::new(1.0, 3.0, 0.0));
    let axis_line = Line3::new(Vec3::zero(), Vec3::z());
    let (on_rail, on_axis) = rail.closest_points(&axis_line);
    info!(on_rail = %on_rail, on_axis = %on_axis, dist_sq = rail.distance_sq_to(&axis_line), "segment against line");
}
