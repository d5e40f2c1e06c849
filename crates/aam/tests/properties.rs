//! Property-based tests for the algebraic identities of the kernel.
//!
//! Run with: cargo test -p aam --test properties

use aam::{Line3, LineSegment3, Linear, Mat3, Mat4, Quat, Ray3, Vec3};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_vec3(range: f64) -> impl Strategy<Value = Vec3<f64>> {
    prop::array::uniform3(-range..range).prop_map(|[x, y, z]| Vec3::new(x, y, z))
}

/// Vectors long enough to normalize without hitting the zero fallback.
fn arb_direction() -> impl Strategy<Value = Vec3<f64>> {
    arb_vec3(10.0).prop_filter("non-degenerate direction", |v| v.norm() > 1e-3)
}

fn arb_unit_quat() -> impl Strategy<Value = Quat<f64>> {
    (arb_direction(), -6.0..6.0f64).prop_map(|(axis, angle)| Quat::from_axis_angle(axis, angle))
}

fn arb_mat3() -> impl Strategy<Value = Mat3<f64>> {
    prop::array::uniform9(-10.0..10.0f64).prop_map(|m| {
        Mat3::new(m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8])
    })
}

/// Affine-free 4x4 matrices with a well-conditioned determinant.
fn arb_invertible_mat4() -> impl Strategy<Value = Mat4<f64>> {
    prop::array::uniform16(-10.0..10.0f64)
        .prop_map(|m| {
            Mat4::new(
                m[0], m[1], m[2], m[3],
                m[4], m[5], m[6], m[7],
                m[8], m[9], m[10], m[11],
                m[12], m[13], m[14], m[15],
            )
        })
        .prop_filter("well-conditioned", |m| m.determinant().abs() > 1.0)
}

// =============================================================================
// Vectors
// =============================================================================

proptest! {
    #[test]
    fn normalize_gives_unit_length(v in arb_direction()) {
        prop_assert!((v.normalize().norm() - 1.0).abs() < 1e-9);
        prop_assert!(v.normalize().is_unit());
    }

    #[test]
    fn cross_is_anticommutative(a in arb_vec3(100.0), b in arb_vec3(100.0)) {
        prop_assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn dot_is_symmetric(a in arb_vec3(100.0), b in arb_vec3(100.0)) {
        prop_assert_eq!(a.dot(b), b.dot(a));
    }
}

// =============================================================================
// Quaternions
// =============================================================================

proptest! {
    #[test]
    fn rotation_preserves_length(q in arb_unit_quat(), v in arb_vec3(100.0)) {
        let r = q.rotate(v);
        prop_assert!((r.norm() - v.norm()).abs() < 1e-9 * (1.0 + v.norm()));
    }

    #[test]
    fn conjugate_undoes_rotation(q in arb_unit_quat(), v in arb_vec3(100.0)) {
        prop_assert_eq!(q.conjugate().rotate(q.rotate(v)), v);
    }

    #[test]
    fn quat_matrix_roundtrip(q in arb_unit_quat()) {
        let m = Mat3::from_quat(q);
        let back = m.to_quat();
        // q and -q are the same rotation
        prop_assert!(back == q || back == -q);
        prop_assert_eq!(back.to_mat3(), m);
    }

    #[test]
    fn slerp_hits_endpoints(a in arb_unit_quat(), b in arb_unit_quat()) {
        prop_assert_eq!(a.slerp(&b, 0.0), a);
        prop_assert_eq!(a.slerp(&b, 1.0), b);
        let mid = a.slerp(&b, 0.5);
        prop_assert!((mid.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn slerp_to_negation_stays_unit(a in arb_unit_quat(), t in 0.0..1.0f64) {
        let b = -a;
        prop_assert_eq!(a.slerp(&b, 0.0), a);
        prop_assert_eq!(a.slerp(&b, 1.0), b);
        prop_assert!((a.slerp(&b, t).norm() - 1.0).abs() < 1e-9);
        prop_assert!((a.approx_slerp(&b, t).norm() - 1.0).abs() < 1e-9);
    }
}

// =============================================================================
// Matrices
// =============================================================================

proptest! {
    #[test]
    fn mat3_inverse_properties(m in arb_mat3()) {
        prop_assume!(m.determinant().abs() > 1.0);
        let inv = m.inverse();
        prop_assert!((m * inv).approx_eq_eps(&Mat3::identity(), 1e-8));
        prop_assert!(inv.inverse().approx_eq_eps(&m, 1e-8));
    }

    #[test]
    fn mat4_inverse_properties(m in arb_invertible_mat4()) {
        let inv = m.inverse();
        prop_assert!((m * inv).approx_eq_eps(&Mat4::identity(), 1e-8));
        prop_assert!((inv * m).approx_eq_eps(&Mat4::identity(), 1e-8));
        prop_assert!(inv.inverse().approx_eq_eps(&m, 1e-8));
    }

    #[test]
    fn axis_angle_near_half_turn(axis in arb_direction(), gap in 1e-6..1e-3f64) {
        let axis = axis.normalize();
        let angle = core::f64::consts::PI - gap;
        let m = Mat3::rotation_axis(axis, angle);
        let (a, out) = m.to_axis_angle();
        prop_assert!((out - angle).abs() < 1e-8);
        prop_assert!(a.approx_eq_eps(axis, 1e-6));
        prop_assert!(Mat3::rotation_axis(a, out).approx_eq_eps(&m, 1e-8));
    }

    #[test]
    fn euler_roundtrip(x in -3.0..3.0f64, y in -1.5..1.5f64, z in -3.0..3.0f64) {
        let m = Mat3::from_euler(x, y, z);
        let (ex, ey, ez) = m.to_euler();
        prop_assert!(Mat3::from_euler(ex, ey, ez).approx_eq_eps(&m, 1e-9));
    }
}

// =============================================================================
// Collision
// =============================================================================

proptest! {
    #[test]
    fn parallel_lines_stay_finite(
        o1 in arb_vec3(50.0),
        o2 in arb_vec3(50.0),
        d in arb_direction(),
        k in prop_oneof![-5.0..-0.1f64, 0.1..5.0f64],
    ) {
        let a = Line3::new(o1, d);
        let b = Line3::new(o2, d * k);
        let (pa, pb) = a.closest_points(&b);
        for c in [pa.x, pa.y, pa.z, pb.x, pb.y, pb.z] {
            prop_assert!(c.is_finite());
        }
        // Closest points on parallel lines differ only across the direction
        prop_assert!((pb - pa).dot(d).abs() < 1e-6 * (1.0 + (o1 - o2).norm()) * d.norm());

        let sa = LineSegment3::new(o1, d);
        let sb = Ray3::new(o2, d * k);
        let (qa, qb) = sa.closest_points(&sb);
        for c in [qa.x, qa.y, qa.z, qb.x, qb.y, qb.z] {
            prop_assert!(c.is_finite());
        }
    }

    #[test]
    fn segment_distance_is_symmetric(
        a0 in arb_vec3(10.0), a1 in arb_vec3(10.0),
        b0 in arb_vec3(10.0), b1 in arb_vec3(10.0),
    ) {
        let a = LineSegment3::from_endpoints(a0, a1);
        let b = LineSegment3::from_endpoints(b0, b1);
        let ab = a.distance_sq_to(&b);
        let ba = b.distance_sq_to(&a);
        prop_assert!((ab - ba).abs() < 1e-6 * (1.0 + ab));
        // Never farther than the closest endpoint pair
        let ends = [a0.distance_sq(b0), a0.distance_sq(b1), a1.distance_sq(b0), a1.distance_sq(b1)];
        let min_end = ends.iter().cloned().fold(f64::INFINITY, f64::min);
        prop_assert!(ab <= min_end + 1e-9);
    }
}
