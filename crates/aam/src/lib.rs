//! aam: small 3D math kernel for real-time engines
//!
//! Vectors, 3x3/4x4 matrices, quaternions, similarity transforms and the
//! collision primitives built on them (lines, rays, segments, planes,
//! spheres, boxes). Every float type is generic over [`Scalar`] (`f32` and
//! `f64`); integer vectors are concrete `i32`/`u32` types.
//!
//! # Conventions
//! - Column vectors, `M * v`; matrices store columns (`c0, c1, ...`) while
//!   `new` takes entries in row-major reading order
//! - Right-handed by default, `_lh` variants where handedness matters;
//!   clip-space depth in `[-1, 1]`
//! - `T * R * S` composition; Euler angles are `Rx * Ry * Rz`
//! - `==` on float types is a relative-epsilon comparison (`1e-6`)
//! - Degenerate input produces a documented fallback, never a panic
//! - `#[repr(C)]` everywhere for GPU interop

#![no_std]

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

#[macro_use]
mod macros;

mod scalar;
mod vec2;
mod vec3;
mod vec4;
mod ivec;
mod mat3;
mod mat4;
mod quat;
mod transform;
pub mod collision;

pub use scalar::{Precision, Scalar};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use ivec::{IVec2, IVec3, IVec4, UVec2, UVec3, UVec4};
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use transform::Transform;
pub use collision::{Aabb, Line3, LineSegment3, Linear, Plane, Ray3, Sphere};

/// Cross-product matrix `[v]×` such that `[v]× w = v × w`
pub fn skew<S: Scalar>(v: &Vec3<S>) -> Mat3<S> {
    Mat3::new(
        S::ZERO, -v.z,    v.y,
        v.z,     S::ZERO, -v.x,
        -v.y,    v.x,     S::ZERO,
    )
}

// Bytemuck impls for concrete f32/f64 types (generic structs can't derive Pod)
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($($t:ty),+ $(,)?) => {
            $(
                // SAFETY: All fields share one primitive type, #[repr(C)], no padding
                unsafe impl bytemuck::Zeroable for $t {}
                unsafe impl bytemuck::Pod for $t {}
            )+
        };
    }

    impl_pod!(Vec2<f32>, Vec2<f64>, Vec3<f32>, Vec3<f64>, Vec4<f32>, Vec4<f64>);
    impl_pod!(IVec2, IVec3, IVec4, UVec2, UVec3, UVec4);
    impl_pod!(Mat3<f32>, Mat3<f64>, Mat4<f32>, Mat4<f64>);
    impl_pod!(Quat<f32>, Quat<f64>, Transform<f32>, Transform<f64>);
    impl_pod!(Line3<f32>, Line3<f64>, Ray3<f32>, Ray3<f64>);
    impl_pod!(LineSegment3<f32>, LineSegment3<f64>);
    impl_pod!(Plane<f32>, Plane<f64>, Sphere<f32>, Sphere<f64>, Aabb<f32>, Aabb<f64>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skew_cross_product() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let w = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(skew(&v) * w, v.cross(w));
    }

    #[test]
    fn skew_antisymmetric() {
        let s = skew(&Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(s + s.transpose(), Mat3::zero());
    }

    #[test]
    fn generic_over_precision() {
        fn rotate_x<S: Scalar>() -> Vec3<S> {
            Quat::from_axis_angle(Vec3::z(), S::FRAC_PI_2).rotate(Vec3::x())
        }
        assert_eq!(rotate_x::<f32>(), Vec3::y());
        assert_eq!(rotate_x::<f64>(), Vec3::y());
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn pod_casts() {
        let m = Mat4::<f32>::identity();
        let floats: &[f32] = bytemuck::cast_slice(core::slice::from_ref(&m));
        assert_eq!(floats.len(), 16);
        assert_eq!(floats[0], 1.0);
        assert_eq!(floats[1], 0.0);

        let cells = [IVec3::new(1, 2, 3), IVec3::new(-4, 5, -6)];
        let ints: &[i32] = bytemuck::cast_slice(&cells);
        assert_eq!(ints, &[1, 2, 3, -4, 5, -6]);
    }
}
