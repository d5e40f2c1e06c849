use super::{Aabb, Sphere};
use crate::{Scalar, Transform, Vec3};

/// Plane `normal · p + offset = 0` with a unit normal.
///
/// `offset` is the signed distance from the plane to the origin measured
/// along the normal, so `test_point` returns signed distances directly.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane<S> {
    pub normal: Vec3<S>,
    pub offset: S,
}

impl<S: Scalar> Plane<S> {
    /// Plane from a unit normal and offset.
    #[inline]
    pub fn new(normal: Vec3<S>, offset: S) -> Self {
        debug_assert!(normal.is_unit(), "plane normal must be unit length");
        Self { normal, offset }
    }

    /// Plane `a x + b y + c z + d = 0`, rescaled to a unit normal.
    pub fn from_coefficients(a: S, b: S, c: S, d: S) -> Self {
        let len_sq = a * a + b * b + c * c;
        if len_sq.approx_zero() {
            tracing::warn!("plane coefficients have no normal, using the Y-up plane");
            return Self::default();
        }
        let recip = len_sq.inv_sqrt();
        Self { normal: Vec3::new(a, b, c) * recip, offset: d * recip }
    }

    /// Plane through three points, facing the side from which `a, b, c`
    /// appear counter-clockwise. Collinear points fall back to the Y-up
    /// plane through the origin.
    pub fn from_points(a: Vec3<S>, b: Vec3<S>, c: Vec3<S>) -> Self {
        let w = (b - a).cross(c - a);
        let len_sq = w.norm_sq();
        if len_sq.approx_zero() {
            tracing::warn!("collinear plane points, using the Y-up plane");
            return Self::default();
        }
        let normal = w * len_sq.inv_sqrt();
        Self { normal, offset: -normal.dot(a) }
    }

    /// Signed distance: positive on the side the normal points to.
    #[inline]
    pub fn test_point(&self, p: Vec3<S>) -> S {
        self.normal.dot(p) + self.offset
    }

    #[inline]
    pub fn closest_point(&self, p: Vec3<S>) -> Vec3<S> {
        p - self.normal * self.test_point(p)
    }

    /// Signed gap between the plane and the sphere surface, zero when they
    /// touch or overlap.
    pub fn test_sphere(&self, sphere: &Sphere<S>) -> S {
        let dist = self.test_point(sphere.center);
        if dist > sphere.radius {
            dist - sphere.radius
        } else if dist < -sphere.radius {
            dist + sphere.radius
        } else {
            S::ZERO
        }
    }

    /// Signed gap between the plane and the box, zero when the box straddles
    /// the plane.
    pub fn test_aabb(&self, aabb: &Aabb<S>) -> S {
        // Box corners least and most far along the normal
        let mut near = aabb.min;
        let mut far = aabb.max;
        for i in 0..3 {
            if self.normal[i] < S::ZERO {
                near[i] = aabb.max[i];
                far[i] = aabb.min[i];
            }
        }

        let test = self.test_point(near);
        if test >= S::ZERO {
            return test;
        }
        let test = self.test_point(far);
        if test >= S::ZERO {
            return S::ZERO;
        }
        test
    }

    /// The plane carried by `x' = scale * (rotation * x) + translation`.
    pub fn transform(&self, xf: &Transform<S>) -> Self {
        let normal = xf.rotation.rotate(self.normal);
        Self {
            normal,
            offset: self.offset * xf.scale - normal.dot(xf.translation),
        }
    }
}

/// The Y-up plane through the origin.
impl<S: Scalar> Default for Plane<S> {
    fn default() -> Self {
        Self { normal: Vec3::y(), offset: S::ZERO }
    }
}
