use crate::{Precision, Scalar, Vec4};

#[derive(Clone, Copy, Debug)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl_float_vec!(Vec3, 3, x, y, z);

impl<S: Scalar> Vec3<S> {
    #[inline]
    pub fn x() -> Self { Self::new(S::ONE, S::ZERO, S::ZERO) }

    #[inline]
    pub fn y() -> Self { Self::new(S::ZERO, S::ONE, S::ZERO) }

    #[inline]
    pub fn z() -> Self { Self::new(S::ZERO, S::ZERO, S::ONE) }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Scalar triple product `self · (b × c)`, the signed volume of the
    /// parallelepiped spanned by the three vectors.
    #[inline]
    pub fn triple(self, b: Self, c: Self) -> S {
        self.dot(b.cross(c))
    }

    /// Vector triple product `(b × c) × self`.
    #[inline]
    pub fn vector_triple(self, b: Self, c: Self) -> Self {
        b.cross(c).cross(self)
    }

    /// Extend to Vec4 with a given w component
    #[inline]
    pub fn extend(self, w: S) -> Vec4<S> {
        Vec4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub fn min_element(self) -> S {
        self.x.min(self.y.min(self.z))
    }

    #[inline]
    pub fn max_element(self) -> S {
        self.x.max(self.y.max(self.z))
    }

    #[inline]
    pub fn r(&self) -> S { self.x }
    #[inline]
    pub fn g(&self) -> S { self.y }
    #[inline]
    pub fn b(&self) -> S { self.z }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(b.dot(a), 32.0);
    }

    #[test]
    fn cross_product() {
        let x = Vec3::<f64>::x();
        let y = Vec3::<f64>::y();
        let z = x.cross(y);
        assert_eq!(z, Vec3::z());
        // Anti-commutative
        assert_eq!(y.cross(x), -z);
        assert_eq!(Vec3::<f64>::y().cross(Vec3::z()), Vec3::x());
        assert_eq!(Vec3::<f64>::z().cross(Vec3::x()), Vec3::y());
    }

    #[test]
    fn cross_general() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.cross(b), Vec3::new(-3.0, 6.0, -3.0));
    }

    #[test]
    fn normalize() {
        let v = Vec3::new(1.0, 2.0, 2.0);
        let n = v.normalize();
        assert!((n.norm() - 1.0).abs() < 1e-10);
        assert!(n.is_unit());
        assert!(!v.is_unit());

        let mut m = v;
        m.normalize_in_place();
        assert_eq!(m, n);
    }

    #[test]
    fn approximate_normalize() {
        let v = Vec3::new(3.0_f32, -4.0, 12.0);
        let n = v.normalize_with(Precision::Approximate);
        assert!((n.norm() - 1.0).abs() < 1e-2);
    }

    #[test]
    fn try_normalize_zero() {
        assert!(Vec3::<f64>::zero().try_normalize().is_none());
        assert!(Vec3::new(0.0, 0.0, 2.0).try_normalize().is_some());
        assert!(Vec3::new(1e-8, 0.0, 0.0).is_zero());
    }

    #[test]
    fn reflect_off_floor() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let r = v.reflect(Vec3::y());
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn refract_straight_through() {
        let i = Vec3::new(0.0, -1.0, 0.0);
        let t = i.refract(Vec3::y(), 1.0 / 1.5);
        assert_eq!(t, i);
    }

    #[test]
    fn refract_total_internal_reflection() {
        // Grazing ray leaving a dense medium
        let i = Vec3::new(1.0, -0.1, 0.0).normalize();
        let t = i.refract(Vec3::y(), 1.5);
        assert!(t.is_zero());
    }

    #[test]
    fn triple_products() {
        let x = Vec3::<f64>::x();
        let y = Vec3::<f64>::y();
        let z = Vec3::<f64>::z();
        assert_eq!(x.triple(y, z), 1.0);
        assert_eq!(x.triple(z, y), -1.0);

        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-1.0, 0.5, 2.0);
        let c = Vec3::new(0.0, 4.0, -2.0);
        assert_eq!(a.vector_triple(b, c), b.cross(c).cross(a));
    }

    #[test]
    fn scalar_mul_commutative() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v * 2.0, 2.0 * v);
        let mut w = v;
        w *= 2.0;
        w /= 4.0;
        assert_eq!(w, v * 0.5);
    }

    #[test]
    fn lerp_and_hadamard() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(10.0, 10.0, 10.0);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(
            Vec3::new(1.0, 2.0, 3.0).hadamard(Vec3::new(2.0, 3.0, 4.0)),
            Vec3::new(2.0, 6.0, 12.0)
        );
    }

    #[test]
    fn component_extrema() {
        let a = Vec3::new(1.0, -5.0, 3.0);
        let b = Vec3::new(0.0, 2.0, 4.0);
        assert_eq!(a.component_min(b), Vec3::new(0.0, -5.0, 3.0));
        assert_eq!(a.component_max(b), Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(a.min_element(), -5.0);
        assert_eq!(a.max_element(), 3.0);
        assert_eq!(a.abs(), Vec3::new(1.0, 5.0, 3.0));
    }

    #[test]
    fn f32_vec3() {
        let v = Vec3::<f32>::new(1.0, 0.0, 0.0);
        assert_eq!(v.norm(), 1.0f32);
        assert_eq!(v.r(), 1.0);
    }
}
