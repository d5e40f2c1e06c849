use crate::{Precision, Scalar, Vec3};

#[derive(Clone, Copy, Debug)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

impl_float_vec!(Vec4, 4, x, y, z, w);

impl<S: Scalar> Vec4<S> {
    #[inline]
    pub fn x() -> Self { Self::new(S::ONE, S::ZERO, S::ZERO, S::ZERO) }

    #[inline]
    pub fn y() -> Self { Self::new(S::ZERO, S::ONE, S::ZERO, S::ZERO) }

    #[inline]
    pub fn z() -> Self { Self::new(S::ZERO, S::ZERO, S::ONE, S::ZERO) }

    #[inline]
    pub fn w() -> Self { Self::new(S::ZERO, S::ZERO, S::ZERO, S::ONE) }

    /// Cross product of the xyz parts; `w` of the result is zero.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        self.truncate().cross(rhs.truncate()).extend(S::ZERO)
    }

    /// Truncate to Vec3 (drop w)
    #[inline]
    pub fn truncate(self) -> Vec3<S> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Perspective divide: xyz / w
    #[inline]
    pub fn project(self) -> Vec3<S> {
        let inv_w = self.w.recip();
        Vec3::new(self.x * inv_w, self.y * inv_w, self.z * inv_w)
    }

    #[inline]
    pub fn r(&self) -> S { self.x }
    #[inline]
    pub fn g(&self) -> S { self.y }
    #[inline]
    pub fn b(&self) -> S { self.z }
    #[inline]
    pub fn a(&self) -> S { self.w }
}
