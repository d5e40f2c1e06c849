use crate::{Precision, Scalar};

#[derive(Clone, Copy, Debug)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<S> {
    pub x: S,
    pub y: S,
}

impl_float_vec!(Vec2, 2, x, y);

impl<S: Scalar> Vec2<S> {
    #[inline]
    pub fn x() -> Self { Self::new(S::ONE, S::ZERO) }

    #[inline]
    pub fn y() -> Self { Self::new(S::ZERO, S::ONE) }

    /// 2D cross product (returns scalar = signed area of parallelogram).
    #[inline]
    pub fn cross(self, rhs: Self) -> S {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Rotate by +90 degrees.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Extend to Vec3 with a given z component
    #[inline]
    pub fn extend(self, z: S) -> crate::Vec3<S> {
        crate::Vec3::new(self.x, self.y, z)
    }
}
