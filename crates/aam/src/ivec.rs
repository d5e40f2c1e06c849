//! Integer vectors with exact arithmetic.
//!
//! Overflow follows the usual integer rules (panics in debug builds).

use crate::{Scalar, Vec2, Vec3, Vec4};

macro_rules! int_vec_struct {
    ($(#[$m:meta])* $V:ident, $T:ty, $($f:ident),+) => {
        $(#[$m])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #[repr(C)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $V {
            $(pub $f: $T,)+
        }
    };
}

int_vec_struct!(IVec2, i32, x, y);
int_vec_struct!(IVec3, i32, x, y, z);
int_vec_struct!(IVec4, i32, x, y, z, w);
int_vec_struct!(UVec2, u32, x, y);
int_vec_struct!(UVec3, u32, x, y, z);
int_vec_struct!(UVec4, u32, x, y, z, w);

impl_int_vec!(IVec2, Vec2, i32, 2, x, y);
impl_int_vec!(IVec3, Vec3, i32, 3, x, y, z);
impl_int_vec!(IVec4, Vec4, i32, 4, x, y, z, w);
impl_int_vec!(UVec2, Vec2, u32, 2, x, y);
impl_int_vec!(UVec3, Vec3, u32, 3, x, y, z);
impl_int_vec!(UVec4, Vec4, u32, 4, x, y, z, w);

impl_int_vec_neg!(IVec2, x, y);
impl_int_vec_neg!(IVec3, x, y, z);
impl_int_vec_neg!(IVec4, x, y, z, w);

impl IVec2 {
    /// Rotate by +90 degrees.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl IVec3 {
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}
