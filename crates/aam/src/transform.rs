use crate::{Mat4, Quat, Scalar, Vec3};

/// Similarity transform: uniform scale, then rotation, then translation.
///
/// `x' = scale * (rotation * x) + translation`, the same order as the
/// `T * R * S` matrix from [`to_mat4`](Self::to_mat4). Composition and
/// inversion stay exact (no matrix inversion needed). `rotation` is expected
/// to be a unit quaternion and `scale` non-zero.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform<S> {
    pub rotation: Quat<S>,
    pub translation: Vec3<S>,
    pub scale: S,
}

impl<S: Scalar> Transform<S> {
    #[inline]
    pub fn new(scale: S, rotation: Quat<S>, translation: Vec3<S>) -> Self {
        Self { rotation, translation, scale }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(S::ONE, Quat::identity(), Vec3::zero())
    }

    #[inline]
    pub fn from_translation(t: Vec3<S>) -> Self {
        Self::new(S::ONE, Quat::identity(), t)
    }

    #[inline]
    pub fn from_rotation(r: Quat<S>) -> Self {
        Self::new(S::ONE, r, Vec3::zero())
    }

    #[inline]
    pub fn from_scale(s: S) -> Self {
        Self::new(s, Quat::identity(), Vec3::zero())
    }

    /// Transform a point: s * (R * p) + t
    #[inline]
    pub fn apply_point(&self, p: Vec3<S>) -> Vec3<S> {
        self.apply_vec(p) + self.translation
    }

    /// Transform a vector: s * (R * v), no translation
    #[inline]
    pub fn apply_vec(&self, v: Vec3<S>) -> Vec3<S> {
        self.rotation.rotate(v) * self.scale
    }

    /// Compose: self then other (other applied first, then self)
    /// Result: (s1 * s2, R1 * R2, s1 * R1 * t2 + t1)
    #[inline]
    pub fn compose(&self, other: &Transform<S>) -> Transform<S> {
        Transform {
            rotation: self.rotation * other.rotation,
            translation: self.apply_point(other.translation),
            scale: self.scale * other.scale,
        }
    }

    /// Exact inverse: (1/s, R^-1, -(R^-1 * t) / s)
    #[inline]
    pub fn inverse(&self) -> Transform<S> {
        let inv_scale = self.scale.recip();
        let inv_rot = self.rotation.conjugate();
        Transform {
            rotation: inv_rot,
            translation: -inv_rot.rotate(self.translation) * inv_scale,
            scale: inv_scale,
        }
    }

    /// Convert to a 4x4 homogeneous matrix, `T * R * S`
    #[inline]
    pub fn to_mat4(&self) -> Mat4<S> {
        Mat4::from_translation(self.translation)
            * self.rotation.to_mat4()
            * Mat4::from_uniform_scale(self.scale)
    }
}

impl<S: Scalar> Default for Transform<S> {
    fn default() -> Self { Self::identity() }
}

impl<S: Scalar> PartialEq for Transform<S> {
    fn eq(&self, other: &Self) -> bool {
        self.scale.approx_eq(other.scale)
            && self.rotation == other.rotation
            && self.translation == other.translation
    }
}
