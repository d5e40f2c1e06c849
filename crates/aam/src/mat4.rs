use crate::{Mat3, Quat, Scalar, Vec3, Vec4};
use core::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

/// 4x4 matrix, column-major storage.
///
/// Used for homogeneous transforms (affine: rotation + translation + scale)
/// and for projections. Translation lives in the last column, `M * v` with
/// column vectors, and `T * R * S` scales first and translates last.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4<S> {
    pub c0: Vec4<S>,
    pub c1: Vec4<S>,
    pub c2: Vec4<S>,
    pub c3: Vec4<S>,
}

impl<S: Scalar> Mat4<S> {
    /// Construct from elements in row-major argument order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: S, m01: S, m02: S, m03: S,
        m10: S, m11: S, m12: S, m13: S,
        m20: S, m21: S, m22: S, m23: S,
        m30: S, m31: S, m32: S, m33: S,
    ) -> Self {
        Self {
            c0: Vec4::new(m00, m10, m20, m30),
            c1: Vec4::new(m01, m11, m21, m31),
            c2: Vec4::new(m02, m12, m22, m32),
            c3: Vec4::new(m03, m13, m23, m33),
        }
    }

    #[inline]
    pub fn from_cols(c0: Vec4<S>, c1: Vec4<S>, c2: Vec4<S>, c3: Vec4<S>) -> Self {
        Self { c0, c1, c2, c3 }
    }

    #[inline]
    pub fn from_rows(r0: Vec4<S>, r1: Vec4<S>, r2: Vec4<S>, r3: Vec4<S>) -> Self {
        Self::from_cols(r0, r1, r2, r3).transpose()
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_cols(Vec4::zero(), Vec4::zero(), Vec4::zero(), Vec4::zero())
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_cols(Vec4::x(), Vec4::y(), Vec4::z(), Vec4::w())
    }

    /// Embed a 3x3 linear part; no translation.
    #[inline]
    pub fn from_mat3(m: Mat3<S>) -> Self {
        Self::from_rotation_translation(m, Vec3::zero())
    }

    /// Build from rotation (3x3) and translation
    pub fn from_rotation_translation(rot: Mat3<S>, trans: Vec3<S>) -> Self {
        Self::from_cols(
            rot.c0.extend(S::ZERO),
            rot.c1.extend(S::ZERO),
            rot.c2.extend(S::ZERO),
            trans.extend(S::ONE),
        )
    }

    /// Translation matrix
    pub fn translation(dx: S, dy: S, dz: S) -> Self {
        Self::from_translation(Vec3::new(dx, dy, dz))
    }

    #[inline]
    pub fn from_translation(t: Vec3<S>) -> Self {
        Self::from_rotation_translation(Mat3::identity(), t)
    }

    /// Non-uniform scale matrix
    #[inline]
    pub fn from_scale(s: Vec3<S>) -> Self {
        Self::from_mat3(Mat3::from_scale(s))
    }

    #[inline]
    pub fn from_uniform_scale(s: S) -> Self {
        Self::from_mat3(Mat3::from_uniform_scale(s))
    }

    /// Rotation about X axis
    pub fn rotation_x(angle: S) -> Self {
        Self::from_mat3(Mat3::rotation_x(angle))
    }

    /// Rotation about Y axis
    pub fn rotation_y(angle: S) -> Self {
        Self::from_mat3(Mat3::rotation_y(angle))
    }

    /// Rotation about Z axis
    pub fn rotation_z(angle: S) -> Self {
        Self::from_mat3(Mat3::rotation_z(angle))
    }

    /// Rotation about arbitrary axis (Rodrigues' formula)
    pub fn rotation_axis(axis: Vec3<S>, angle: S) -> Self {
        Self::from_mat3(Mat3::rotation_axis(axis, angle))
    }

    /// See [`Mat3::from_euler`].
    pub fn from_euler(x: S, y: S, z: S) -> Self {
        Self::from_mat3(Mat3::from_euler(x, y, z))
    }

    pub fn from_quat(q: Quat<S>) -> Self {
        Self::from_mat3(q.to_mat3())
    }

    /// Right-handed perspective projection with OpenGL clip depth.
    ///
    /// `fovy` is the vertical field of view in degrees. Points in front of
    /// the camera have negative view-space z; `-near` maps to depth -1 and
    /// `-far` to +1.
    pub fn perspective_rh(fovy: S, aspect: S, near: S, far: S) -> Self {
        debug_assert!(near > S::ZERO && far > near, "perspective needs 0 < near < far");
        let f = (fovy.to_radians() * S::HALF).tan().recip();
        let range = near - far;
        Self::new(
            f / aspect, S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, f, S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, (far + near) / range, S::TWO * far * near / range,
            S::ZERO, S::ZERO, -S::ONE, S::ZERO,
        )
    }

    /// Left-handed perspective projection; the camera looks down +z.
    pub fn perspective_lh(fovy: S, aspect: S, near: S, far: S) -> Self {
        debug_assert!(near > S::ZERO && far > near, "perspective needs 0 < near < far");
        let f = (fovy.to_radians() * S::HALF).tan().recip();
        let range = far - near;
        Self::new(
            f / aspect, S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, f, S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, (far + near) / range, -S::TWO * far * near / range,
            S::ZERO, S::ZERO, S::ONE, S::ZERO,
        )
    }

    /// Right-handed orthographic projection onto the `[-1, 1]` cube.
    pub fn orthographic_rh(left: S, right: S, bottom: S, top: S, near: S, far: S) -> Self {
        Self::orthographic(left, right, bottom, top, near, far, -S::ONE)
    }

    /// Left-handed orthographic projection onto the `[-1, 1]` cube.
    pub fn orthographic_lh(left: S, right: S, bottom: S, top: S, near: S, far: S) -> Self {
        Self::orthographic(left, right, bottom, top, near, far, S::ONE)
    }

    #[allow(clippy::too_many_arguments)]
    fn orthographic(left: S, right: S, bottom: S, top: S, near: S, far: S, z_sign: S) -> Self {
        let w = right - left;
        let h = top - bottom;
        let d = far - near;
        Self::new(
            S::TWO / w, S::ZERO, S::ZERO, -(right + left) / w,
            S::ZERO, S::TWO / h, S::ZERO, -(top + bottom) / h,
            S::ZERO, S::ZERO, z_sign * S::TWO / d, -(far + near) / d,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Right-handed view matrix: the camera at `eye` looks down its local
    /// -z towards `target`.
    ///
    /// The basis is orthogonalized with Gram-Schmidt. An `up` parallel to the
    /// view direction is replaced by a world axis that is not.
    pub fn look_at_rh(eye: Vec3<S>, target: Vec3<S>, up: Vec3<S>) -> Self {
        let fwd = (target - eye).normalize();
        let side = fwd.cross(view_up(fwd, up)).normalize();
        let up = side.cross(fwd);
        Self::from_rows(
            side.extend(-side.dot(eye)),
            up.extend(-up.dot(eye)),
            (-fwd).extend(fwd.dot(eye)),
            Vec4::w(),
        )
    }

    /// Left-handed view matrix: the camera looks down its local +z.
    pub fn look_at_lh(eye: Vec3<S>, target: Vec3<S>, up: Vec3<S>) -> Self {
        let fwd = (target - eye).normalize();
        let side = view_up(fwd, up).cross(fwd).normalize();
        let up = fwd.cross(side);
        Self::from_rows(
            side.extend(-side.dot(eye)),
            up.extend(-up.dot(eye)),
            fwd.extend(-fwd.dot(eye)),
            Vec4::w(),
        )
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        self[(row, col)]
    }

    #[inline]
    pub fn col(&self, i: usize) -> Vec4<S> {
        match i {
            0 => self.c0,
            1 => self.c1,
            2 => self.c2,
            _ => self.c3,
        }
    }

    #[inline]
    pub fn row(&self, i: usize) -> Vec4<S> {
        Vec4::new(self.c0[i], self.c1[i], self.c2[i], self.c3[i])
    }

    /// Extract the upper-left 3x3 submatrix
    #[inline]
    pub fn upper_left_3x3(&self) -> Mat3<S> {
        Mat3::from_cols(
            self.c0.truncate(),
            self.c1.truncate(),
            self.c2.truncate(),
        )
    }

    /// Extract the translation column
    #[inline]
    pub fn translation_vec(&self) -> Vec3<S> {
        self.c3.truncate()
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    #[inline]
    pub fn transpose_in_place(&mut self) {
        *self = self.transpose();
    }

    /// Matrix-Vec4 product
    #[inline]
    pub fn mul_vec4(&self, v: Vec4<S>) -> Vec4<S> {
        self.c0 * v.x + self.c1 * v.y + self.c2 * v.z + self.c3 * v.w
    }

    /// Transform a point (w=1, includes translation)
    #[inline]
    pub fn transform_point(&self, p: Vec3<S>) -> Vec3<S> {
        self.mul_vec4(p.extend(S::ONE)).truncate()
    }

    /// Transform a vector (w=0, ignores translation)
    #[inline]
    pub fn transform_vec(&self, v: Vec3<S>) -> Vec3<S> {
        self.mul_vec4(v.extend(S::ZERO)).truncate()
    }

    /// Matrix-matrix product
    pub fn mul_mat(&self, rhs: &Mat4<S>) -> Mat4<S> {
        Mat4::from_cols(
            self.mul_vec4(rhs.c0),
            self.mul_vec4(rhs.c1),
            self.mul_vec4(rhs.c2),
            self.mul_vec4(rhs.c3),
        )
    }

    #[inline]
    pub fn hadamard(&self, rhs: &Mat4<S>) -> Mat4<S> {
        Mat4::from_cols(
            self.c0.hadamard(rhs.c0),
            self.c1.hadamard(rhs.c1),
            self.c2.hadamard(rhs.c2),
            self.c3.hadamard(rhs.c3),
        )
    }

    #[inline]
    pub fn approx_eq_eps(&self, other: &Self, eps: S) -> bool {
        self.c0.approx_eq_eps(other.c0, eps)
            && self.c1.approx_eq_eps(other.c1, eps)
            && self.c2.approx_eq_eps(other.c2, eps)
            && self.c3.approx_eq_eps(other.c3, eps)
    }

    pub fn determinant(&self) -> S {
        self.adjoint_det().1
    }

    /// Transposed cofactor matrix.
    pub fn adjoint(&self) -> Self {
        self.adjoint_det().0
    }

    /// Full cofactor inverse, or `None` when the determinant is within
    /// epsilon of zero.
    pub fn try_inverse(&self) -> Option<Self> {
        let (adj, det) = self.adjoint_det();
        if det.approx_zero() {
            return None;
        }
        Some(adj * det.recip())
    }

    /// Inverse, falling back to the identity for singular matrices.
    pub fn inverse(&self) -> Self {
        match self.try_inverse() {
            Some(inv) => inv,
            None => {
                tracing::warn!(
                    det = self.determinant().to_f64(),
                    "singular 4x4 matrix, returning identity"
                );
                Self::identity()
            }
        }
    }

    // Cofactors from the 2x2 minors of the top and bottom row pairs.
    fn adjoint_det(&self) -> (Self, S) {
        let m = |r, c| self.get(r, c);

        let s0 = m(0,0) * m(1,1) - m(1,0) * m(0,1);
        let s1 = m(0,0) * m(1,2) - m(1,0) * m(0,2);
        let s2 = m(0,0) * m(1,3) - m(1,0) * m(0,3);
        let s3 = m(0,1) * m(1,2) - m(1,1) * m(0,2);
        let s4 = m(0,1) * m(1,3) - m(1,1) * m(0,3);
        let s5 = m(0,2) * m(1,3) - m(1,2) * m(0,3);

        let c5 = m(2,2) * m(3,3) - m(3,2) * m(2,3);
        let c4 = m(2,1) * m(3,3) - m(3,1) * m(2,3);
        let c3 = m(2,1) * m(3,2) - m(3,1) * m(2,2);
        let c2 = m(2,0) * m(3,3) - m(3,0) * m(2,3);
        let c1 = m(2,0) * m(3,2) - m(3,0) * m(2,2);
        let c0 = m(2,0) * m(3,1) - m(3,0) * m(2,1);

        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;

        let adj = Self::new(
             m(1,1) * c5 - m(1,2) * c4 + m(1,3) * c3,
            -m(0,1) * c5 + m(0,2) * c4 - m(0,3) * c3,
             m(3,1) * s5 - m(3,2) * s4 + m(3,3) * s3,
            -m(2,1) * s5 + m(2,2) * s4 - m(2,3) * s3,
            -m(1,0) * c5 + m(1,2) * c2 - m(1,3) * c1,
             m(0,0) * c5 - m(0,2) * c2 + m(0,3) * c1,
            -m(3,0) * s5 + m(3,2) * s2 - m(3,3) * s1,
             m(2,0) * s5 - m(2,2) * s2 + m(2,3) * s1,
             m(1,0) * c4 - m(1,1) * c2 + m(1,3) * c0,
            -m(0,0) * c4 + m(0,1) * c2 - m(0,3) * c0,
             m(3,0) * s4 - m(3,1) * s2 + m(3,3) * s0,
            -m(2,0) * s4 + m(2,1) * s2 - m(2,3) * s0,
            -m(1,0) * c3 + m(1,1) * c1 - m(1,2) * c0,
             m(0,0) * c3 - m(0,1) * c1 + m(0,2) * c0,
            -m(3,0) * s3 + m(3,1) * s1 - m(3,2) * s0,
             m(2,0) * s3 - m(2,1) * s1 + m(2,2) * s0,
        );
        (adj, det)
    }

    /// Euler angles of the upper 3x3, see [`Mat3::to_euler`].
    pub fn to_euler(&self) -> (S, S, S) {
        self.upper_left_3x3().to_euler()
    }

    /// Axis and angle of the upper 3x3, see [`Mat3::to_axis_angle`].
    pub fn to_axis_angle(&self) -> (Vec3<S>, S) {
        self.upper_left_3x3().to_axis_angle()
    }

    pub fn to_quat(&self) -> Quat<S> {
        Quat::from_mat3(&self.upper_left_3x3())
    }
}

// Up vector for a view basis, swapped for a world axis when the requested
// one is parallel to the view direction.
fn view_up<S: Scalar>(fwd: Vec3<S>, up: Vec3<S>) -> Vec3<S> {
    if !fwd.cross(up).norm_sq().approx_zero() {
        return up;
    }
    let a = fwd.abs();
    if a.x <= a.y && a.x <= a.z {
        Vec3::x()
    } else if a.y <= a.z {
        Vec3::y()
    } else {
        Vec3::z()
    }
}

impl<S: Scalar> Index<(usize, usize)> for Mat4<S> {
    type Output = S;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &S {
        match col {
            0 => &self.c0[row],
            1 => &self.c1[row],
            2 => &self.c2[row],
            3 => &self.c3[row],
            _ => panic!("column {} out of range for Mat4", col),
        }
    }
}

impl<S: Scalar> Default for Mat4<S> {
    fn default() -> Self { Self::identity() }
}

impl<S: Scalar> PartialEq for Mat4<S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, S::EPSILON)
    }
}

impl<S: Scalar> Add for Mat4<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2, self.c3 + rhs.c3)
    }
}

impl<S: Scalar> Sub for Mat4<S> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2, self.c3 - rhs.c3)
    }
}

// Element-wise scalar offset
impl<S: Scalar> Add<S> for Mat4<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: S) -> Self {
        let d = Vec4::splat(rhs);
        Self::from_cols(self.c0 + d, self.c1 + d, self.c2 + d, self.c3 + d)
    }
}

impl<S: Scalar> Sub<S> for Mat4<S> {
    type Output = Self;
    #[inline] fn sub(self, rhs: S) -> Self { self + (-rhs) }
}

impl<S: Scalar> Neg for Mat4<S> {
    type Output = Self;
    #[inline] fn neg(self) -> Self {
        Self::from_cols(-self.c0, -self.c1, -self.c2, -self.c3)
    }
}

impl<S: Scalar> Mul<S> for Mat4<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: S) -> Self {
        Self::from_cols(self.c0 * rhs, self.c1 * rhs, self.c2 * rhs, self.c3 * rhs)
    }
}

impl<S: Scalar> Div<S> for Mat4<S> {
    type Output = Self;
    #[inline] fn div(self, rhs: S) -> Self {
        Self::from_cols(self.c0 / rhs, self.c1 / rhs, self.c2 / rhs, self.c3 / rhs)
    }
}

// Mat4 * Vec4
impl<S: Scalar> Mul<Vec4<S>> for Mat4<S> {
    type Output = Vec4<S>;
    #[inline] fn mul(self, rhs: Vec4<S>) -> Vec4<S> { self.mul_vec4(rhs) }
}

// Mat4 * Mat4
impl<S: Scalar> Mul for Mat4<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { self.mul_mat(&rhs) }
}

impl<S: Scalar> AddAssign for Mat4<S> {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<S: Scalar> SubAssign for Mat4<S> {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl<S: Scalar> MulAssign<S> for Mat4<S> {
    #[inline] fn mul_assign(&mut self, rhs: S) { *self = *self * rhs; }
}

impl<S: Scalar> MulAssign for Mat4<S> {
    #[inline] fn mul_assign(&mut self, rhs: Self) { *self = self.mul_mat(&rhs); }
}

impl<S: Scalar> DivAssign<S> for Mat4<S> {
    #[inline] fn div_assign(&mut self, rhs: S) { *self = *self / rhs; }
}
