use crate::{Quat, Scalar, Vec3};
use core::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

/// 3x3 matrix, column-major storage.
///
/// Used for rotations and scales. Stored as three column vectors for natural
/// column access; vectors are columns and `A * B` applies `B` first.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3<S> {
    /// Column 0
    pub c0: Vec3<S>,
    /// Column 1
    pub c1: Vec3<S>,
    /// Column 2
    pub c2: Vec3<S>,
}

impl<S: Scalar> Mat3<S> {
    /// Construct from individual elements (row-major argument order for readability).
    /// ```text
    /// | m00 m01 m02 |
    /// | m10 m11 m12 |
    /// | m20 m21 m22 |
    /// ```
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn new(m00: S, m01: S, m02: S, m10: S, m11: S, m12: S, m20: S, m21: S, m22: S) -> Self {
        Self {
            c0: Vec3::new(m00, m10, m20),
            c1: Vec3::new(m01, m11, m21),
            c2: Vec3::new(m02, m12, m22),
        }
    }

    /// Construct from column vectors
    #[inline]
    pub fn from_cols(c0: Vec3<S>, c1: Vec3<S>, c2: Vec3<S>) -> Self {
        Self { c0, c1, c2 }
    }

    /// Construct from row vectors
    #[inline]
    pub fn from_rows(r0: Vec3<S>, r1: Vec3<S>, r2: Vec3<S>) -> Self {
        Self::from_cols(r0, r1, r2).transpose()
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_cols(Vec3::zero(), Vec3::zero(), Vec3::zero())
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_scale(Vec3::splat(S::ONE))
    }

    /// Non-uniform scale (diagonal matrix)
    #[inline]
    pub fn from_scale(d: Vec3<S>) -> Self {
        Self::new(
            d.x, S::ZERO, S::ZERO,
            S::ZERO, d.y, S::ZERO,
            S::ZERO, S::ZERO, d.z,
        )
    }

    #[inline]
    pub fn from_uniform_scale(s: S) -> Self {
        Self::from_scale(Vec3::splat(s))
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        self[(row, col)]
    }

    /// Column access
    #[inline]
    pub fn col(&self, i: usize) -> Vec3<S> {
        match i {
            0 => self.c0,
            1 => self.c1,
            _ => self.c2,
        }
    }

    /// Row access
    #[inline]
    pub fn row(&self, i: usize) -> Vec3<S> {
        Vec3::new(self.c0[i], self.c1[i], self.c2[i])
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }

    #[inline]
    pub fn transpose_in_place(&mut self) {
        *self = self.transpose();
    }

    /// Cofactor expansion along the first row.
    #[inline]
    pub fn determinant(&self) -> S {
        self.c0.x * (self.c1.y * self.c2.z - self.c2.y * self.c1.z)
            - self.c1.x * (self.c0.y * self.c2.z - self.c2.y * self.c0.z)
            + self.c2.x * (self.c0.y * self.c1.z - self.c1.y * self.c0.z)
    }

    /// Transposed cofactor matrix, so that `m * m.adjoint() == det * I`.
    pub fn adjoint(&self) -> Self {
        // Row i of the adjoint is the cross product of columns (i+1, i+2).
        Self::from_rows(
            self.c1.cross(self.c2),
            self.c2.cross(self.c0),
            self.c0.cross(self.c1),
        )
    }

    /// `adjoint / determinant`, or `None` when the determinant is within
    /// epsilon of zero.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.approx_zero() {
            return None;
        }
        Some(self.adjoint() * det.recip())
    }

    /// Inverse, falling back to the identity for singular matrices.
    pub fn inverse(&self) -> Self {
        match self.try_inverse() {
            Some(inv) => inv,
            None => {
                tracing::warn!(
                    det = self.determinant().to_f64(),
                    "singular 3x3 matrix, returning identity"
                );
                Self::identity()
            }
        }
    }

    /// Matrix-vector product
    #[inline]
    pub fn mul_vec(&self, v: Vec3<S>) -> Vec3<S> {
        self.c0 * v.x + self.c1 * v.y + self.c2 * v.z
    }

    /// Matrix-matrix product
    #[inline]
    pub fn mul_mat(&self, rhs: &Mat3<S>) -> Mat3<S> {
        Mat3::from_cols(
            self.mul_vec(rhs.c0),
            self.mul_vec(rhs.c1),
            self.mul_vec(rhs.c2),
        )
    }

    #[inline]
    pub fn hadamard(&self, rhs: &Mat3<S>) -> Mat3<S> {
        Mat3::from_cols(
            self.c0.hadamard(rhs.c0),
            self.c1.hadamard(rhs.c1),
            self.c2.hadamard(rhs.c2),
        )
    }

    /// Trace
    #[inline]
    pub fn trace(&self) -> S {
        self.c0.x + self.c1.y + self.c2.z
    }

    #[inline]
    pub fn approx_eq_eps(&self, other: &Self, eps: S) -> bool {
        self.c0.approx_eq_eps(other.c0, eps)
            && self.c1.approx_eq_eps(other.c1, eps)
            && self.c2.approx_eq_eps(other.c2, eps)
    }

    /// Rotation matrix about X axis
    pub fn rotation_x(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(S::ONE, S::ZERO, S::ZERO, S::ZERO, c, -s, S::ZERO, s, c)
    }

    /// Rotation matrix about Y axis
    pub fn rotation_y(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, S::ZERO, s, S::ZERO, S::ONE, S::ZERO, -s, S::ZERO, c)
    }

    /// Rotation matrix about Z axis
    pub fn rotation_z(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, S::ZERO, s, c, S::ZERO, S::ZERO, S::ZERO, S::ONE)
    }

    /// Rotation matrix about an arbitrary axis (Rodrigues' formula).
    /// The axis is normalized; it must not be zero.
    pub fn rotation_axis(axis: Vec3<S>, angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let t = S::ONE - c;
        let Vec3 { x, y, z } = axis.normalize();
        Self::new(
            t * x * x + c,
            t * x * y - s * z,
            t * x * z + s * y,
            t * x * y + s * z,
            t * y * y + c,
            t * y * z - s * x,
            t * x * z - s * y,
            t * y * z + s * x,
            t * z * z + c,
        )
    }

    /// Rotation from Euler angles in radians: `Rx(x) * Ry(y) * Rz(z)`.
    ///
    /// Vectors are rotated about Z first, then Y, then X, all fixed axes.
    pub fn from_euler(x: S, y: S, z: S) -> Self {
        Self::rotation_x(x) * Self::rotation_y(y) * Self::rotation_z(z)
    }

    /// Rotation from a unit quaternion.
    #[inline]
    pub fn from_quat(q: Quat<S>) -> Self {
        q.to_mat3()
    }

    /// Euler angles `(x, y, z)` such that `from_euler(x, y, z)` rebuilds
    /// this rotation.
    ///
    /// At gimbal lock (`y = ±π/2`) only `x ∓ z` is determined and the split
    /// between the two is arbitrary.
    pub fn to_euler(&self) -> (S, S, S) {
        let (m00, m01, m02) = (self.c0.x, self.c1.x, self.c2.x);
        let (m10, m11, m12) = (self.c0.y, self.c1.y, self.c2.y);
        let (m20, m21, m22) = (self.c0.z, self.c1.z, self.c2.z);

        let x = (-m12).atan2(m22);
        let cos_y = (m00 * m00 + m01 * m01).sqrt();
        let y = m02.atan2(cos_y);
        let (s, c) = x.sin_cos();
        let z = (c * m10 + s * m20).atan2(c * m11 + s * m21);
        (x, y, z)
    }

    /// Rotation axis and angle (radians, in `[0, π]`).
    ///
    /// A zero rotation has no defined axis and reports the Y axis. Near a
    /// half turn the axis is recovered from the dominant diagonal entry.
    pub fn to_axis_angle(&self) -> (Vec3<S>, S) {
        let cos_angle = (S::HALF * (self.trace() - S::ONE)).clamp(-S::ONE, S::ONE);
        let angle = cos_angle.acos();

        if angle.approx_zero() {
            return (Vec3::y(), angle);
        }

        // 2 sin(angle) times the axis
        let skew_axis = Vec3::new(
            self.c1.z - self.c2.y,
            self.c2.x - self.c0.z,
            self.c0.y - self.c1.x,
        );
        if angle < S::PI - S::EPSILON.sqrt() {
            return (skew_axis.normalize(), angle);
        }

        // Near π the antisymmetric part vanishes; use the symmetric part.
        let (m00, m11, m22) = (self.c0.x, self.c1.y, self.c2.z);
        let m01 = (self.c1.x + self.c0.y) * S::HALF;
        let m02 = (self.c2.x + self.c0.z) * S::HALF;
        let m12 = (self.c2.y + self.c1.z) * S::HALF;

        // Largest diagonal entry picks the pivot; ties go to the later axis
        let axis = if m00 > m11 && m00 > m22 {
            let root = (m00 - m11 - m22 + S::ONE).sqrt();
            let inv = root.recip();
            Vec3::new(S::HALF * root, m01 * inv, m02 * inv)
        } else if m11 > m22 {
            let root = (m11 - m00 - m22 + S::ONE).sqrt();
            let inv = root.recip();
            Vec3::new(m01 * inv, S::HALF * root, m12 * inv)
        } else {
            let root = (m22 - m00 - m11 + S::ONE).sqrt();
            let inv = root.recip();
            Vec3::new(m02 * inv, m12 * inv, S::HALF * root)
        };
        // The symmetric part fixes the axis only up to sign
        let axis = if axis.dot(skew_axis) < S::ZERO { -axis } else { axis };
        (axis.normalize(), angle)
    }

    /// Unit quaternion for this rotation (Shepperd's method).
    #[inline]
    pub fn to_quat(&self) -> Quat<S> {
        Quat::from_mat3(self)
    }
}

// Index by (row, col) tuple.
impl<S: Scalar> Index<(usize, usize)> for Mat3<S> {
    type Output = S;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &S {
        match col {
            0 => &self.c0[row],
            1 => &self.c1[row],
            2 => &self.c2[row],
            _ => panic!("column {} out of range for Mat3", col),
        }
    }
}

impl<S: Scalar> Default for Mat3<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> PartialEq for Mat3<S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, S::EPSILON)
    }
}

impl<S: Scalar> Add for Mat3<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }
}

impl<S: Scalar> Sub for Mat3<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }
}

// Element-wise scalar offset
impl<S: Scalar> Add<S> for Mat3<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: S) -> Self {
        let d = Vec3::splat(rhs);
        Self::from_cols(self.c0 + d, self.c1 + d, self.c2 + d)
    }
}

impl<S: Scalar> Sub<S> for Mat3<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: S) -> Self {
        self + (-rhs)
    }
}

impl<S: Scalar> Neg for Mat3<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_cols(-self.c0, -self.c1, -self.c2)
    }
}

impl<S: Scalar> Mul<S> for Mat3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::from_cols(self.c0 * rhs, self.c1 * rhs, self.c2 * rhs)
    }
}

impl<S: Scalar> Div<S> for Mat3<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        Self::from_cols(self.c0 / rhs, self.c1 / rhs, self.c2 / rhs)
    }
}

// Mat3 * Vec3
impl<S: Scalar> Mul<Vec3<S>> for Mat3<S> {
    type Output = Vec3<S>;
    #[inline]
    fn mul(self, rhs: Vec3<S>) -> Vec3<S> {
        self.mul_vec(rhs)
    }
}

// Mat3 * Mat3
impl<S: Scalar> Mul for Mat3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl<S: Scalar> AddAssign for Mat3<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Mat3<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign<S> for Mat3<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> MulAssign for Mat3<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_mat(&rhs);
    }
}

impl<S: Scalar> DivAssign<S> for Mat3<S> {
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn identity() {
        let m = Mat3::<f64>::identity();
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(m * v, v);
    }

    #[test]
    fn transpose() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let mt = m.transpose();
        assert_eq!(mt.get(0, 1), 4.0);
        assert_eq!(mt.get(1, 0), 2.0);
        assert_eq!(m.row(1), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(m.col(1), Vec3::new(2.0, 5.0, 8.0));

        let mut inplace = m;
        inplace.transpose_in_place();
        assert_eq!(inplace, mt);
        assert_eq!(Mat3::from_rows(m.row(0), m.row(1), m.row(2)), m);
    }

    #[test]
    fn adjoint_and_inverse() {
        let m = Mat3::new(1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0);
        assert!((m.determinant() - 1.0).abs() < 1e-12);
        assert_eq!(m * m.adjoint(), Mat3::identity() * m.determinant());

        let mi = m.try_inverse().unwrap();
        assert_eq!(m * mi, Mat3::identity());
        assert_eq!(mi * m, Mat3::identity());
        assert_eq!(mi.inverse(), m);
    }

    #[test]
    fn singular_inverse_falls_back_to_identity() {
        let m = Mat3::new(1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 1.0);
        assert!(m.try_inverse().is_none());
        assert_eq!(m.inverse(), Mat3::identity());
    }

    #[test]
    fn rotation_about_z() {
        let r = Mat3::rotation_z(FRAC_PI_2);
        let rotated = r * Vec3::new(1.0, 0.0, 0.0);
        assert!((rotated.x).abs() < 1e-10);
        assert!((rotated.y - 1.0).abs() < 1e-10);
    }

    #[test]
    fn axis_rotation_matches_cardinal() {
        assert_eq!(Mat3::rotation_axis(Vec3::x(), 0.7), Mat3::rotation_x(0.7));
        assert_eq!(Mat3::rotation_axis(Vec3::new(0.0, 3.0, 0.0), 0.7), Mat3::rotation_y(0.7));
        assert_eq!(Mat3::rotation_axis(Vec3::z(), -1.1), Mat3::rotation_z(-1.1));
    }

    #[test]
    fn determinant() {
        let id = Mat3::<f64>::identity();
        assert!((id.determinant() - 1.0).abs() < 1e-10);
        let s = Mat3::from_scale(Vec3::new(2.0, 3.0, 4.0));
        assert!((s.determinant() - 24.0).abs() < 1e-10);
        assert!((Mat3::from_euler(0.3, -0.2, 1.4).determinant() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn euler_order() {
        // Z applied first: x axis goes to y, then rotating about X takes y to z.
        let m = Mat3::from_euler(FRAC_PI_2, 0.0, FRAC_PI_2);
        assert_eq!(m * Vec3::x(), Vec3::z());
    }

    #[test]
    fn euler_roundtrip() {
        for &(x, y, z) in &[(0.1, 0.2, 0.3), (-1.2, 0.9, 2.5), (3.0, -1.4, -0.4), (0.0, 0.0, 0.0)] {
            let m = Mat3::from_euler(x, y, z);
            let (ex, ey, ez) = m.to_euler();
            assert!((ex - x).abs() < 1e-9, "x {x} -> {ex}");
            assert!((ey - y).abs() < 1e-9, "y {y} -> {ey}");
            assert!((ez - z).abs() < 1e-9, "z {z} -> {ez}");
        }
    }

    #[test]
    fn euler_gimbal_lock_rebuilds_matrix() {
        let m = Mat3::from_euler(0.4, FRAC_PI_2, -0.3);
        let (x, y, z) = m.to_euler();
        assert_eq!(Mat3::from_euler(x, y, z), m);
    }

    #[test]
    fn axis_angle_generic() {
        let axis = Vec3::new(1.0, -2.0, 0.5).normalize();
        let m = Mat3::rotation_axis(axis, 1.3);
        let (a, angle) = m.to_axis_angle();
        assert!((angle - 1.3).abs() < 1e-9);
        assert_eq!(a, axis);
    }

    #[test]
    fn axis_angle_zero_reports_y() {
        let (a, angle) = Mat3::<f64>::identity().to_axis_angle();
        assert_eq!(angle, 0.0);
        assert_eq!(a, Vec3::y());
    }

    #[test]
    fn axis_angle_half_turn() {
        for axis in [
            Vec3::new(1.0, 0.2, -0.1).normalize(),
            Vec3::new(0.1, -1.0, 0.3).normalize(),
            Vec3::new(0.2, 0.3, 1.0).normalize(),
        ] {
            let m = Mat3::rotation_axis(axis, PI);
            let (a, angle) = m.to_axis_angle();
            assert!((angle - PI).abs() < 1e-6);
            // Axis is defined up to sign at a half turn
            assert!(a == axis || a == -axis, "{a} vs {axis}");
            assert_eq!(Mat3::rotation_axis(a, angle), m);
        }
    }

    #[test]
    fn axis_angle_just_below_half_turn() {
        // Negative dominant component: the recovered axis must keep its sign
        let axis = Vec3::new(0.2, 0.3, -1.0).normalize();
        for angle in [PI - 5e-4, PI - 1e-5] {
            let m = Mat3::rotation_axis(axis, angle);
            let (a, out) = m.to_axis_angle();
            assert!((out - angle).abs() < 1e-9);
            assert_eq!(a, axis);
            assert_eq!(Mat3::rotation_axis(a, out), m);
        }
    }

    #[test]
    fn axis_angle_diagonal_tie() {
        // x and y diagonal entries tie, z is smaller
        let axis = Vec3::new(-1.0, -1.0, 0.0).normalize();
        let m = Mat3::rotation_axis(axis, PI - 1e-4);
        let (a, angle) = m.to_axis_angle();
        assert_eq!(a, axis);
        assert_eq!(Mat3::rotation_axis(a, angle), m);
    }

    #[test]
    fn scalar_and_compound_ops() {
        let mut m = Mat3::<f64>::identity();
        m += Mat3::identity();
        m *= 2.0;
        m /= 4.0;
        assert_eq!(m, Mat3::identity());
        m -= Mat3::identity();
        assert_eq!(m, Mat3::zero());

        let ones = Mat3::<f64>::zero() + 1.0;
        assert_eq!(ones.get(2, 0), 1.0);
        assert_eq!(ones - 1.0, Mat3::zero());
        assert_eq!(ones.hadamard(&(ones * 3.0)), ones * 3.0);

        let mut r = Mat3::rotation_x(0.5);
        r *= Mat3::rotation_x(0.25);
        assert_eq!(r, Mat3::rotation_x(0.75));
    }
}
