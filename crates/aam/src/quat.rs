use crate::{Mat3, Mat4, Precision, Scalar, Vec3};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Quaternion: w + xi + yj + zk
///
/// Stored as scalar part `w` and vector part `v = (x, y, z)`.
/// Represents rotations when unit-length; non-unit values are fine as
/// intermediates (sums, lerps) but [`rotate`](Self::rotate) assumes unit norm.
///
/// Products compose like matrices: `(a * b).rotate(v) == a.rotate(b.rotate(v))`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<S> {
    pub w: S,
    pub v: Vec3<S>,
}

impl<S: Scalar> Quat<S> {
    #[inline]
    pub fn new(w: S, x: S, y: S, z: S) -> Self {
        Self { w, v: Vec3::new(x, y, z) }
    }

    #[inline]
    pub fn identity() -> Self {
        Self { w: S::ONE, v: Vec3::zero() }
    }

    #[inline]
    pub fn zero() -> Self {
        Self { w: S::ZERO, v: Vec3::zero() }
    }

    /// Rotation of `angle` radians about `axis`. The axis need not be unit
    /// length; a zero axis gives the identity.
    pub fn from_axis_angle(axis: Vec3<S>, angle: S) -> Self {
        let len_sq = axis.norm_sq();
        if len_sq.approx_zero() {
            return Self::identity();
        }
        let (s, c) = (angle * S::HALF).sin_cos();
        Self { w: c, v: axis * (s / len_sq.sqrt()) }
    }

    /// Shortest rotation taking direction `from` to direction `to`.
    ///
    /// Antiparallel inputs have no unique shortest arc; a half turn about an
    /// axis perpendicular to `from` is returned instead.
    pub fn from_to(from: Vec3<S>, to: Vec3<S>) -> Self {
        let mut q = Self { w: from.dot(to), v: from.cross(to) }.normalize();
        q.w += S::ONE;

        if q.w <= S::EPSILON {
            q = if from.z * from.z > from.x * from.x {
                Self::new(S::ZERO, S::ZERO, from.z, -from.y)
            } else {
                Self::new(S::ZERO, from.y, -from.x, S::ZERO)
            };
        }

        q.normalize()
    }

    /// Same rotation as [`Mat3::from_euler`]: `qx(x) * qy(y) * qz(z)`.
    pub fn from_euler(x: S, y: S, z: S) -> Self {
        let (sx, cx) = (x * S::HALF).sin_cos();
        let (sy, cy) = (y * S::HALF).sin_cos();
        let (sz, cz) = (z * S::HALF).sin_cos();

        Self::new(
            cx * cy * cz - sx * sy * sz,
            sx * cy * cz + cx * sy * sz,
            cx * sy * cz - sx * cy * sz,
            cx * cy * sz + sx * sy * cz,
        )
    }

    /// Convert from rotation matrix (Shepperd's method for numerical stability)
    pub fn from_mat3(m: &Mat3<S>) -> Self {
        let trace = m.trace();
        let quarter = S::HALF * S::HALF;

        if trace > S::ZERO {
            let s = (trace + S::ONE).sqrt() * S::TWO;
            let inv_s = s.recip();
            Quat::new(
                s * quarter,
                (m.get(2, 1) - m.get(1, 2)) * inv_s,
                (m.get(0, 2) - m.get(2, 0)) * inv_s,
                (m.get(1, 0) - m.get(0, 1)) * inv_s,
            )
        } else if m.get(0, 0) > m.get(1, 1) && m.get(0, 0) > m.get(2, 2) {
            let s = (S::ONE + m.get(0, 0) - m.get(1, 1) - m.get(2, 2)).sqrt() * S::TWO;
            let inv_s = s.recip();
            Quat::new(
                (m.get(2, 1) - m.get(1, 2)) * inv_s,
                s * quarter,
                (m.get(0, 1) + m.get(1, 0)) * inv_s,
                (m.get(0, 2) + m.get(2, 0)) * inv_s,
            )
        } else if m.get(1, 1) > m.get(2, 2) {
            let s = (S::ONE + m.get(1, 1) - m.get(0, 0) - m.get(2, 2)).sqrt() * S::TWO;
            let inv_s = s.recip();
            Quat::new(
                (m.get(0, 2) - m.get(2, 0)) * inv_s,
                (m.get(0, 1) + m.get(1, 0)) * inv_s,
                s * quarter,
                (m.get(1, 2) + m.get(2, 1)) * inv_s,
            )
        } else {
            let s = (S::ONE + m.get(2, 2) - m.get(0, 0) - m.get(1, 1)).sqrt() * S::TWO;
            let inv_s = s.recip();
            Quat::new(
                (m.get(1, 0) - m.get(0, 1)) * inv_s,
                (m.get(0, 2) + m.get(2, 0)) * inv_s,
                (m.get(1, 2) + m.get(2, 1)) * inv_s,
                s * quarter,
            )
        }
    }

    /// Convert to 3x3 rotation matrix
    pub fn to_mat3(&self) -> Mat3<S> {
        let two = S::TWO;
        let Vec3 { x, y, z } = self.v;
        let w = self.w;

        Mat3::new(
            S::ONE - two * (y * y + z * z), two * (x * y - w * z),         two * (x * z + w * y),
            two * (x * y + w * z),         S::ONE - two * (x * x + z * z), two * (y * z - w * x),
            two * (x * z - w * y),         two * (y * z + w * x),         S::ONE - two * (x * x + y * y),
        )
    }

    #[inline]
    pub fn to_mat4(&self) -> Mat4<S> {
        Mat4::from_mat3(self.to_mat3())
    }

    #[inline]
    pub fn dot(&self, other: &Quat<S>) -> S {
        self.w * other.w + self.v.dot(other.v)
    }

    /// Squared magnitude, `q · q`.
    #[inline]
    pub fn norm_sq(&self) -> S {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> S { self.norm_sq().sqrt() }

    /// Unit quaternion in the same direction. A zero quaternion stays zero.
    #[inline]
    pub fn normalize(&self) -> Self {
        self.normalize_with(Precision::Exact)
    }

    pub fn normalize_with(&self, precision: Precision) -> Self {
        let n_sq = self.norm_sq();
        if n_sq.approx_zero() {
            return Self::zero();
        }
        *self * precision.inv_sqrt(n_sq)
    }

    #[inline]
    pub fn normalize_in_place(&mut self) {
        *self = self.normalize();
    }

    /// Conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self { w: self.w, v: -self.v }
    }

    /// `conjugate / norm_sq`. A zero quaternion has no inverse and yields
    /// the identity.
    pub fn inverse(&self) -> Self {
        let n_sq = self.norm_sq();
        if n_sq.approx_zero() {
            tracing::warn!(norm_sq = n_sq.to_f64(), "inverting a zero quaternion, returning identity");
            return Self::identity();
        }
        self.conjugate() * n_sq.recip()
    }

    /// Quaternion multiplication (Hamilton product)
    pub fn mul(&self, other: &Quat<S>) -> Quat<S> {
        Quat {
            w: self.w * other.w - self.v.dot(other.v),
            v: other.v * self.w + self.v * other.w + self.v.cross(other.v),
        }
    }

    /// Rotate a vector by this unit quaternion.
    ///
    /// Expanded form of `q * v * q^-1`:
    /// `(2w² - 1) v + 2 (u·v) u + 2w (u × v)`.
    pub fn rotate(&self, v: Vec3<S>) -> Vec3<S> {
        let u = self.v;
        let cross_mult = S::TWO * self.w;
        let p_mult = cross_mult * self.w - S::ONE;
        let v_mult = S::TWO * u.dot(v);
        v * p_mult + u * v_mult + u.cross(v) * cross_mult
    }

    /// Linear blend taking the shorter path; the result is not normalized.
    pub fn lerp(&self, end: &Quat<S>, t: S) -> Quat<S> {
        let start_t = if self.dot(end) < S::ZERO { t - S::ONE } else { S::ONE - t };
        *self * start_t + *end * t
    }

    /// Spherical linear interpolation along the great arc between `self`
    /// and `end`.
    ///
    /// Neither input is negated, so `t = 0` gives `self` and `t = 1` gives
    /// `end`. Nearly parallel inputs use linear weights. Nearly opposite
    /// inputs have no unique arc; the path then runs through a quaternion
    /// perpendicular to `self`, so every step stays on the unit sphere.
    pub fn slerp(&self, end: &Quat<S>, t: S) -> Quat<S> {
        let cos = self.dot(end).clamp(-S::ONE, S::ONE);

        if (S::ONE - cos) <= S::EPSILON {
            return *self * (S::ONE - t) + *end * t;
        }

        if (S::ONE + cos) <= S::EPSILON {
            let mid = self.perpendicular();
            let (from, to, s) = if t <= S::HALF {
                (*self, mid, t * S::TWO)
            } else {
                (mid, *end, t * S::TWO - S::ONE)
            };
            let (sin, cos) = (s * S::FRAC_PI_2).sin_cos();
            return (from * cos + to * sin).normalize();
        }

        let angle = cos.acos();
        let recip_sin = angle.sin().recip();
        *self * (((S::ONE - t) * angle).sin() * recip_sin) + *end * ((t * angle).sin() * recip_sin)
    }

    /// Slerp approximation without transcendental calls.
    ///
    /// Corrects `t` with a cubic fitted to the slerp speed curve, then
    /// normalizes a linear blend. Endpoints match [`slerp`](Self::slerp).
    /// The cubic is fitted to arcs of at most a quarter turn (`dot >= 0`);
    /// wider arcs go through `slerp`.
    pub fn approx_slerp(&self, end: &Quat<S>, t: S) -> Quat<S> {
        let cos = self.dot(end);
        if cos < S::ZERO {
            return self.slerp(end, t);
        }
        let factor = S::ONE - S::from_f64(0.787_808_8) * cos;
        let k = S::from_f64(0.506_926_9) * factor * factor;

        let b = S::TWO * k;
        let c = -S::from_f64(3.0) * k;
        let d = S::ONE + k;
        let t = t * (t * (b * t + c) + d);

        (*self * (S::ONE - t) + *end * t).normalize()
    }

    // Same norm as `self`, zero dot product with it
    #[inline]
    fn perpendicular(&self) -> Quat<S> {
        Quat { w: -self.v.x, v: Vec3::new(self.w, -self.v.z, self.v.y) }
    }

    #[inline]
    pub fn approx_eq_eps(&self, other: &Quat<S>, eps: S) -> bool {
        self.w.approx_eq_eps(other.w, eps) && self.v.approx_eq_eps(other.v, eps)
    }
}

impl<S: Scalar> Default for Quat<S> {
    fn default() -> Self { Self::identity() }
}

impl<S: Scalar> PartialEq for Quat<S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, S::EPSILON)
    }
}

impl<S: Scalar> Add for Quat<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self { w: self.w + rhs.w, v: self.v + rhs.v } }
}

impl<S: Scalar> Sub for Quat<S> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self { w: self.w - rhs.w, v: self.v - rhs.v } }
}

impl<S: Scalar> Neg for Quat<S> {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self { w: -self.w, v: -self.v } }
}

impl<S: Scalar> Mul for Quat<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { Quat::mul(&self, &rhs) }
}

impl<S: Scalar> Mul<S> for Quat<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: S) -> Self { Self { w: self.w * rhs, v: self.v * rhs } }
}

// Quat * Vec3 rotates the vector
impl<S: Scalar> Mul<Vec3<S>> for Quat<S> {
    type Output = Vec3<S>;
    #[inline] fn mul(self, rhs: Vec3<S>) -> Vec3<S> { self.rotate(rhs) }
}

impl<S: Scalar> AddAssign for Quat<S> {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<S: Scalar> SubAssign for Quat<S> {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl<S: Scalar> MulAssign for Quat<S> {
    #[inline] fn mul_assign(&mut self, rhs: Self) { *self = Quat::mul(self, &rhs); }
}

impl<S: Scalar> MulAssign<S> for Quat<S> {
    #[inline] fn mul_assign(&mut self, rhs: S) { *self = *self * rhs; }
}

impl<S: Scalar> core::fmt::Display for Quat<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}; {}, {}, {})", self.w, self.v.x, self.v.y, self.v.z)
    }
}
