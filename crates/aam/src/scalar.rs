use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Trait for the floating-point types the kernel is generic over.
///
/// Implemented for `f32` and `f64`. Besides the usual transcendental
/// functions it carries the tolerance used by every fuzzy comparison in the
/// crate (`EPSILON`, 1e-6 for both widths) and the bit-level approximations
/// selected through [`Precision`].
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const HALF: Self;
    const PI: Self;
    const TAU: Self;
    const FRAC_PI_2: Self;
    /// Default tolerance for `approx_eq` / `approx_zero`.
    const EPSILON: Self;
    const INFINITY: Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn recip(self) -> Self;
    fn is_nan(self) -> bool;
    fn to_radians(self) -> Self;

    /// Square root from the IEEE-754 bit pattern, see [`Precision::Approximate`].
    fn fast_sqrt(self) -> Self;
    /// Reciprocal square root from the IEEE-754 bit pattern plus one
    /// Newton-Raphson step.
    fn fast_inv_sqrt(self) -> Self;

    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;

    /// Clamp into `[lo, hi]`. Requires `lo < hi`.
    #[inline]
    fn clamp(self, lo: Self, hi: Self) -> Self {
        debug_assert!(lo < hi, "clamp requires lo < hi");
        if self < lo {
            lo
        } else if self > hi {
            hi
        } else {
            self
        }
    }

    #[inline]
    fn inv_sqrt(self) -> Self {
        self.sqrt().recip()
    }

    /// Relative comparison: `|a - b| <= eps * (|a| + |b| + 1)`.
    #[inline]
    fn approx_eq_eps(self, other: Self, eps: Self) -> bool {
        (self - other).abs() <= eps * (self.abs() + other.abs() + Self::ONE)
    }

    #[inline]
    fn approx_eq(self, other: Self) -> bool {
        self.approx_eq_eps(other, Self::EPSILON)
    }

    #[inline]
    fn approx_zero_eps(self, eps: Self) -> bool {
        self.abs() <= eps
    }

    #[inline]
    fn approx_zero(self) -> bool {
        self.approx_zero_eps(Self::EPSILON)
    }

    #[inline]
    fn lerp(self, other: Self, t: Self) -> Self {
        self + (other - self) * t
    }
}

/// Square-root strategy.
///
/// `Exact` defers to the platform math library. `Approximate` uses the
/// bit-manipulation estimates, trading roughly three significant digits for
/// speed. Both are always compiled in so either can be chosen per call site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    #[default]
    Exact,
    Approximate,
}

impl Precision {
    #[inline]
    pub fn sqrt<S: Scalar>(self, x: S) -> S {
        match self {
            Precision::Exact => x.sqrt(),
            Precision::Approximate => x.fast_sqrt(),
        }
    }

    #[inline]
    pub fn inv_sqrt<S: Scalar>(self, x: S) -> S {
        match self {
            Precision::Exact => x.inv_sqrt(),
            Precision::Approximate => x.fast_inv_sqrt(),
        }
    }
}

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("aam needs either the `std` or the `libm` feature for float math");

// In std mode, use inherent float methods. In no_std, use libm.
#[cfg(feature = "std")]
mod float_ops {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        x.sqrt()
    }
    #[inline(always)]
    pub fn sqrt_f64(x: f64) -> f64 {
        x.sqrt()
    }
    #[inline(always)]
    pub fn abs_f32(x: f32) -> f32 {
        x.abs()
    }
    #[inline(always)]
    pub fn abs_f64(x: f64) -> f64 {
        x.abs()
    }
    #[inline(always)]
    pub fn sin_f32(x: f32) -> f32 {
        x.sin()
    }
    #[inline(always)]
    pub fn sin_f64(x: f64) -> f64 {
        x.sin()
    }
    #[inline(always)]
    pub fn cos_f32(x: f32) -> f32 {
        x.cos()
    }
    #[inline(always)]
    pub fn cos_f64(x: f64) -> f64 {
        x.cos()
    }
    #[inline(always)]
    pub fn tan_f32(x: f32) -> f32 {
        x.tan()
    }
    #[inline(always)]
    pub fn tan_f64(x: f64) -> f64 {
        x.tan()
    }
    #[inline(always)]
    pub fn acos_f32(x: f32) -> f32 {
        x.acos()
    }
    #[inline(always)]
    pub fn acos_f64(x: f64) -> f64 {
        x.acos()
    }
    #[inline(always)]
    pub fn atan2_f32(y: f32, x: f32) -> f32 {
        y.atan2(x)
    }
    #[inline(always)]
    pub fn atan2_f64(y: f64, x: f64) -> f64 {
        y.atan2(x)
    }
    #[inline(always)]
    pub fn sin_cos_f32(x: f32) -> (f32, f32) {
        x.sin_cos()
    }
    #[inline(always)]
    pub fn sin_cos_f64(x: f64) -> (f64, f64) {
        x.sin_cos()
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod float_ops {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        libm::sqrtf(x)
    }
    #[inline(always)]
    pub fn sqrt_f64(x: f64) -> f64 {
        libm::sqrt(x)
    }
    #[inline(always)]
    pub fn abs_f32(x: f32) -> f32 {
        libm::fabsf(x)
    }
    #[inline(always)]
    pub fn abs_f64(x: f64) -> f64 {
        libm::fabs(x)
    }
    #[inline(always)]
    pub fn sin_f32(x: f32) -> f32 {
        libm::sinf(x)
    }
    #[inline(always)]
    pub fn sin_f64(x: f64) -> f64 {
        libm::sin(x)
    }
    #[inline(always)]
    pub fn cos_f32(x: f32) -> f32 {
        libm::cosf(x)
    }
    #[inline(always)]
    pub fn cos_f64(x: f64) -> f64 {
        libm::cos(x)
    }
    #[inline(always)]
    pub fn tan_f32(x: f32) -> f32 {
        libm::tanf(x)
    }
    #[inline(always)]
    pub fn tan_f64(x: f64) -> f64 {
        libm::tan(x)
    }
    #[inline(always)]
    pub fn acos_f32(x: f32) -> f32 {
        libm::acosf(x)
    }
    #[inline(always)]
    pub fn acos_f64(x: f64) -> f64 {
        libm::acos(x)
    }
    #[inline(always)]
    pub fn atan2_f32(y: f32, x: f32) -> f32 {
        libm::atan2f(y, x)
    }
    #[inline(always)]
    pub fn atan2_f64(y: f64, x: f64) -> f64 {
        libm::atan2(y, x)
    }
    #[inline(always)]
    pub fn sin_cos_f32(x: f32) -> (f32, f32) {
        libm::sincosf(x)
    }
    #[inline(always)]
    pub fn sin_cos_f64(x: f64) -> (f64, f64) {
        libm::sincos(x)
    }
}

// Bit-level estimates. f32 uses Jan Kadlec's tuned constant and
// coefficients; f64 uses the classic magic number with a plain Newton step.
#[inline]
fn fast_inv_sqrt_f32(x: f32) -> f32 {
    let y = f32::from_bits(0x5F1F_FFF9_u32.wrapping_sub(x.to_bits() >> 1));
    0.703_952_25 * y * (2.389_244_6 - x * y * y)
}

#[inline]
fn fast_inv_sqrt_f64(x: f64) -> f64 {
    let y = f64::from_bits(0x5FE6_EB50_C7B5_37A9_u64.wrapping_sub(x.to_bits() >> 1));
    y * (1.5 - 0.5 * x * y * y)
}

macro_rules! impl_scalar_float {
    ($t:ty, $suffix:ident, $pi:expr, $tau:expr, $frac_pi_2:expr, $inf:expr) => {
        ::paste::paste! {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = $pi;
            const TAU: Self = $tau;
            const FRAC_PI_2: Self = $frac_pi_2;
            const EPSILON: Self = 1.0e-6;
            const INFINITY: Self = $inf;

            #[inline] fn sqrt(self) -> Self { float_ops::[<sqrt_ $suffix>](self) }
            #[inline] fn abs(self) -> Self { float_ops::[<abs_ $suffix>](self) }
            #[inline] fn sin(self) -> Self { float_ops::[<sin_ $suffix>](self) }
            #[inline] fn cos(self) -> Self { float_ops::[<cos_ $suffix>](self) }
            #[inline] fn tan(self) -> Self { float_ops::[<tan_ $suffix>](self) }
            #[inline] fn acos(self) -> Self { float_ops::[<acos_ $suffix>](self) }
            #[inline] fn atan2(self, other: Self) -> Self { float_ops::[<atan2_ $suffix>](self, other) }
            #[inline] fn sin_cos(self) -> (Self, Self) { float_ops::[<sin_cos_ $suffix>](self) }

            #[inline] fn min(self, other: Self) -> Self { if self < other { self } else { other } }
            #[inline] fn max(self, other: Self) -> Self { if self > other { self } else { other } }
            #[inline] fn recip(self) -> Self { 1.0 / self }
            #[inline] fn is_nan(self) -> bool { self != self }
            #[inline] fn to_radians(self) -> Self { self * ($pi / 180.0) }

            #[inline] fn fast_inv_sqrt(self) -> Self { [<fast_inv_sqrt_ $suffix>](self) }
            #[inline] fn fast_sqrt(self) -> Self {
                if self <= 0.0 { 0.0 } else { self * [<fast_inv_sqrt_ $suffix>](self) }
            }

            #[inline] fn from_f64(v: f64) -> Self { v as $t }
            #[inline] fn to_f64(self) -> f64 { self as f64 }
        }
        }
    };
}

impl_scalar_float!(
    f32,
    f32,
    core::f32::consts::PI,
    core::f32::consts::TAU,
    core::f32::consts::FRAC_PI_2,
    f32::INFINITY
);
impl_scalar_float!(
    f64,
    f64,
    core::f64::consts::PI,
    core::f64::consts::TAU,
    core::f64::consts::FRAC_PI_2,
    f64::INFINITY
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_basics() {
        assert_eq!(f64::ZERO, 0.0);
        assert_eq!(f64::ONE, 1.0);
        assert!((f64::PI - core::f64::consts::PI).abs() < 1e-15);
        assert_eq!(Scalar::sqrt(4.0_f64), 2.0);
        assert_eq!(Scalar::abs(-3.0_f64), 3.0);
    }

    #[test]
    fn exact_sqrt_and_inv_sqrt() {
        assert!((Precision::Exact.sqrt(9.0_f32) - 3.0).abs() < 1e-5);
        assert!((Precision::Exact.inv_sqrt(9.0_f32) - 0.3333).abs() < 1e-4);
        assert_eq!(Precision::default(), Precision::Exact);
    }

    #[test]
    fn approximate_sqrt_is_close() {
        for &x in &[0.25_f32, 2.0, 9.0, 100.0, 12345.0] {
            let exact = x.sqrt();
            let approx = Precision::Approximate.sqrt(x);
            assert!((approx - exact).abs() / exact < 1e-2, "{x}: {approx} vs {exact}");
            let inv = Precision::Approximate.inv_sqrt(x);
            assert!((inv * exact - 1.0).abs() < 1e-2, "{x}: {inv}");
        }
        for &x in &[0.5_f64, 9.0, 1.0e6] {
            let inv = Precision::Approximate.inv_sqrt(x);
            assert!((inv * x.sqrt() - 1.0).abs() < 1e-2);
        }
        assert_eq!(Precision::Approximate.sqrt(0.0_f64), 0.0);
    }

    #[test]
    fn relative_equality() {
        assert!(1.0_f64.approx_eq(1.0 + 1e-7));
        assert!(!1.0_f64.approx_eq(1.0 + 1e-5));
        // Tolerance grows with magnitude
        assert!(1.0e6_f64.approx_eq(1.0e6 + 1.0));
        // The +1 term keeps near-zero values comparable
        assert!(1e-9_f64.approx_eq(-1e-9));
        assert!(0.5_f32.approx_eq_eps(0.55, 0.1));
    }

    #[test]
    fn zero_test() {
        assert!(1e-7_f64.approx_zero());
        assert!(!1e-5_f64.approx_zero());
        assert!(0.05_f32.approx_zero_eps(0.1));
    }

    #[test]
    fn clamp_and_lerp() {
        assert_eq!(Scalar::clamp(5.0_f64, 0.0, 1.0), 1.0);
        assert_eq!(Scalar::clamp(-5.0_f64, 0.0, 1.0), 0.0);
        assert_eq!(Scalar::clamp(0.25_f64, 0.0, 1.0), 0.25);
        assert_eq!(Scalar::lerp(2.0_f64, 4.0, 0.5), 3.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "clamp requires lo < hi")]
    fn clamp_rejects_empty_range() {
        let _ = Scalar::clamp(0.5_f64, 1.0, 0.0);
    }

    #[test]
    fn sin_cos_and_nan() {
        let (s, c) = Scalar::sin_cos(f64::FRAC_PI_2);
        assert!((s - 1.0).abs() < 1e-12);
        assert!(c.abs() < 1e-12);
        assert!(Scalar::is_nan(f32::NAN));
        assert!(!Scalar::is_nan(1.0_f32));
        assert!((Scalar::to_radians(180.0_f64) - core::f64::consts::PI).abs() < 1e-12);
    }
}
