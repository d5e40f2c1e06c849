// Shared operator and method boilerplate for the vector types.
//
// `impl_float_vec!` covers everything Vec2/Vec3/Vec4 have in common; each
// type adds its dimension-specific methods (cross, perp, extend, ...) in its
// own module. `impl_int_vec!` does the same for the exact integer vectors.

macro_rules! impl_float_vec {
    ($V:ident, $n:literal, $($f:ident),+) => {
        impl<S: Scalar> $V<S> {
            #[inline]
            pub const fn new($($f: S),+) -> Self { Self { $($f),+ } }

            #[inline]
            pub fn zero() -> Self { Self { $($f: S::ZERO),+ } }

            #[inline]
            pub fn splat(v: S) -> Self { Self { $($f: v),+ } }

            #[inline]
            pub fn dot(self, rhs: Self) -> S {
                S::ZERO $(+ self.$f * rhs.$f)+
            }

            #[inline]
            pub fn norm_sq(self) -> S { self.dot(self) }

            #[inline]
            pub fn norm(self) -> S { self.norm_sq().sqrt() }

            #[inline]
            pub fn distance_sq(self, other: Self) -> S { (self - other).norm_sq() }

            #[inline]
            pub fn distance(self, other: Self) -> S { (self - other).norm() }

            /// Unit vector in the same direction. The input must be non-zero.
            #[inline]
            pub fn normalize(self) -> Self {
                self.normalize_with(Precision::Exact)
            }

            #[inline]
            pub fn normalize_in_place(&mut self) {
                *self = self.normalize();
            }

            /// Normalize using the given square-root strategy.
            #[inline]
            pub fn normalize_with(self, precision: Precision) -> Self {
                let n_sq = self.norm_sq();
                debug_assert!(n_sq > S::ZERO, "cannot normalize a zero-length vector");
                self * precision.inv_sqrt(n_sq)
            }

            #[inline]
            pub fn try_normalize(self) -> Option<Self> {
                let n = self.norm();
                if n > S::EPSILON { Some(self / n) } else { None }
            }

            /// Returns the element-wise product (Hadamard product)
            #[inline]
            pub fn hadamard(self, other: Self) -> Self {
                Self { $($f: self.$f * other.$f),+ }
            }

            #[inline]
            pub fn lerp(self, other: Self, t: S) -> Self {
                self * (S::ONE - t) + other * t
            }

            /// Mirror `self` about the plane with unit normal `n`.
            #[inline]
            pub fn reflect(self, n: Self) -> Self {
                self - n * (S::TWO * self.dot(n))
            }

            /// Refraction of the unit incident direction `self` through a
            /// surface with unit normal `n` and index ratio `eta`. Returns the
            /// zero vector on total internal reflection.
            pub fn refract(self, n: Self, eta: S) -> Self {
                let cos_i = n.dot(self);
                let k = S::ONE - eta * eta * (S::ONE - cos_i * cos_i);
                if k < S::ZERO {
                    Self::zero()
                } else {
                    self * eta - n * (eta * cos_i + k.sqrt())
                }
            }

            #[inline]
            pub fn is_zero(self) -> bool {
                true $(&& self.$f.approx_zero())+
            }

            #[inline]
            pub fn is_unit(self) -> bool {
                self.norm_sq().approx_eq(S::ONE)
            }

            #[inline]
            pub fn component_min(self, other: Self) -> Self {
                Self { $($f: self.$f.min(other.$f)),+ }
            }

            #[inline]
            pub fn component_max(self, other: Self) -> Self {
                Self { $($f: self.$f.max(other.$f)),+ }
            }

            #[inline]
            pub fn abs(self) -> Self {
                Self { $($f: self.$f.abs()),+ }
            }

            #[inline]
            pub fn approx_eq_eps(self, other: Self, eps: S) -> bool {
                true $(&& self.$f.approx_eq_eps(other.$f, eps))+
            }

            #[inline]
            pub fn as_array(&self) -> [S; $n] {
                [$(self.$f),+]
            }
        }

        impl<S: Scalar> Default for $V<S> {
            fn default() -> Self { Self::zero() }
        }

        impl<S: Scalar> PartialEq for $V<S> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.approx_eq_eps(*other, S::EPSILON)
            }
        }

        impl<S: Scalar> From<[S; $n]> for $V<S> {
            fn from(a: [S; $n]) -> Self {
                let [$($f),+] = a;
                Self { $($f),+ }
            }
        }

        impl<S: Scalar> From<$V<S>> for [S; $n] {
            fn from(v: $V<S>) -> Self { [$(v.$f),+] }
        }

        impl<S: Scalar> core::ops::Index<usize> for $V<S> {
            type Output = S;
            #[inline]
            fn index(&self, i: usize) -> &S {
                let fields = [$(&self.$f),+];
                fields[i]
            }
        }

        impl<S: Scalar> core::ops::IndexMut<usize> for $V<S> {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut S {
                let fields = [$(&mut self.$f),+];
                match fields.into_iter().nth(i) {
                    Some(f) => f,
                    None => panic!("index {} out of range for {}", i, stringify!($V)),
                }
            }
        }

        impl<S: Scalar> core::ops::Add for $V<S> {
            type Output = Self;
            #[inline] fn add(self, rhs: Self) -> Self { Self { $($f: self.$f + rhs.$f),+ } }
        }

        impl<S: Scalar> core::ops::Sub for $V<S> {
            type Output = Self;
            #[inline] fn sub(self, rhs: Self) -> Self { Self { $($f: self.$f - rhs.$f),+ } }
        }

        impl<S: Scalar> core::ops::Neg for $V<S> {
            type Output = Self;
            #[inline] fn neg(self) -> Self { Self { $($f: -self.$f),+ } }
        }

        impl<S: Scalar> core::ops::Mul<S> for $V<S> {
            type Output = Self;
            #[inline] fn mul(self, rhs: S) -> Self { Self { $($f: self.$f * rhs),+ } }
        }

        impl<S: Scalar> core::ops::Div<S> for $V<S> {
            type Output = Self;
            #[inline] fn div(self, rhs: S) -> Self { Self { $($f: self.$f / rhs),+ } }
        }

        impl<S: Scalar> core::ops::AddAssign for $V<S> {
            #[inline] fn add_assign(&mut self, rhs: Self) { $(self.$f += rhs.$f;)+ }
        }

        impl<S: Scalar> core::ops::SubAssign for $V<S> {
            #[inline] fn sub_assign(&mut self, rhs: Self) { $(self.$f -= rhs.$f;)+ }
        }

        impl<S: Scalar> core::ops::MulAssign<S> for $V<S> {
            #[inline] fn mul_assign(&mut self, rhs: S) { $(self.$f *= rhs;)+ }
        }

        impl<S: Scalar> core::ops::DivAssign<S> for $V<S> {
            #[inline] fn div_assign(&mut self, rhs: S) { $(self.$f /= rhs;)+ }
        }

        // Scalar * vector (commutative)
        impl core::ops::Mul<$V<f64>> for f64 {
            type Output = $V<f64>;
            #[inline] fn mul(self, rhs: $V<f64>) -> $V<f64> { rhs * self }
        }

        impl core::ops::Mul<$V<f32>> for f32 {
            type Output = $V<f32>;
            #[inline] fn mul(self, rhs: $V<f32>) -> $V<f32> { rhs * self }
        }

        impl<S: Scalar> core::fmt::Display for $V<S> {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                let parts = [$(self.$f),+];
                write!(f, "(")?;
                for (i, p) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", p)?;
                }
                write!(f, ")")
            }
        }
    };
}

macro_rules! impl_int_vec {
    ($V:ident, $F:ident, $T:ty, $n:literal, $($f:ident),+) => {
        impl $V {
            #[inline]
            pub const fn new($($f: $T),+) -> Self { Self { $($f),+ } }

            #[inline]
            pub const fn zero() -> Self { Self { $($f: 0),+ } }

            #[inline]
            pub const fn splat(v: $T) -> Self { Self { $($f: v),+ } }

            #[inline]
            pub fn dot(self, rhs: Self) -> $T {
                0 $(+ self.$f * rhs.$f)+
            }

            #[inline]
            pub fn norm_sq(self) -> $T { self.dot(self) }

            /// Squared distance, symmetric in its arguments. Per-component
            /// differences are taken with `abs_diff` so unsigned vectors never
            /// underflow.
            #[inline]
            pub fn distance_sq(self, other: Self) -> $T {
                0 $(+ {
                    let d = self.$f.abs_diff(other.$f) as $T;
                    d * d
                })+
            }

            #[inline]
            pub fn hadamard(self, other: Self) -> Self {
                Self { $($f: self.$f * other.$f),+ }
            }

            #[inline]
            pub fn is_zero(self) -> bool { true $(&& self.$f == 0)+ }

            #[inline]
            pub fn as_array(&self) -> [$T; $n] { [$(self.$f),+] }

            /// Convert to a float vector of the same dimension.
            #[inline]
            pub fn as_float<S: Scalar>(self) -> $F<S> {
                $F { $($f: S::from_f64(self.$f as f64)),+ }
            }
        }

        impl From<[$T; $n]> for $V {
            fn from(a: [$T; $n]) -> Self {
                let [$($f),+] = a;
                Self { $($f),+ }
            }
        }

        impl From<$V> for [$T; $n] {
            fn from(v: $V) -> Self { [$(v.$f),+] }
        }

        impl core::ops::Index<usize> for $V {
            type Output = $T;
            #[inline]
            fn index(&self, i: usize) -> &$T {
                let fields = [$(&self.$f),+];
                fields[i]
            }
        }

        impl core::ops::Add for $V {
            type Output = Self;
            #[inline] fn add(self, rhs: Self) -> Self { Self { $($f: self.$f + rhs.$f),+ } }
        }

        impl core::ops::Sub for $V {
            type Output = Self;
            #[inline] fn sub(self, rhs: Self) -> Self { Self { $($f: self.$f - rhs.$f),+ } }
        }

        impl core::ops::Mul<$T> for $V {
            type Output = Self;
            #[inline] fn mul(self, rhs: $T) -> Self { Self { $($f: self.$f * rhs),+ } }
        }

        impl core::ops::Div<$T> for $V {
            type Output = Self;
            #[inline] fn div(self, rhs: $T) -> Self { Self { $($f: self.$f / rhs),+ } }
        }

        impl core::ops::Mul<$V> for $T {
            type Output = $V;
            #[inline] fn mul(self, rhs: $V) -> $V { rhs * self }
        }

        impl core::ops::AddAssign for $V {
            #[inline] fn add_assign(&mut self, rhs: Self) { $(self.$f += rhs.$f;)+ }
        }

        impl core::ops::SubAssign for $V {
            #[inline] fn sub_assign(&mut self, rhs: Self) { $(self.$f -= rhs.$f;)+ }
        }

        impl core::ops::MulAssign<$T> for $V {
            #[inline] fn mul_assign(&mut self, rhs: $T) { $(self.$f *= rhs;)+ }
        }

        impl core::ops::DivAssign<$T> for $V {
            #[inline] fn div_assign(&mut self, rhs: $T) { $(self.$f /= rhs;)+ }
        }

        impl core::fmt::Display for $V {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                let parts = [$(self.$f),+];
                write!(f, "(")?;
                for (i, p) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", p)?;
                }
                write!(f, ")")
            }
        }
    };
}

macro_rules! impl_int_vec_neg {
    ($V:ident, $($f:ident),+) => {
        impl core::ops::Neg for $V {
            type Output = Self;
            #[inline] fn neg(self) -> Self { Self { $($f: -self.$f),+ } }
        }
    };
}
