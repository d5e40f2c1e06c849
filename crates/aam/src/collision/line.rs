use crate::{Scalar, Vec3};

/// A parametric primitive `origin + t * direction` whose parameter is
/// restricted to some interval.
///
/// [`Line3`] accepts any `t`, [`Ray3`] clamps to `[0, ∞)` and
/// [`LineSegment3`] to `[0, 1]`. The provided methods work for every
/// primitive and every pairing of primitives.
pub trait Linear<S: Scalar> {
    fn origin(&self) -> Vec3<S>;

    fn direction(&self) -> Vec3<S>;

    /// Clamp a parameter into the primitive's valid range.
    fn clamp_param(&self, t: S) -> S;

    #[inline]
    fn point_at(&self, t: S) -> Vec3<S> {
        self.origin() + self.direction() * t
    }

    /// Parameter of the point closest to `p`. A zero direction collapses the
    /// primitive to its origin.
    fn closest_param(&self, p: Vec3<S>) -> S {
        let d = self.direction();
        let v_sq = d.norm_sq();
        if v_sq.approx_zero() {
            return self.clamp_param(S::ZERO);
        }
        self.clamp_param((p - self.origin()).dot(d) / v_sq)
    }

    #[inline]
    fn closest_point(&self, p: Vec3<S>) -> Vec3<S> {
        self.point_at(self.closest_param(p))
    }

    /// Squared distance from `p` to the primitive.
    #[inline]
    fn distance_sq(&self, p: Vec3<S>) -> S {
        self.closest_point(p).distance_sq(p)
    }

    /// Closest pair of points `(on self, on other)`.
    fn closest_points<L: Linear<S>>(&self, other: &L) -> (Vec3<S>, Vec3<S>)
    where
        Self: Sized,
    {
        let (s, t) = closest_params(self, other);
        (self.point_at(s), other.point_at(t))
    }

    /// Squared distance between the two primitives.
    fn distance_sq_to<L: Linear<S>>(&self, other: &L) -> S
    where
        Self: Sized,
    {
        let (a, b) = self.closest_points(other);
        a.distance_sq(b)
    }
}

// Closest-point parameters for two clamped parametric primitives
// (Ericson, Real-Time Collision Detection 5.1.9, with the [0, 1] clamps
// replaced by each primitive's own range).
fn closest_params<S, A, B>(pa: &A, pb: &B) -> (S, S)
where
    S: Scalar,
    A: Linear<S>,
    B: Linear<S>,
{
    let d1 = pa.direction();
    let d2 = pb.direction();
    let r = pa.origin() - pb.origin();
    let a = d1.norm_sq();
    let e = d2.norm_sq();
    let f = d2.dot(r);

    // Both degenerate to points
    if a.approx_zero() && e.approx_zero() {
        return (pa.clamp_param(S::ZERO), pb.clamp_param(S::ZERO));
    }
    // First is a point: project it onto the second
    if a.approx_zero() {
        return (pa.clamp_param(S::ZERO), pb.clamp_param(f / e));
    }

    let c = d1.dot(r);
    // Second is a point
    if e.approx_zero() {
        return (pa.clamp_param(-c / a), pb.clamp_param(S::ZERO));
    }

    let b = d1.dot(d2);
    let denom = a * e - b * b;

    // Parallel directions have no unique solution; start from the first
    // origin and let the clamping below settle the rest.
    let mut s = if denom > S::EPSILON * a * e {
        pa.clamp_param((b * f - c * e) / denom)
    } else {
        pa.clamp_param(S::ZERO)
    };

    let t_free = (b * s + f) / e;
    let t = pb.clamp_param(t_free);
    if t != t_free {
        s = pa.clamp_param((t * b - c) / a);
    }
    (s, t)
}

macro_rules! linear_primitive {
    ($(#[$m:meta])* $name:ident, |$t:ident| $clamp:expr) => {
        $(#[$m])*
        #[derive(Clone, Copy, Debug)]
        #[repr(C)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name<S> {
            pub origin: Vec3<S>,
            pub direction: Vec3<S>,
        }

        impl<S: Scalar> $name<S> {
            #[inline]
            pub fn new(origin: Vec3<S>, direction: Vec3<S>) -> Self {
                Self { origin, direction }
            }
        }

        impl<S: Scalar> Linear<S> for $name<S> {
            #[inline]
            fn origin(&self) -> Vec3<S> { self.origin }

            #[inline]
            fn direction(&self) -> Vec3<S> { self.direction }

            #[inline]
            fn clamp_param(&self, $t: S) -> S { $clamp }
        }
    };
}

linear_primitive!(
    /// Infinite line through `origin` along `direction`.
    Line3, |t| t
);

linear_primitive!(
    /// Half-line starting at `origin` (`t >= 0`).
    Ray3, |t| t.max(S::ZERO)
);

linear_primitive!(
    /// Segment from `origin` to `origin + direction` (`t` in `[0, 1]`).
    LineSegment3, |t| t.clamp(S::ZERO, S::ONE)
);

impl<S: Scalar> LineSegment3<S> {
    #[inline]
    pub fn from_endpoints(start: Vec3<S>, end: Vec3<S>) -> Self {
        Self::new(start, end - start)
    }

    #[inline]
    pub fn end(&self) -> Vec3<S> {
        self.origin + self.direction
    }

    #[inline]
    pub fn length(&self) -> S {
        self.direction.norm()
    }
}
