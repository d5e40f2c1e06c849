use super::{Aabb, Ray3};
use crate::{Scalar, Vec3};

#[derive(Clone, Copy, Debug)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere<S> {
    pub center: Vec3<S>,
    pub radius: S,
}

impl<S: Scalar> Sphere<S> {
    #[inline]
    pub fn new(center: Vec3<S>, radius: S) -> Self {
        debug_assert!(radius >= S::ZERO, "sphere radius must be non-negative");
        Self { center, radius }
    }

    /// Sphere centered on the bounding box of `points` that encloses all of
    /// them. Not minimal. Returns `None` for an empty slice.
    pub fn bounding(points: &[Vec3<S>]) -> Option<Self> {
        let center = Aabb::from_points(points)?.center();
        let radius_sq = points
            .iter()
            .fold(S::ZERO, |acc, p| acc.max(p.distance_sq(center)));
        Some(Self { center, radius: radius_sq.sqrt() })
    }

    #[inline]
    pub fn contains_point(&self, p: Vec3<S>) -> bool {
        p.distance_sq(self.center) <= self.radius * self.radius
    }

    /// True when the spheres touch or overlap.
    #[inline]
    pub fn intersects_sphere(&self, other: &Sphere<S>) -> bool {
        let r = self.radius + other.radius;
        self.center.distance_sq(other.center) <= r * r
    }

    /// True when the ray passes within `radius` of the center. A ray starting
    /// inside the sphere always hits. A zero-direction ray is its origin
    /// point and hits only when that point is inside.
    pub fn intersects_ray(&self, ray: &Ray3<S>) -> bool {
        let w = self.center - ray.origin;
        let w_sq = w.norm_sq();
        let r_sq = self.radius * self.radius;
        let proj = ray.direction.dot(w);

        // Sphere behind an outside origin
        if proj < S::ZERO && w_sq > r_sq {
            return false;
        }
        let v_sq = ray.direction.norm_sq();
        if v_sq.approx_zero() {
            return w_sq <= r_sq;
        }
        // |w|^2 sin^2 between ray and center, scaled by |v|^2
        v_sq * w_sq - proj * proj <= v_sq * r_sq
    }
}
