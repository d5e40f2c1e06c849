use super::Ray3;
use crate::{Scalar, Vec3};

/// Axis-aligned bounding box, `min <= max` on every axis.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb<S> {
    pub min: Vec3<S>,
    pub max: Vec3<S>,
}

impl<S: Scalar> Aabb<S> {
    #[inline]
    pub fn new(min: Vec3<S>, max: Vec3<S>) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y && min.z <= max.z,
            "aabb min must not exceed max"
        );
        Self { min, max }
    }

    /// Tightest box around `points`, or `None` if there are none.
    pub fn from_points(points: &[Vec3<S>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest.iter().fold((*first, *first), |(lo, hi), p| {
            (lo.component_min(*p), hi.component_max(*p))
        });
        Some(Self { min, max })
    }

    #[inline]
    pub fn center(&self) -> Vec3<S> {
        (self.min + self.max) * S::HALF
    }

    /// Half-size along each axis.
    #[inline]
    pub fn extents(&self) -> Vec3<S> {
        (self.max - self.min) * S::HALF
    }

    /// Boundary points count as inside.
    #[inline]
    pub fn contains_point(&self, p: Vec3<S>) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// True when the boxes overlap or touch on every axis.
    #[inline]
    pub fn intersects_aabb(&self, other: &Aabb<S>) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Slab test. The entry parameter starts at zero, so boxes entirely
    /// behind the ray origin are missed.
    pub fn intersects_ray(&self, ray: &Ray3<S>) -> bool {
        let mut t_min = S::ZERO;
        let mut t_max = S::INFINITY;

        for i in 0..3 {
            let o = ray.origin[i];
            let d = ray.direction[i];
            if d == S::ZERO {
                // Parallel to this slab: the origin must already be inside it
                if o < self.min[i] || o > self.max[i] {
                    return false;
                }
                continue;
            }

            let inv = d.recip();
            let mut near = (self.min[i] - o) * inv;
            let mut far = (self.max[i] - o) * inv;
            if inv < S::ZERO {
                core::mem::swap(&mut near, &mut far);
            }
            t_min = t_min.max(near);
            t_max = t_max.min(far);
            if t_min > t_max {
                return false;
            }
        }
        true
    }
}
