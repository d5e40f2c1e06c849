//! Geometric primitives and the distance / intersection queries between them.
//!
//! Every query is a closed-form computation over plain values. Degenerate
//! inputs (zero-length directions, parallel lines, collinear plane points)
//! produce well-defined fallbacks rather than NaNs.

mod aabb;
mod line;
mod plane;
mod sphere;

pub use aabb::Aabb;
pub use line::{Line3, LineSegment3, Linear, Ray3};
pub use plane::Plane;
pub use sphere::Sphere;
