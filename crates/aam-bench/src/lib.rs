//! Shared helpers for aam benchmarks: seeded RNG, input generators.

use aam::{Aabb, LineSegment3, Mat3, Mat4, Quat, Ray3, Sphere, Vec3};

/// Simple xoshiro256** PRNG for reproducible benchmarks (no rand dependency in lib).
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // SplitMix64 to expand seed into state
        let mut z = seed;
        let mut s = [0u64; 4];
        for slot in &mut s {
            z = z.wrapping_add(0x9e3779b97f4a7c15);
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            *slot = z ^ (z >> 31);
        }
        Self { s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);
        result
    }

    /// Uniform f64 in [-1, 1]
    pub fn f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64) * 2.0 - 1.0
    }

    /// Uniform f32 in [-1, 1]
    pub fn f32(&mut self) -> f32 {
        self.f64() as f32
    }

    pub fn vec3(&mut self) -> Vec3<f64> {
        Vec3::new(self.f64(), self.f64(), self.f64())
    }

    pub fn vec3f32(&mut self) -> Vec3<f32> {
        Vec3::new(self.f32(), self.f32(), self.f32())
    }
}

pub fn make_rng() -> Rng {
    Rng::new(0xDEAD_BEEF_CAFE_BABE)
}

// --- aam generators ---

pub fn random_vec3f32(n: usize) -> Vec<Vec3<f32>> {
    let mut rng = make_rng();
    (0..n).map(|_| rng.vec3f32()).collect()
}

pub fn random_vec3f64(n: usize) -> Vec<Vec3<f64>> {
    let mut rng = make_rng();
    (0..n).map(|_| rng.vec3()).collect()
}

pub fn random_mat3f64(n: usize) -> Vec<Mat3<f64>> {
    random_f64_mat3s(n)
        .into_iter()
        .map(|m| Mat3::new(m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8]))
        .collect()
}

/// Column-major data, the same layout the glam and nalgebra benches load.
pub fn random_mat4f64(n: usize) -> Vec<Mat4<f64>> {
    random_f64_mat4s(n)
        .into_iter()
        .map(|m| {
            Mat4::new(
                m[0], m[4], m[8], m[12],
                m[1], m[5], m[9], m[13],
                m[2], m[6], m[10], m[14],
                m[3], m[7], m[11], m[15],
            )
        })
        .collect()
}

pub fn random_quat(n: usize) -> Vec<Quat<f64>> {
    random_f64_quads(n)
        .into_iter()
        .map(|q| Quat::new(q[0], q[1], q[2], q[3]).normalize())
        .collect()
}

/// Rotation matrices, for the decomposition benches.
pub fn random_rotations(n: usize) -> Vec<Mat3<f64>> {
    random_quat(n).iter().map(|q| q.to_mat3()).collect()
}

pub fn random_segments(n: usize) -> Vec<LineSegment3<f64>> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| LineSegment3::from_endpoints(rng.vec3() * 10.0, rng.vec3() * 10.0))
        .collect()
}

pub fn random_rays(n: usize) -> Vec<Ray3<f64>> {
    let mut rng = make_rng();
    (0..n).map(|_| Ray3::new(rng.vec3() * 10.0, rng.vec3())).collect()
}

pub fn random_spheres(n: usize) -> Vec<Sphere<f64>> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Sphere::new(rng.vec3() * 10.0, rng.f64().abs() * 3.0))
        .collect()
}

pub fn random_aabbs(n: usize) -> Vec<Aabb<f64>> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            let center = rng.vec3() * 10.0;
            let half = rng.vec3().abs() * 3.0;
            Aabb::new(center - half, center + half)
        })
        .collect()
}

// --- raw data for the glam/nalgebra sides (converted in bench code) ---

pub fn random_f64_triples(n: usize) -> Vec<[f64; 3]> {
    let mut rng = make_rng();
    (0..n).map(|_| [rng.f64(), rng.f64(), rng.f64()]).collect()
}

pub fn random_f32_triples(n: usize) -> Vec<[f32; 3]> {
    let mut rng = make_rng();
    (0..n).map(|_| [rng.f32(), rng.f32(), rng.f32()]).collect()
}

/// `[w, x, y, z]`
pub fn random_f64_quads(n: usize) -> Vec<[f64; 4]> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| [rng.f64(), rng.f64(), rng.f64(), rng.f64()])
        .collect()
}

fn random_flat<const N: usize>(n: usize) -> Vec<[f64; N]> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            let mut m = [0.0f64; N];
            for v in &mut m {
                *v = rng.f64();
            }
            m
        })
        .collect()
}

/// Column-major 4x4 data.
pub fn random_f64_mat4s(n: usize) -> Vec<[f64; 16]> {
    random_flat(n)
}

pub fn random_f32_mat4s(n: usize) -> Vec<[f32; 16]> {
    random_f64_mat4s(n)
        .into_iter()
        .map(|m| m.map(|v| v as f32))
        .collect()
}

/// Row-major 3x3 data.
pub fn random_f64_mat3s(n: usize) -> Vec<[f64; 9]> {
    random_flat(n)
}
