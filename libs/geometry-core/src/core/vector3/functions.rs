//! Free functions over [`Vector3`].
//!
//! These mirror the inherent methods so that geometry code can be written in
//! the `norm(v)` / `cross(u, v)` style. All of them are pure.

use std::f64::consts::PI;

use super::Vector3;

/// Euclidean length.
///
/// # Examples
/// ```
/// use geometry_core::{norm, Vector3};
/// assert_eq!(norm(Vector3::new(2.0, 3.0, 6.0)), 7.0);
/// ```
#[inline]
pub fn norm(v: Vector3) -> f64 {
    v.norm()
}

/// Squared Euclidean length. Prefer this when only comparing magnitudes.
#[inline]
pub fn norm2(v: Vector3) -> f64 {
    v.norm2()
}

/// `v` scaled to unit length; NaN components for the zero vector.
#[inline]
pub fn unit(v: Vector3) -> Vector3 {
    v.unit()
}

/// Right-handed cross product.
#[inline]
pub fn cross(u: Vector3, v: Vector3) -> Vector3 {
    u.cross(v)
}

/// Inner product.
#[inline]
pub fn dot(u: Vector3, v: Vector3) -> f64 {
    u.dot(v)
}

/// Unsigned angle between `u` and `v` in `[0, π]`.
///
/// Uses `atan2(|u × v|, u · v)`, which stays accurate for nearly parallel
/// and nearly opposite vectors where `acos` of the normalized dot product
/// loses precision. Inputs need not be normalized. Returns `0` when either
/// input is the zero vector.
///
/// # Examples
/// ```
/// use geometry_core::{angle, Vector3};
/// use std::f64::consts::FRAC_PI_2;
/// let theta = angle(Vector3::X, Vector3::new(0.0, 4.0, 0.0));
/// assert!((theta - FRAC_PI_2).abs() < 1e-15);
/// ```
#[inline]
pub fn angle(u: Vector3, v: Vector3) -> f64 {
    cross(u, v).norm().atan2(dot(u, v))
}

/// Signed angle from `u` to `v` after projecting both into the plane
/// perpendicular to `normal`, in `(-π, π]`.
///
/// Positive angles are counter-clockwise when viewed from the side `normal`
/// points toward. `normal` need not be unit length. Components of `u` and `v`
/// along `normal` are ignored.
///
/// # Examples
/// ```
/// use geometry_core::{angle_in_plane, Vector3};
/// use std::f64::consts::FRAC_PI_2;
///
/// let theta = angle_in_plane(Vector3::X, Vector3::new(0.0, -1.0, 3.0), Vector3::Z);
/// assert!((theta + FRAC_PI_2).abs() < 1e-15);
/// ```
pub fn angle_in_plane(u: Vector3, v: Vector3, normal: Vector3) -> f64 {
    let n = unit(normal);
    let basis_x = unit(u - n * dot(u, n));
    let basis_y = cross(n, basis_x);

    let theta = dot(v, basis_y).atan2(dot(v, basis_x));
    if theta == -PI {
        PI
    } else {
        theta
    }
}

/// True when no component of `u` is NaN or infinite.
#[inline]
pub fn is_finite(u: Vector3) -> bool {
    u.is_finite()
}

/// Per-component minimum.
///
/// # Examples
/// ```
/// use geometry_core::{componentwise_min, Vector3};
/// let m = componentwise_min(Vector3::new(1.0, 5.0, -2.0), Vector3::new(3.0, 0.0, -1.0));
/// assert_eq!(m, Vector3::new(1.0, 0.0, -2.0));
/// ```
#[inline]
pub fn componentwise_min(u: Vector3, v: Vector3) -> Vector3 {
    Vector3::new(u.x.min(v.x), u.y.min(v.y), u.z.min(v.z))
}

/// Per-component maximum.
#[inline]
pub fn componentwise_max(u: Vector3, v: Vector3) -> Vector3 {
    Vector3::new(u.x.max(v.x), u.y.max(v.y), u.z.max(v.z))
}

/// Widens a single precision `glam` vector.
///
/// # Examples
/// ```
/// use geometry_core::{from_glam, Vector3};
/// assert_eq!(from_glam(glam::Vec3::new(1.0, 2.5, -3.0)), Vector3::new(1.0, 2.5, -3.0));
/// ```
#[inline]
pub fn from_glam(v: glam::Vec3) -> Vector3 {
    Vector3::from(v)
}
