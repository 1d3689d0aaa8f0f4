//! Plain-old-data 3D vector over `f64`.
//!
//! [`Vector3`] is a `#[repr(C)]` aggregate of three public components laid
//! out in index order, so it can be addressed both by name (`v.x`) and by
//! index (`v[0]`). There are no invariants to maintain: every bit pattern is a
//! valid value, and domain errors (zero-length normalization, division by
//! zero) surface as IEEE NaN/Infinity rather than as Rust errors.
//!
//! "No value" has two spellings. The NaN sentinel [`Vector3::undefined`] is
//! kept for code that stores vectors in flat buffers; new code should prefer
//! the `Option`-returning helpers ([`Vector3::defined`],
//! [`Vector3::try_unit`]).

use std::hash::{Hash, Hasher};

use crate::error::{GeometryError, GeometryResult};

pub mod display;
pub mod functions;
pub mod ops;
pub mod tolerance;

/// A 3-component vector of double precision scalars.
///
/// # Examples
/// ```
/// use geometry_core::Vector3;
///
/// let mut v = Vector3::new(3.0, 0.0, 4.0);
/// assert_eq!(v.norm(), 5.0);
/// v[1] = 2.0;
/// assert_eq!(v.y, 2.0);
/// ```
///
/// # Hashing
///
/// `Vector3` implements `Eq` and `Hash` so it can key `HashMap`s and
/// `HashSet`s. Equality is exact componentwise `f64` comparison, so `-0.0`
/// and `+0.0` are equal and hash alike. A vector holding NaN (such as
/// [`Vector3::undefined`]) is not equal to itself, which breaks the
/// reflexivity `Eq` promises: inserted NaN keys can never be found again.
/// Check [`Vector3::is_defined`] before using a vector as a key.
///
/// ```
/// use geometry_core::Vector3;
/// use std::collections::HashSet;
///
/// let mut seen = HashSet::new();
/// seen.insert(Vector3::new(0.0, 1.0, 2.0));
/// assert!(seen.contains(&Vector3::new(-0.0, 1.0, 2.0)));
///
/// seen.insert(Vector3::undefined());
/// assert!(!seen.contains(&Vector3::undefined()));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Vector3 {
    /// Component 0.
    pub x: f64,
    /// Component 1.
    pub y: f64,
    /// Component 2.
    pub z: f64,
}

impl Vector3 {
    /// All components zero.
    pub const ZERO: Self = Self::constant(0.0);
    /// All components `+∞`.
    pub const INFINITY: Self = Self::constant(f64::INFINITY);
    /// All components NaN.
    pub const UNDEFINED: Self = Self::constant(f64::NAN);
    /// Unit vector along the X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from its three components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with every component set to `c`.
    ///
    /// # Examples
    /// ```
    /// use geometry_core::Vector3;
    /// assert_eq!(Vector3::constant(2.5), Vector3::new(2.5, 2.5, 2.5));
    /// ```
    #[inline]
    pub const fn constant(c: f64) -> Self {
        Self { x: c, y: c, z: c }
    }

    /// The zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// A vector with every component set to positive infinity.
    ///
    /// Useful as the starting value of a running minimum.
    #[inline]
    pub const fn infinity() -> Self {
        Self::INFINITY
    }

    /// The NaN sentinel standing for "no valid geometric value".
    ///
    /// # Examples
    /// ```
    /// use geometry_core::Vector3;
    /// let v = Vector3::undefined();
    /// assert!(!v.is_defined());
    /// assert_eq!(v.defined(), None);
    /// ```
    #[inline]
    pub const fn undefined() -> Self {
        Self::UNDEFINED
    }

    // =========================================================================
    // COMPONENT ACCESS
    // =========================================================================

    /// Returns component `index`, or `None` when `index > 2`.
    ///
    /// Non-panicking counterpart of `v[index]`.
    ///
    /// # Examples
    /// ```
    /// use geometry_core::Vector3;
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.get(2), Some(3.0));
    /// assert_eq!(v.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    /// Overwrites component `index`.
    ///
    /// # Errors
    /// [`GeometryError::IndexOutOfRange`] when `index > 2`; the vector is left
    /// untouched.
    pub fn try_set(&mut self, index: usize, value: f64) -> GeometryResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(GeometryError::IndexOutOfRange(index)),
        }
        Ok(())
    }

    /// Components as an array in index order.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Components narrowed to single precision, for render buffers.
    ///
    /// # Examples
    /// ```
    /// use geometry_core::Vector3;
    /// let v = Vector3::new(0.5, -1.0, 1.0e40);
    /// assert_eq!(v.to_float_array(), [0.5_f32, -1.0, f32::INFINITY]);
    /// ```
    #[inline]
    pub fn to_float_array(self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }

    // =========================================================================
    // PREDICATES
    // =========================================================================

    /// True when no component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// True when no component is NaN. Infinite components count as defined.
    ///
    /// # Examples
    /// ```
    /// use geometry_core::Vector3;
    /// assert!(Vector3::infinity().is_defined());
    /// assert!(!Vector3::infinity().is_finite());
    /// ```
    #[inline]
    pub fn is_defined(self) -> bool {
        !(self.x.is_nan() || self.y.is_nan() || self.z.is_nan())
    }

    /// Maps the NaN sentinel to `None`.
    #[inline]
    pub fn defined(self) -> Option<Self> {
        self.is_defined().then_some(self)
    }

    // =========================================================================
    // ALGEBRA
    // =========================================================================

    /// Inner product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn norm2(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn norm(self) -> f64 {
        self.norm2().sqrt()
    }

    /// Returns this vector scaled to unit length.
    ///
    /// The zero vector yields NaN components.
    #[inline]
    pub fn unit(self) -> Self {
        self / self.norm()
    }

    /// Scales this vector to unit length in place.
    ///
    /// The zero vector becomes [`Vector3::undefined`]-like NaN components;
    /// use [`Vector3::try_normalize`] when the input may be degenerate.
    ///
    /// # Examples
    /// ```
    /// use geometry_core::Vector3;
    /// let mut v = Vector3::new(0.0, 3.0, 4.0);
    /// v.normalize();
    /// assert_eq!(v, Vector3::new(0.0, 0.6, 0.8));
    /// ```
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.unit();
    }

    /// Unit vector, or `None` when the length is zero, infinite or NaN.
    ///
    /// # Examples
    /// ```
    /// use geometry_core::Vector3;
    /// assert_eq!(Vector3::new(2.0, 0.0, 0.0).try_unit(), Some(Vector3::X));
    /// assert_eq!(Vector3::zero().try_unit(), None);
    /// ```
    pub fn try_unit(self) -> Option<Self> {
        let len = self.norm();
        if len > 0.0 && len.is_finite() {
            Some(self / len)
        } else {
            tracing::trace!(vector = %self, length = len, "degenerate vector has no direction");
            None
        }
    }

    /// Normalizes in place when possible. Returns `false` and leaves the
    /// vector unchanged when [`Vector3::try_unit`] would return `None`.
    pub fn try_normalize(&mut self) -> bool {
        match self.try_unit() {
            Some(unit) => {
                *self = unit;
                true
            }
            None => false,
        }
    }

    /// Rotates this vector by `theta` radians about `axis` using Rodrigues'
    /// formula.
    ///
    /// `axis` does not need unit length; it is normalized here. A zero axis
    /// produces NaN components.
    ///
    /// # Examples
    /// ```
    /// use geometry_core::Vector3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let r = Vector3::X.rotate_around(Vector3::new(0.0, 0.0, 5.0), FRAC_PI_2);
    /// assert!((r - Vector3::Y).norm() < 1e-12);
    /// ```
    pub fn rotate_around(self, axis: Self, theta: f64) -> Self {
        let k = axis.unit();
        let (sin, cos) = theta.sin_cos();
        self * cos + k.cross(self) * sin + k * (k.dot(self) * (1.0 - cos))
    }
}

// =============================================================================
// HASHING
// =============================================================================

// Not reflexive for NaN components; see the type docs.
impl Eq for Vector3 {}

impl Hash for Vector3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.to_array() {
            // +0.0 == -0.0, so both must feed the same bits
            let c = if c == 0.0 { 0.0 } else { c };
            c.to_bits().hash(state);
        }
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = GeometryError;

    fn try_from(values: &[f64]) -> GeometryResult<Self> {
        match *values {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(GeometryError::InvalidLength {
                expected: 3,
                actual: values.len(),
            }),
        }
    }
}

impl From<glam::Vec3> for Vector3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(f64::from(v.x), f64::from(v.y), f64::from(v.z))
    }
}

impl From<glam::DVec3> for Vector3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for glam::DVec3 {
    #[inline]
    fn from(v: Vector3) -> Self {
        glam::DVec3::new(v.x, v.y, v.z)
    }
}
