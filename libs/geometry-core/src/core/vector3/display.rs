//! Text form of [`Vector3`]: `<x, y, z>`.
//!
//! Components use `f64`'s shortest round-trip formatting, so `Display`
//! followed by `FromStr` recovers the exact bits of finite values. Formatter
//! flags are forwarded to each component: `{:.3}` sets the precision, `{:+}`
//! forces a sign and `{:>8}` pads every component (not the whole literal).

use std::fmt;
use std::str::FromStr;

use super::Vector3;
use crate::error::GeometryError;

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        fmt::Display::fmt(&self.x, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.y, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.z, f)?;
        f.write_str(">")
    }
}

/// Parses `<x, y, z>`. Whitespace around components and brackets is ignored.
///
/// # Examples
/// ```
/// use geometry_core::Vector3;
/// let v: Vector3 = " < 1, -2.5 ,3e2> ".parse().unwrap();
/// assert_eq!(v, Vector3::new(1.0, -2.5, 300.0));
/// assert_eq!(v.to_string().parse::<Vector3>(), Ok(v));
/// ```
impl FromStr for Vector3 {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .ok_or_else(|| parse_error(s, "expected a '<x, y, z>' literal"))?;

        let mut components = [0.0; 3];
        let mut count = 0;
        for part in body.split(',') {
            if count == components.len() {
                return Err(parse_error(s, "too many components"));
            }
            let part = part.trim();
            components[count] = part
                .parse::<f64>()
                .map_err(|e| parse_error(s, format!("component {count} ({part:?}): {e}")))?;
            count += 1;
        }
        if count != components.len() {
            return Err(parse_error(s, format!("expected 3 components, got {count}")));
        }

        Ok(Self::from(components))
    }
}

fn parse_error(input: &str, reason: impl Into<String>) -> GeometryError {
    let reason = reason.into();
    tracing::debug!(input, reason = %reason, "rejected vector literal");
    GeometryError::ParseVector {
        input: input.to_string(),
        reason,
    }
}
