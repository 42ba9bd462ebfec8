//! Fixed-point positions.
//!
//! World positions use fixed-point arithmetic so they compare exactly
//! across platforms and survive serialization without rounding.

use fixed::types::I32F32;
use serde::{Deserialize, Serialize};

/// Fixed-point number type for world coordinates.
///
/// Uses 32 bits for integer part and 32 bits for fractional part.
pub type Fixed = I32F32;

/// Fixed-point 2D vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vec2Fixed {
    /// X coordinate.
    #[serde(with = "fixed_serde")]
    pub x: Fixed,
    /// Y coordinate.
    #[serde(with = "fixed_serde")]
    pub y: Fixed,
}

/// Serde support for fixed-point numbers.
///
/// Serializes fixed-point numbers as their raw bit representation (i64)
/// to preserve exact precision across serialization boundaries.
pub mod fixed_serde {
    use super::Fixed;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a fixed-point number as its raw bit representation.
    pub fn serialize<S>(value: &Fixed, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.to_bits().serialize(serializer)
    }

    /// Deserialize a fixed-point number from its raw bit representation.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Fixed, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = i64::deserialize(deserializer)?;
        Ok(Fixed::from_bits(bits))
    }
}

impl Vec2Fixed {
    /// Create a new fixed-point vector.
    #[must_use]
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// Zero vector.
    pub const ZERO: Self = Self {
        x: Fixed::ZERO,
        y: Fixed::ZERO,
    };

    /// Create a vector from whole world units.
    #[must_use]
    pub fn from_units(x: i32, y: i32) -> Self {
        Self::new(Fixed::from_num(x), Fixed::from_num(y))
    }

    /// Truncate to whole world units.
    #[must_use]
    pub fn to_units(self) -> (i32, i32) {
        (self.x.to_num::<i32>(), self.y.to_num::<i32>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_round_trip_whole_numbers() {
        let v = Vec2Fixed::from_units(-12, 340);
        assert_eq!(v.to_units(), (-12, 340));
    }

    #[test]
    fn test_to_units_truncates_fraction() {
        let v = Vec2Fixed::new(Fixed::from_num(2.75), Fixed::from_num(9.5));
        assert_eq!(v.to_units(), (2, 9));
    }

    #[test]
    fn test_serde_preserves_bits() {
        let v = Vec2Fixed::new(Fixed::from_num(1.125), Fixed::from_num(-3));
        let text = ron::to_string(&v).expect("serialize");
        let back: Vec2Fixed = ron::from_str(&text).expect("deserialize");
        assert_eq!(back, v);
    }
}
