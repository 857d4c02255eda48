//! # Unit Types
//!
//! Type-safe wrappers for the units used in spring design. These are plain
//! `f64` newtypes that serialize as bare numbers.
//!
//! ## Metric Units
//!
//! Spring geometry and material data are metric throughout:
//! - Length: millimeters (mm)
//! - Stress / modulus: megapascals (MPa = N/mm²)
//! - Spring rate: newtons per millimeter (N/mm), kilogram-force per millimeter (kgf/mm)
//! - Temperature: degrees Celsius (°C)
//!
//! ## Example
//!
//! ```rust
//! use spring_core::units::{KgfPerMm, NewtonsPerMm};
//!
//! let rate = NewtonsPerMm(10.0);
//! let kgf: KgfPerMm = rate.into();
//! assert!((kgf.0 - 1.0197).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Conversion factor from N/mm to kgf/mm.
///
/// This is the rounded value (1 / 9.80665 ≈ 0.101972) that product sheets quote;
/// results must reproduce it exactly.
pub const KGF_PER_NEWTON: f64 = 0.10197;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

// ============================================================================
// Stress Units
// ============================================================================

/// Stress or modulus in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

// ============================================================================
// Spring Rate Units
// ============================================================================

/// Spring rate in newtons per millimeter of deflection
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonsPerMm(pub f64);

/// Spring rate in kilogram-force per millimeter of deflection
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgfPerMm(pub f64);

impl From<NewtonsPerMm> for KgfPerMm {
    fn from(rate: NewtonsPerMm) -> Self {
        KgfPerMm(rate.0 * KGF_PER_NEWTON)
    }
}

impl From<KgfPerMm> for NewtonsPerMm {
    fn from(rate: KgfPerMm) -> Self {
        NewtonsPerMm(rate.0 / KGF_PER_NEWTON)
    }
}

// ============================================================================
// Temperature Units
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Megapascals);
impl_arithmetic!(NewtonsPerMm);
impl_arithmetic!(KgfPerMm);
impl_arithmetic!(Celsius);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newtons_to_kgf_uses_fixed_factor() {
        let rate = NewtonsPerMm(2.5);
        let kgf: KgfPerMm = rate.into();
        assert_eq!(kgf.0, 2.5 * 0.10197);
    }

    #[test]
    fn test_kgf_back_to_newtons() {
        let kgf = KgfPerMm(0.10197);
        let rate: NewtonsPerMm = kgf.into();
        assert!((rate.0 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let od = Millimeters(20.0);
        let d = Millimeters(2.0);
        assert_eq!((od - d).0, 18.0);
        assert_eq!((od + d).0, 22.0);
        assert_eq!((d * 2.0).0, 4.0);
        assert_eq!((od / 4.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let g = Megapascals(79300.0);
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "79300.0");

        let roundtrip: Megapascals = serde_json::from_str(&json).unwrap();
        assert_eq!(g, roundtrip);
    }
}
