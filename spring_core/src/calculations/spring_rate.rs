//! # Spring Rate Calculation
//!
//! Linear rate of a helical compression or extension spring from its wire
//! diameter, outer diameter, active coil count and wire material.
//!
//! ## Formula
//!
//! ```text
//! D = OD - d                      mean coil diameter (mm)
//! k = (G * d^4) / (8 * D^3 * n)   spring rate (N/mm)
//! k_kgf = k * 0.10197             spring rate (kgf/mm)
//! ```
//!
//! ## Not Computable vs. Error
//!
//! Non-numeric, non-finite or non-positive dimensions, and a wire diameter
//! that is not smaller than the outer diameter, leave the calculation without
//! a result. [`calculate`] reports that as `None`; [`try_calculate`] keeps the
//! reason as a [`CalcError::InvalidInput`] for front ends that want to say why.
//!
//! ## Example
//!
//! ```rust
//! use spring_core::calculations::spring_rate::{calculate, SpringRateInput};
//! use spring_core::materials::SpringMaterial;
//!
//! let input = SpringRateInput {
//!     wire_diameter_mm: 2.0,
//!     outer_diameter_mm: 20.0,
//!     active_coils: 10.0,
//!     material: SpringMaterial::MusicWire,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.rate_newtons_per_mm - 2.7190).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::SpringMaterial;
use crate::units::{KgfPerMm, Megapascals, Millimeters, NewtonsPerMm};

/// Typed input for a spring rate calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wire_diameter_mm": 2.0,
///   "outer_diameter_mm": 20.0,
///   "active_coils": 10.0,
///   "material": "music_wire"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringRateInput {
    /// Wire diameter d (mm)
    pub wire_diameter_mm: f64,

    /// Outer coil diameter OD (mm)
    pub outer_diameter_mm: f64,

    /// Number of active coils n (fractional allowed)
    pub active_coils: f64,

    /// Wire material
    #[serde(default)]
    pub material: SpringMaterial,
}

impl SpringRateInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        check_positive("wire_diameter_mm", self.wire_diameter_mm, "Wire diameter")?;
        check_positive("outer_diameter_mm", self.outer_diameter_mm, "Outer diameter")?;
        check_positive("active_coils", self.active_coils, "Active coil count")?;

        if self.wire_diameter_mm >= self.outer_diameter_mm {
            return Err(CalcError::invalid_input(
                "wire_diameter_mm",
                self.wire_diameter_mm.to_string(),
                format!(
                    "Wire diameter must be smaller than the outer diameter ({} mm)",
                    self.outer_diameter_mm
                ),
            ));
        }
        Ok(())
    }

    /// Mean coil diameter D = OD - d
    pub fn mean_diameter(&self) -> Millimeters {
        Millimeters(self.outer_diameter_mm) - Millimeters(self.wire_diameter_mm)
    }

    /// Spring index C = D / d
    pub fn spring_index(&self) -> f64 {
        self.mean_diameter().0 / self.wire_diameter_mm
    }
}

fn check_positive(field: &str, value: f64, label: &str) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be a finite number", label),
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be positive", label),
        ));
    }
    Ok(())
}

/// Results from a spring rate calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "rateNewtonsPerMm": 2.719,
///   "rateKgPerMm": 0.2773,
///   "meanDiameterMm": 18.0,
///   "shearModulusMpa": 79300.0,
///   "springIndex": 9.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpringRateResult {
    /// Spring rate k (N/mm)
    pub rate_newtons_per_mm: f64,

    /// Spring rate in kgf/mm (k × 0.10197)
    pub rate_kg_per_mm: f64,

    /// Mean coil diameter D (mm)
    pub mean_diameter_mm: f64,

    /// Shear modulus G used (MPa)
    pub shear_modulus_mpa: f64,

    /// Spring index C = D / d
    pub spring_index: f64,
}

/// Calculate the spring rate, keeping the reason when no result is possible.
///
/// # Returns
///
/// * `Ok(SpringRateResult)` - Calculation results
/// * `Err(CalcError::InvalidInput)` - If the dimensions are not computable
pub fn try_calculate(input: &SpringRateInput) -> CalcResult<SpringRateResult> {
    input.validate()?;

    let g: Megapascals = input.material.shear_modulus();
    let d = input.wire_diameter_mm;
    let mean_d = input.mean_diameter().0;
    let n = input.active_coils;

    let k = (g.0 * d.powi(4)) / (8.0 * mean_d.powi(3) * n);
    // d^4 and D^3 can overflow or underflow for extreme dimensions
    if !k.is_finite() || k <= 0.0 {
        return Err(CalcError::invalid_input(
            "wire_diameter_mm",
            d.to_string(),
            format!("Dimensions out of range for a finite spring rate (k = {})", k),
        ));
    }
    let k_kgf: KgfPerMm = NewtonsPerMm(k).into();

    Ok(SpringRateResult {
        rate_newtons_per_mm: k,
        rate_kg_per_mm: k_kgf.0,
        mean_diameter_mm: mean_d,
        shear_modulus_mpa: g.0,
        spring_index: input.spring_index(),
    })
}

/// Calculate the spring rate.
///
/// Returns `None` when the inputs are not computable (see module docs); this
/// is the normal state of a form that is still being filled in.
pub fn calculate(input: &SpringRateInput) -> Option<SpringRateResult> {
    try_calculate(input).ok()
}

// ============================================================================
// Loose Request Boundary
// ============================================================================

/// A numeric form field that may arrive as a JSON number or as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    /// Parse to a finite number. Text is trimmed and must parse in full.
    pub fn parse(&self, field: &str) -> CalcResult<f64> {
        let value = match self {
            NumericField::Number(v) => *v,
            NumericField::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                CalcError::invalid_input(field, s.as_str(), "Not a number")
            })?,
        };
        if !value.is_finite() {
            return Err(CalcError::invalid_input(field, value.to_string(), "Not a finite number"));
        }
        Ok(value)
    }
}

impl From<f64> for NumericField {
    fn from(v: f64) -> Self {
        NumericField::Number(v)
    }
}

impl From<&str> for NumericField {
    fn from(s: &str) -> Self {
        NumericField::Text(s.to_string())
    }
}

/// Calculator request as a form or API client sends it.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wireDiameter": "2.0",
///   "outerDiameter": 20,
///   "activeCoils": "10",
///   "material": "music_wire"
/// }
/// ```
///
/// Any `material` string is accepted; unknown identifiers use music wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpringRateRequest {
    #[serde(default)]
    pub wire_diameter: Option<NumericField>,
    #[serde(default)]
    pub outer_diameter: Option<NumericField>,
    #[serde(default)]
    pub active_coils: Option<NumericField>,
    #[serde(default)]
    pub material: String,
}

impl SpringRateRequest {
    /// Build a request from raw form text
    pub fn from_text(wire_diameter: &str, outer_diameter: &str, active_coils: &str, material: &str) -> Self {
        SpringRateRequest {
            wire_diameter: Some(wire_diameter.into()),
            outer_diameter: Some(outer_diameter.into()),
            active_coils: Some(active_coils.into()),
            material: material.to_string(),
        }
    }

    /// Parse into a typed input. Fails on missing or unparseable fields;
    /// range checks are left to [`SpringRateInput::validate`].
    pub fn to_input(&self) -> CalcResult<SpringRateInput> {
        Ok(SpringRateInput {
            wire_diameter_mm: parse_field(&self.wire_diameter, "wire_diameter_mm")?,
            outer_diameter_mm: parse_field(&self.outer_diameter, "outer_diameter_mm")?,
            active_coils: parse_field(&self.active_coils, "active_coils")?,
            material: SpringMaterial::resolve(&self.material),
        })
    }
}

fn parse_field(value: &Option<NumericField>, field: &str) -> CalcResult<f64> {
    value
        .as_ref()
        .ok_or_else(|| CalcError::missing_field(field))?
        .parse(field)
}

/// Calculate from a loose request; `None` when not computable.
pub fn calculate_request(request: &SpringRateRequest) -> Option<SpringRateResult> {
    request.to_input().ok().and_then(|input| calculate(&input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn input(d: f64, od: f64, n: f64, material: SpringMaterial) -> SpringRateInput {
        SpringRateInput {
            wire_diameter_mm: d,
            outer_diameter_mm: od,
            active_coils: n,
            material,
        }
    }

    #[test]
    fn test_music_wire_example() {
        let result = calculate(&input(2.0, 20.0, 10.0, SpringMaterial::MusicWire)).unwrap();

        // k = (79300 * 16) / (8 * 5832 * 10) = 1268800 / 466560
        assert_relative_eq!(result.rate_newtons_per_mm, 1_268_800.0 / 466_560.0, max_relative = 1e-12);
        assert!((result.rate_newtons_per_mm - 2.7190).abs() < 1e-4);
        assert!((result.rate_kg_per_mm - 0.2773).abs() < 1e-4);
        assert_eq!(result.mean_diameter_mm, 18.0);
        assert_eq!(result.shear_modulus_mpa, 79300.0);
        assert_relative_eq!(result.spring_index, 9.0);
    }

    #[test]
    fn test_stainless_example() {
        let result = calculate(&input(1.0, 10.0, 5.0, SpringMaterial::Stainless)).unwrap();

        // k = 69000 / (8 * 729 * 5) = 69000 / 29160
        assert_relative_eq!(result.rate_newtons_per_mm, 69_000.0 / 29_160.0, max_relative = 1e-12);
        assert!((result.rate_newtons_per_mm - 2.3663).abs() < 1e-4);
    }

    #[test]
    fn test_formula_for_every_material() {
        let (d, od, n) = (1.6_f64, 12.5_f64, 7.5_f64);
        for mat in SpringMaterial::ALL {
            let result = calculate(&input(d, od, n, mat)).unwrap();
            let g = mat.shear_modulus().0;
            let mean_d = od - d;
            let expected = (g * d.powi(4)) / (8.0 * mean_d.powi(3) * n);
            assert_eq!(result.rate_newtons_per_mm, expected, "{}", mat.id());
        }
    }

    #[test]
    fn test_kgf_is_fixed_multiple() {
        let result = calculate(&input(3.0, 25.0, 6.0, SpringMaterial::ChromeSilicon)).unwrap();
        assert_eq!(result.rate_kg_per_mm, result.rate_newtons_per_mm * 0.10197);
    }

    #[test]
    fn test_idempotent() {
        let i = input(2.2, 17.3, 8.25, SpringMaterial::PhosphorBronze);
        let first = calculate(&i).unwrap();
        for _ in 0..5 {
            let again = calculate(&i).unwrap();
            assert_eq!(first.rate_newtons_per_mm.to_bits(), again.rate_newtons_per_mm.to_bits());
            assert_eq!(first.rate_kg_per_mm.to_bits(), again.rate_kg_per_mm.to_bits());
        }
    }

    #[test]
    fn test_wire_equal_to_outer_diameter_is_absent() {
        assert!(calculate(&input(5.0, 5.0, 3.0, SpringMaterial::MusicWire)).is_none());
        assert!(calculate(&input(6.0, 5.0, 3.0, SpringMaterial::MusicWire)).is_none());
    }

    #[test]
    fn test_non_positive_is_absent() {
        assert!(calculate(&input(-1.0, 10.0, 5.0, SpringMaterial::OilTempered)).is_none());
        assert!(calculate(&input(0.0, 10.0, 5.0, SpringMaterial::MusicWire)).is_none());
        assert!(calculate(&input(1.0, 0.0, 5.0, SpringMaterial::MusicWire)).is_none());
        assert!(calculate(&input(1.0, 10.0, 0.0, SpringMaterial::MusicWire)).is_none());
        assert!(calculate(&input(1.0, 10.0, -2.0, SpringMaterial::MusicWire)).is_none());
    }

    #[test]
    fn test_non_finite_is_absent() {
        assert!(calculate(&input(f64::NAN, 10.0, 5.0, SpringMaterial::MusicWire)).is_none());
        assert!(calculate(&input(1.0, f64::INFINITY, 5.0, SpringMaterial::MusicWire)).is_none());
    }

    #[test]
    fn test_try_calculate_reports_field() {
        let err = try_calculate(&input(5.0, 5.0, 3.0, SpringMaterial::MusicWire)).unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "wire_diameter_mm"),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = try_calculate(&input(1.0, 10.0, 0.0, SpringMaterial::MusicWire)).unwrap_err();
        assert!(err.is_not_computable());
        assert!(err.to_string().contains("active_coils"));
    }

    #[test]
    fn test_fractional_coils() {
        let whole = calculate(&input(2.0, 20.0, 10.0, SpringMaterial::MusicWire)).unwrap();
        let half_more = calculate(&input(2.0, 20.0, 10.5, SpringMaterial::MusicWire)).unwrap();
        assert!(half_more.rate_newtons_per_mm < whole.rate_newtons_per_mm);
    }

    #[test]
    fn test_extreme_dimensions_are_absent() {
        // d^4 overflows to infinity
        assert!(calculate(&input(1e100, 1e101, 1.0, SpringMaterial::MusicWire)).is_none());
        // d^4 and D^3 both underflow to zero
        assert!(calculate(&input(1e-200, 2e-200, 1.0, SpringMaterial::MusicWire)).is_none());
        // d^4 underflows, rate collapses to zero
        assert!(calculate(&input(1e-90, 1e-80, 1.0, SpringMaterial::Stainless)).is_none());

        let err = try_calculate(&input(1e100, 1e101, 1.0, SpringMaterial::MusicWire)).unwrap_err();
        assert!(err.is_not_computable());

        let request = SpringRateRequest::from_text("1e100", "1e101", "1", "music_wire");
        assert!(calculate_request(&request).is_none());
    }

    #[test]
    fn test_request_from_text() {
        let request = SpringRateRequest::from_text(" 2.0 ", "20", "10", "music_wire");
        let result = calculate_request(&request).unwrap();
        assert!((result.rate_newtons_per_mm - 2.7190).abs() < 1e-4);
    }

    #[test]
    fn test_request_unknown_material_defaults() {
        let known = calculate_request(&SpringRateRequest::from_text("2", "20", "10", "music_wire")).unwrap();
        let unknown = calculate_request(&SpringRateRequest::from_text("2", "20", "10", "unobtainium")).unwrap();
        assert_eq!(unknown.shear_modulus_mpa, 79300.0);
        assert_eq!(known.rate_newtons_per_mm, unknown.rate_newtons_per_mm);
    }

    #[test]
    fn test_request_non_numeric_is_absent() {
        for bad in ["", "abc", "2mm", "inf", "NaN", "  "] {
            let request = SpringRateRequest::from_text(bad, "20", "10", "music_wire");
            assert!(calculate_request(&request).is_none(), "input {bad:?}");
        }
    }

    #[test]
    fn test_request_missing_field() {
        let request = SpringRateRequest {
            wire_diameter: Some(NumericField::Number(2.0)),
            outer_diameter: None,
            active_coils: Some(NumericField::Number(10.0)),
            material: "stainless".to_string(),
        };
        assert!(calculate_request(&request).is_none());
        assert_eq!(
            request.to_input().unwrap_err(),
            CalcError::missing_field("outer_diameter_mm")
        );
    }

    #[test]
    fn test_request_json_mixed_types() {
        let json = r#"{
            "wireDiameter": "1.0",
            "outerDiameter": 10,
            "activeCoils": 5,
            "material": "stainless"
        }"#;
        let request: SpringRateRequest = serde_json::from_str(json).unwrap();
        let result = calculate_request(&request).unwrap();
        assert!((result.rate_newtons_per_mm - 2.3663).abs() < 1e-4);

        let out = serde_json::to_value(result).unwrap();
        assert!(out.get("rateNewtonsPerMm").is_some());
        assert!(out.get("rateKgPerMm").is_some());
    }

    #[test]
    fn test_request_json_null_field_is_absent() {
        let json = r#"{ "wireDiameter": null, "outerDiameter": 10, "activeCoils": 5 }"#;
        let request: SpringRateRequest = serde_json::from_str(json).unwrap();
        assert!(calculate_request(&request).is_none());
    }

    #[test]
    fn test_input_serialization() {
        let i = input(2.0, 20.0, 10.0, SpringMaterial::ChromeSilicon);
        let json = serde_json::to_string_pretty(&i).unwrap();
        assert!(json.contains("\"chrome_silicon\""));
        let roundtrip: SpringRateInput = serde_json::from_str(&json).unwrap();
        assert_eq!(i, roundtrip);
    }
}
