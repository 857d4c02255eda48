//! # Calculator Form State
//!
//! Holds what a user has typed into a spring rate form and the last computed
//! result. Editing a field never recomputes; the result only changes when
//! [`SpringRateCalculator::calculate`] is triggered.
//!
//! ## Example
//!
//! ```rust
//! use spring_core::calculator::{CalculatorDisplay, SpringRateCalculator};
//!
//! let mut calc = SpringRateCalculator::new();
//! calc.set_wire_diameter("2.0");
//! calc.set_outer_diameter("20.0");
//! calc.set_active_coils("10");
//! assert!(calc.result().is_none());
//!
//! calc.calculate();
//! match calc.display() {
//!     CalculatorDisplay::Rate { newtons_per_mm, kg_per_mm } => {
//!         assert_eq!(newtons_per_mm, "2.72 N/mm");
//!         assert_eq!(kg_per_mm, "≈ 0.277 kg/mm");
//!     }
//!     CalculatorDisplay::Prompt(_) => unreachable!(),
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::spring_rate::{calculate_request, SpringRateRequest, SpringRateResult};
use crate::materials::SpringMaterial;

/// Text shown while no result is available
pub const RESULT_PROMPT: &str = "Enter dimensions to see result";

/// Transient calculator state for one form instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpringRateCalculator {
    wire_diameter: String,
    outer_diameter: String,
    active_coils: String,
    material: String,
    result: Option<SpringRateResult>,
}

impl Default for SpringRateCalculator {
    fn default() -> Self {
        SpringRateCalculator {
            wire_diameter: String::new(),
            outer_diameter: String::new(),
            active_coils: String::new(),
            material: SpringMaterial::default().id().to_string(),
            result: None,
        }
    }
}

impl SpringRateCalculator {
    /// Empty form with music wire selected
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_wire_diameter(&mut self, text: impl Into<String>) {
        self.wire_diameter = text.into();
    }

    pub fn set_outer_diameter(&mut self, text: impl Into<String>) {
        self.outer_diameter = text.into();
    }

    pub fn set_active_coils(&mut self, text: impl Into<String>) {
        self.active_coils = text.into();
    }

    /// Select a material by identifier. Unknown identifiers are kept as typed
    /// and calculate with the music wire modulus.
    pub fn set_material(&mut self, id: impl Into<String>) {
        self.material = id.into();
    }

    pub fn wire_diameter(&self) -> &str {
        &self.wire_diameter
    }

    pub fn outer_diameter(&self) -> &str {
        &self.outer_diameter
    }

    pub fn active_coils(&self) -> &str {
        &self.active_coils
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    /// Current form contents as a request
    pub fn request(&self) -> SpringRateRequest {
        SpringRateRequest::from_text(
            &self.wire_diameter,
            &self.outer_diameter,
            &self.active_coils,
            &self.material,
        )
    }

    /// Run the calculation on the current fields and store the outcome.
    ///
    /// A form that is not computable clears any previous result, so a stale
    /// rate is never shown next to edited dimensions.
    pub fn calculate(&mut self) -> Option<&SpringRateResult> {
        self.result = calculate_request(&self.request());
        self.result.as_ref()
    }

    /// Last computed result
    pub fn result(&self) -> Option<&SpringRateResult> {
        self.result.as_ref()
    }

    /// Clear all fields and the result
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// What the result panel should show
    pub fn display(&self) -> CalculatorDisplay {
        match &self.result {
            Some(result) => CalculatorDisplay::Rate {
                newtons_per_mm: format!("{:.2} N/mm", result.rate_newtons_per_mm),
                kg_per_mm: format!("≈ {:.3} kg/mm", result.rate_kg_per_mm),
            },
            None => CalculatorDisplay::Prompt(RESULT_PROMPT),
        }
    }
}

/// Formatted contents of the result panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorDisplay {
    /// Rate in N/mm (2 decimals) and kgf/mm (3 decimals)
    Rate {
        newtons_per_mm: String,
        kg_per_mm: String,
    },
    /// Placeholder asking the user to complete the form
    Prompt(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(d: &str, od: &str, n: &str, material: &str) -> SpringRateCalculator {
        let mut calc = SpringRateCalculator::new();
        calc.set_wire_diameter(d);
        calc.set_outer_diameter(od);
        calc.set_active_coils(n);
        calc.set_material(material);
        calc
    }

    #[test]
    fn test_defaults() {
        let calc = SpringRateCalculator::new();
        assert_eq!(calc.material(), "music_wire");
        assert_eq!(calc.wire_diameter(), "");
        assert!(calc.result().is_none());
        assert_eq!(calc.display(), CalculatorDisplay::Prompt(RESULT_PROMPT));
    }

    #[test]
    fn test_setters_do_not_recompute() {
        let mut calc = filled("2", "20", "10", "music_wire");
        assert!(calc.result().is_none());

        calc.calculate();
        let first = *calc.result().unwrap();

        calc.set_active_coils("5");
        assert_eq!(calc.result(), Some(&first));
    }

    #[test]
    fn test_display_formatting() {
        let mut calc = filled("1.0", "10.0", "5", "stainless");
        calc.calculate();
        assert_eq!(
            calc.display(),
            CalculatorDisplay::Rate {
                newtons_per_mm: "2.37 N/mm".to_string(),
                kg_per_mm: "≈ 0.241 kg/mm".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_input_clears_previous_result() {
        let mut calc = filled("2", "20", "10", "music_wire");
        assert!(calc.calculate().is_some());

        calc.set_outer_diameter("2");
        assert!(calc.calculate().is_none());
        assert!(calc.result().is_none());
        assert_eq!(calc.display(), CalculatorDisplay::Prompt(RESULT_PROMPT));
    }

    #[test]
    fn test_unknown_material_kept_and_defaults() {
        let mut calc = filled("2", "20", "10", "inconel");
        let result = *calc.calculate().unwrap();
        assert_eq!(calc.material(), "inconel");
        assert_eq!(result.shear_modulus_mpa, 79300.0);
    }

    #[test]
    fn test_reset() {
        let mut calc = filled("2", "20", "10", "phosphor_bronze");
        calc.calculate();
        calc.reset();
        assert_eq!(calc, SpringRateCalculator::new());
    }
}
