//! # Materials Database
//!
//! Spring wire materials and their shear modulus, the only material property
//! the spring-rate formula needs. Broader comparison data (tensile strength,
//! temperature limits, durability) lives in [`reference`].
//!
//! ## Material Table
//!
//! | identifier        | G (MPa) |
//! |-------------------|---------|
//! | `music_wire`      | 79300   |
//! | `stainless`       | 69000   |
//! | `chrome_silicon`  | 77200   |
//! | `oil_tempered`    | 79300   |
//! | `phosphor_bronze` | 41400   |
//!
//! ## Example
//!
//! ```rust
//! use spring_core::materials::SpringMaterial;
//!
//! let mat = SpringMaterial::Stainless;
//! assert_eq!(mat.shear_modulus().0, 69000.0);
//!
//! // Unknown identifiers resolve to music wire
//! assert_eq!(SpringMaterial::resolve("titanium"), SpringMaterial::MusicWire);
//! ```

pub mod reference;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Megapascals;

/// Shear modulus used when a material identifier is not recognized (music wire).
pub const DEFAULT_SHEAR_MODULUS_MPA: f64 = 79300.0;

/// Spring wire materials offered by the rate calculator.
///
/// ## JSON Serialization
///
/// Materials serialize as their snake_case identifier:
///
/// ```json
/// "chrome_silicon"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpringMaterial {
    /// Music wire / high-carbon steel (ASTM A228)
    #[default]
    MusicWire,
    /// Stainless steel 302/304
    Stainless,
    /// Chrome silicon (ASTM A401)
    ChromeSilicon,
    /// Oil tempered (ASTM A229)
    OilTempered,
    /// Phosphor bronze
    PhosphorBronze,
}

/// Identifier lookup, built once on first use.
static MATERIALS_BY_ID: Lazy<HashMap<&'static str, SpringMaterial>> = Lazy::new(|| {
    SpringMaterial::ALL
        .iter()
        .map(|mat| (mat.id(), *mat))
        .collect()
});

impl SpringMaterial {
    /// All materials, in the order the calculator lists them
    pub const ALL: [SpringMaterial; 5] = [
        SpringMaterial::MusicWire,
        SpringMaterial::Stainless,
        SpringMaterial::ChromeSilicon,
        SpringMaterial::OilTempered,
        SpringMaterial::PhosphorBronze,
    ];

    /// Stable identifier (matches the serde representation)
    pub fn id(&self) -> &'static str {
        match self {
            SpringMaterial::MusicWire => "music_wire",
            SpringMaterial::Stainless => "stainless",
            SpringMaterial::ChromeSilicon => "chrome_silicon",
            SpringMaterial::OilTempered => "oil_tempered",
            SpringMaterial::PhosphorBronze => "phosphor_bronze",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SpringMaterial::MusicWire => "Music Wire / Carbon Steel",
            SpringMaterial::Stainless => "Stainless Steel (302/304)",
            SpringMaterial::ChromeSilicon => "Chrome Silicon",
            SpringMaterial::OilTempered => "Oil Tempered",
            SpringMaterial::PhosphorBronze => "Phosphor Bronze",
        }
    }

    /// Shear modulus G (MPa)
    pub fn shear_modulus(&self) -> Megapascals {
        let mpa = match self {
            SpringMaterial::MusicWire => DEFAULT_SHEAR_MODULUS_MPA,
            SpringMaterial::Stainless => 69000.0,
            SpringMaterial::ChromeSilicon => 77200.0,
            SpringMaterial::OilTempered => 79300.0,
            SpringMaterial::PhosphorBronze => 41400.0,
        };
        Megapascals(mpa)
    }

    /// Exact identifier lookup. Returns `None` for anything not in the table.
    pub fn from_id(id: &str) -> Option<Self> {
        MATERIALS_BY_ID.get(id).copied()
    }

    /// Lenient lookup used by the calculator: unknown identifiers fall back
    /// to music wire.
    pub fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or_default()
    }

    /// Strict lookup tolerant of case and separators
    /// (e.g. "Chrome Silicon", "chrome-silicon", "CHROME_SILICON").
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "music_wire" | "musicwire" | "carbon_steel" | "a228" => Ok(SpringMaterial::MusicWire),
            "stainless" | "stainless_steel" | "302" | "304" => Ok(SpringMaterial::Stainless),
            "chrome_silicon" | "chromesilicon" | "a401" => Ok(SpringMaterial::ChromeSilicon),
            "oil_tempered" | "oiltempered" | "a229" => Ok(SpringMaterial::OilTempered),
            "phosphor_bronze" | "phosphorbronze" => Ok(SpringMaterial::PhosphorBronze),
            _ => Err(CalcError::material_not_found(s)),
        }
    }
}

impl std::fmt::Display for SpringMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shear_modulus_table() {
        let expected = [
            ("music_wire", 79300.0),
            ("stainless", 69000.0),
            ("chrome_silicon", 77200.0),
            ("oil_tempered", 79300.0),
            ("phosphor_bronze", 41400.0),
        ];
        for (id, g) in expected {
            assert_eq!(SpringMaterial::resolve(id).shear_modulus().0, g, "modulus for {id}");
        }
    }

    #[test]
    fn test_unknown_id_defaults_to_music_wire() {
        assert_eq!(SpringMaterial::resolve("titanium").shear_modulus().0, 79300.0);
        assert_eq!(SpringMaterial::resolve("").shear_modulus().0, DEFAULT_SHEAR_MODULUS_MPA);
        assert_eq!(SpringMaterial::resolve("MUSIC_WIRE"), SpringMaterial::MusicWire);
        assert_eq!(SpringMaterial::from_id("Stainless"), None);
    }

    #[test]
    fn test_ids_round_trip_through_lookup() {
        for mat in SpringMaterial::ALL {
            assert_eq!(SpringMaterial::from_id(mat.id()), Some(mat));
        }
    }

    #[test]
    fn test_flexible_parse() {
        assert_eq!(
            SpringMaterial::from_str_flexible("Chrome Silicon").unwrap(),
            SpringMaterial::ChromeSilicon
        );
        assert_eq!(
            SpringMaterial::from_str_flexible("phosphor-bronze").unwrap(),
            SpringMaterial::PhosphorBronze
        );
        assert_eq!(SpringMaterial::from_str_flexible("A229").unwrap(), SpringMaterial::OilTempered);

        let err = SpringMaterial::from_str_flexible("titanium").unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_serde_uses_identifiers() {
        let json = serde_json::to_string(&SpringMaterial::ChromeSilicon).unwrap();
        assert_eq!(json, "\"chrome_silicon\"");

        let parsed: SpringMaterial = serde_json::from_str("\"phosphor_bronze\"").unwrap();
        assert_eq!(parsed, SpringMaterial::PhosphorBronze);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SpringMaterial::MusicWire.to_string(), "Music Wire / Carbon Steel");
        assert_eq!(SpringMaterial::Stainless.display_name(), "Stainless Steel (302/304)");
    }
}
