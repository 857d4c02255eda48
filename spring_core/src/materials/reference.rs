//! Material comparison reference data.
//!
//! Approximate values published on the material comparison sheet: tensile
//! strength against wire diameter, maximum operating temperature, and relative
//! fatigue/corrosion scores. These are fixed tables; nothing here is computed
//! from user input except the interpolated tensile lookup.

use serde::Serialize;

use super::SpringMaterial;
use crate::units::{Celsius, Megapascals, Millimeters};

/// Wire grades with published tensile strength curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TensileSeries {
    /// Music wire (A228)
    MusicWire,
    /// Stainless steel 302
    Stainless302,
    /// Chrome silicon (A401)
    ChromeSilicon,
    /// Oil tempered (A229)
    OilTempered,
}

impl TensileSeries {
    /// All series in table column order
    pub const ALL: [TensileSeries; 4] = [
        TensileSeries::MusicWire,
        TensileSeries::Stainless302,
        TensileSeries::ChromeSilicon,
        TensileSeries::OilTempered,
    ];

    /// Column heading used in tables and reports
    pub fn display_name(&self) -> &'static str {
        match self {
            TensileSeries::MusicWire => "Music Wire",
            TensileSeries::Stainless302 => "Stainless 302",
            TensileSeries::ChromeSilicon => "Chrome Si",
            TensileSeries::OilTempered => "Oil Tempered",
        }
    }

    /// Curve matching a calculator material, if one is published.
    /// Phosphor bronze has no tensile curve on the sheet.
    pub fn for_material(material: SpringMaterial) -> Option<Self> {
        match material {
            SpringMaterial::MusicWire => Some(TensileSeries::MusicWire),
            SpringMaterial::Stainless => Some(TensileSeries::Stainless302),
            SpringMaterial::ChromeSilicon => Some(TensileSeries::ChromeSilicon),
            SpringMaterial::OilTempered => Some(TensileSeries::OilTempered),
            SpringMaterial::PhosphorBronze => None,
        }
    }
}

/// One row of the tensile strength table (all strengths in MPa)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TensileStrengthRow {
    pub diameter_mm: f64,
    pub music_wire_mpa: f64,
    pub stainless_302_mpa: f64,
    pub chrome_silicon_mpa: f64,
    pub oil_tempered_mpa: f64,
}

impl TensileStrengthRow {
    /// Strength for one series in this row
    pub fn strength(&self, series: TensileSeries) -> Megapascals {
        let mpa = match series {
            TensileSeries::MusicWire => self.music_wire_mpa,
            TensileSeries::Stainless302 => self.stainless_302_mpa,
            TensileSeries::ChromeSilicon => self.chrome_silicon_mpa,
            TensileSeries::OilTempered => self.oil_tempered_mpa,
        };
        Megapascals(mpa)
    }
}

const fn tensile_row(d: f64, mw: f64, ss: f64, cs: f64, ot: f64) -> TensileStrengthRow {
    TensileStrengthRow {
        diameter_mm: d,
        music_wire_mpa: mw,
        stainless_302_mpa: ss,
        chrome_silicon_mpa: cs,
        oil_tempered_mpa: ot,
    }
}

/// Tensile strength vs wire diameter, sorted by diameter
pub const TENSILE_STRENGTH: [TensileStrengthRow; 6] = [
    tensile_row(0.5, 2800.0, 2400.0, 2100.0, 1900.0),
    tensile_row(1.0, 2600.0, 2200.0, 2050.0, 1850.0),
    tensile_row(2.0, 2300.0, 1900.0, 1950.0, 1700.0),
    tensile_row(3.0, 2100.0, 1750.0, 1900.0, 1600.0),
    tensile_row(5.0, 1900.0, 1500.0, 1800.0, 1500.0),
    tensile_row(8.0, 1700.0, 1300.0, 1700.0, 1400.0),
];

/// Approximate tensile strength at a wire diameter.
///
/// Linear interpolation between table rows. Diameters outside the table range
/// (0.5 to 8 mm) or non-finite values return `None`.
pub fn tensile_strength_at(series: TensileSeries, diameter: Millimeters) -> Option<Megapascals> {
    let d = diameter.0;
    if !d.is_finite() {
        return None;
    }

    TENSILE_STRENGTH.windows(2).find_map(|pair| {
        let (lo, hi) = (pair[0], pair[1]);
        if d < lo.diameter_mm || d > hi.diameter_mm {
            return None;
        }
        let t = (d - lo.diameter_mm) / (hi.diameter_mm - lo.diameter_mm);
        let s_lo = lo.strength(series).0;
        let s_hi = hi.strength(series).0;
        Some(Megapascals(s_lo + t * (s_hi - s_lo)))
    })
}

/// Maximum continuous operating temperature for a wire material
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureLimit {
    pub name: &'static str,
    /// Calculator material this row describes; `None` for sheet-only alloys
    pub material: Option<SpringMaterial>,
    pub max_temp: Celsius,
}

const fn temperature_row(name: &'static str, material: Option<SpringMaterial>, max_c: f64) -> TemperatureLimit {
    TemperatureLimit { name, material, max_temp: Celsius(max_c) }
}

/// Maximum operating temperature by material
pub const TEMPERATURE_LIMITS: [TemperatureLimit; 5] = [
    temperature_row("Music Wire (A228)", Some(SpringMaterial::MusicWire), 120.0),
    temperature_row("Stainless (302/304)", Some(SpringMaterial::Stainless), 260.0),
    temperature_row("Chrome Silicon (A401)", Some(SpringMaterial::ChromeSilicon), 245.0),
    temperature_row("Inconel X-750", None, 650.0),
    temperature_row("Phosphor Bronze", Some(SpringMaterial::PhosphorBronze), 95.0),
];

/// Relative fatigue-life and corrosion-resistance scores (1-10, higher is better)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurabilityScore {
    pub name: &'static str,
    /// Calculator material this row describes; `None` for sheet-only alloys
    pub material: Option<SpringMaterial>,
    pub fatigue: u8,
    pub corrosion: u8,
}

const fn durability_row(name: &'static str, material: Option<SpringMaterial>, fatigue: u8, corrosion: u8) -> DurabilityScore {
    DurabilityScore { name, material, fatigue, corrosion }
}

/// Durability and corrosion ratings by material
pub const DURABILITY_SCORES: [DurabilityScore; 6] = [
    durability_row("Music Wire", Some(SpringMaterial::MusicWire), 9, 2),
    durability_row("Stainless 302", Some(SpringMaterial::Stainless), 7, 9),
    durability_row("Chrome Silicon", Some(SpringMaterial::ChromeSilicon), 8, 3),
    durability_row("Inconel X-750", None, 8, 10),
    durability_row("Phosphor Bronze", Some(SpringMaterial::PhosphorBronze), 6, 8),
    durability_row("Oil Tempered", Some(SpringMaterial::OilTempered), 5, 2),
];

/// Temperature limit for a calculator material.
/// Oil tempered wire is not on the temperature sheet.
pub fn temperature_limit(material: SpringMaterial) -> Option<&'static TemperatureLimit> {
    TEMPERATURE_LIMITS.iter().find(|t| t.material == Some(material))
}

/// Durability scores for a calculator material
pub fn durability(material: SpringMaterial) -> Option<&'static DurabilityScore> {
    DURABILITY_SCORES.iter().find(|d| d.material == Some(material))
}
