//! # PDF Generation Module
//!
//! Generates the technical material specification sheet using Typst.
//!
//! ## Architecture
//!
//! - The Typst template is embedded as a string constant
//! - Reference tables are rendered into Typst table rows before compilation
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use spring_core::pdf::{render_material_report_pdf, ReportOptions};
//!
//! let pdf_bytes = render_material_report_pdf(&ReportOptions::default(), None).unwrap();
//! std::fs::write("material-specs.pdf", pdf_bytes).unwrap();
//! ```

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::calculations::spring_rate::{SpringRateInput, SpringRateResult};
use crate::errors::{CalcError, CalcResult};
use crate::materials::reference::{
    tensile_strength_at, TensileSeries, DURABILITY_SCORES, TEMPERATURE_LIMITS, TENSILE_STRENGTH,
};
use crate::units::Millimeters;

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling documents without external files.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Available fonts
    fonts: Vec<Font>,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    /// Fonts bundled with typst-assets only; the report must render the same
    /// on every machine.
    fn load_fonts() -> Vec<Font> {
        typst_assets::fonts()
            .flat_map(|font_bytes| Font::iter(Bytes::new(font_bytes.to_vec())))
            .collect()
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// Report Options
// ============================================================================

/// Branding and metadata for the specification sheet.
///
/// ## JSON Example
///
/// ```json
/// {
///   "company": "EGYSPRING",
///   "title": "Technical Material Specifications",
///   "contact": "info@egyspring.com | +20 10 5021 5333",
///   "date": "2026-10-19"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Company name shown in the header
    pub company: String,
    /// Document title
    pub title: String,
    /// Contact line printed in the footer
    pub contact: String,
    /// Generation date; today (UTC) when absent
    pub date: Option<NaiveDate>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            company: "EGYSPRING".to_string(),
            title: "Technical Material Specifications".to_string(),
            contact: "info@egyspring.com | +20 10 5021 5333".to_string(),
            date: None,
        }
    }
}

impl ReportOptions {
    fn date_string(&self) -> String {
        self.date
            .unwrap_or_else(|| Utc::now().date_naive())
            .format("%Y-%m-%d")
            .to_string()
    }
}

// ============================================================================
// PDF Template
// ============================================================================

/// Typst template for the material specification sheet
const MATERIAL_REPORT_TEMPLATE: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 2cm, bottom: 2cm, left: 1.5cm, right: 1.5cm),
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, auto),
      align(left)[#text(size: 8pt, fill: gray)[Contact {{COMPANY}}: {{CONTACT}}]],
      align(right)[#text(size: 8pt, fill: gray)[Page #counter(page).display()]],
    )
  ]
)

#set text(size: 10pt)
#set heading(numbering: "1.")
#show heading: set text(size: 12pt)

#text(size: 20pt, weight: "bold", fill: rgb(210, 0, 0))[{{COMPANY}}]
#v(2pt)
#text(size: 14pt)[{{TITLE}}]
#v(2pt)
#text(size: 10pt, fill: gray)[Generated on: {{DATE}}]

#v(12pt)

= Tensile Strength (MPa) vs Wire Diameter

#table(
  columns: (auto, 1fr, 1fr, 1fr, 1fr),
  inset: 6pt,
  stroke: 0.5pt,
  fill: (_, y) => if y == 0 { rgb(40, 40, 40) } else if calc.odd(y) { rgb("#f5f5f5") },
  align: (left, right, right, right, right),
  table.header({{TENSILE_HEADER}}),
{{TENSILE_ROWS}}
)

#v(12pt)

= Max Operating Temperature (°C)

#table(
  columns: (1fr, auto),
  inset: 6pt,
  stroke: 0.5pt,
  fill: (_, y) => if y == 0 { rgb(80, 80, 80) },
  align: (left, right),
  table.header([#text(fill: white)[*Material*]], [#text(fill: white)[*Max Temp*]]),
{{TEMPERATURE_ROWS}}
)

#v(12pt)

= Durability & Corrosion Ratings (1-10)

#table(
  columns: (1fr, auto, auto),
  inset: 6pt,
  stroke: 0.5pt,
  fill: (_, y) => if y == 0 { rgb(80, 80, 80) },
  align: (left, right, right),
  table.header(
    [#text(fill: white)[*Material*]],
    [#text(fill: white)[*Fatigue Life*]],
    [#text(fill: white)[*Corrosion Res.*]],
  ),
{{DURABILITY_ROWS}}
)
{{RATE_SECTION}}
"##;

/// Optional section appended when a calculated spring rate is included
const RATE_SECTION_TEMPLATE: &str = r##"
#v(12pt)

= Spring Rate Calculation

$ k = (G d^4) / (8 D^3 n) $

#table(
  columns: (1fr, auto, auto),
  inset: 6pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Parameter*], [*Value*], [*Unit*]),
  [Wire Material], [{{MATERIAL}}], [],
  [Wire Diameter (d)], [{{WIRE_D}}], [mm],
  [Outer Diameter (OD)], [{{OUTER_D}}], [mm],
  [Mean Diameter (D)], [{{MEAN_D}}], [mm],
  [Active Coils (n)], [{{COILS}}], [],
  [Shear Modulus (G)], [{{SHEAR_G}}], [MPa],
  [Spring Index (D/d)], [{{INDEX}}], [],
  [Tensile Strength at d], [{{TENSILE_AT_D}}], [MPa],
  [*Spring Rate (k)*], [*{{RATE_N}}*], [N/mm],
  [Spring Rate], [{{RATE_KGF}}], [kgf/mm],
)
"##;

// ============================================================================
// PDF Rendering Functions
// ============================================================================

/// Render the material specification sheet to PDF.
///
/// # Arguments
///
/// * `options` - Branding, title and date
/// * `calculation` - Optional spring rate calculation to include as a final section
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError::ReportFailed)` - If Typst compilation or rendering fails
pub fn render_material_report_pdf(
    options: &ReportOptions,
    calculation: Option<(&SpringRateInput, &SpringRateResult)>,
) -> CalcResult<Vec<u8>> {
    let source = build_report_source(options, calculation);
    compile_pdf(source)
}

/// Build the Typst source for the specification sheet
pub fn build_report_source(
    options: &ReportOptions,
    calculation: Option<(&SpringRateInput, &SpringRateResult)>,
) -> String {
    let rate_section = calculation
        .map(|(input, result)| build_rate_section(input, result))
        .unwrap_or_default();

    MATERIAL_REPORT_TEMPLATE
        .replace("{{COMPANY}}", &escape_typst(&options.company))
        .replace("{{TITLE}}", &escape_typst(&options.title))
        .replace("{{CONTACT}}", &escape_typst(&options.contact))
        .replace("{{DATE}}", &options.date_string())
        .replace("{{TENSILE_HEADER}}", &build_tensile_header())
        .replace("{{TENSILE_ROWS}}", &build_tensile_rows())
        .replace("{{TEMPERATURE_ROWS}}", &build_temperature_rows())
        .replace("{{DURABILITY_ROWS}}", &build_durability_rows())
        .replace("{{RATE_SECTION}}", &rate_section)
}

fn compile_pdf(source: String) -> CalcResult<Vec<u8>> {
    let world = PdfWorld::new(source);

    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors
            .iter()
            .map(|e| e.message.to_string())
            .collect();
        CalcError::report_failed("compile", error_msgs.join("; "))
    })?;

    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::report_failed("render", error_msgs.join("; "))
    })?;

    Ok(pdf_bytes)
}

fn build_rate_section(input: &SpringRateInput, result: &SpringRateResult) -> String {
    // Phosphor bronze and diameters outside 0.5-8 mm have no published value
    let tensile = TensileSeries::for_material(input.material)
        .and_then(|series| tensile_strength_at(series, Millimeters(input.wire_diameter_mm)))
        .map(|mpa| format!("≈ {:.0}", mpa.0))
        .unwrap_or_else(|| "n/a".to_string());

    RATE_SECTION_TEMPLATE
        .replace("{{MATERIAL}}", &escape_typst(input.material.display_name()))
        .replace("{{WIRE_D}}", &format!("{:.2}", input.wire_diameter_mm))
        .replace("{{OUTER_D}}", &format!("{:.2}", input.outer_diameter_mm))
        .replace("{{MEAN_D}}", &format!("{:.2}", result.mean_diameter_mm))
        .replace("{{COILS}}", &format!("{}", input.active_coils))
        .replace("{{SHEAR_G}}", &format!("{:.0}", result.shear_modulus_mpa))
        .replace("{{INDEX}}", &format!("{:.2}", result.spring_index))
        .replace("{{TENSILE_AT_D}}", &tensile)
        .replace("{{RATE_N}}", &format!("{:.2}", result.rate_newtons_per_mm))
        .replace("{{RATE_KGF}}", &format!("{:.3}", result.rate_kg_per_mm))
}

fn build_tensile_header() -> String {
    std::iter::once("Dia (mm)")
        .chain(TensileSeries::ALL.iter().map(|s| s.display_name()))
        .map(|h| format!("[#text(fill: white)[*{}*]]", h))
        .collect::<Vec<_>>()
        .join(", ")
}

fn build_tensile_rows() -> String {
    TENSILE_STRENGTH
        .iter()
        .map(|row| {
            let cells: Vec<String> = TensileSeries::ALL
                .iter()
                .map(|s| format!("[{:.0}]", row.strength(*s).0))
                .collect();
            format!("  [{}], {},", row.diameter_mm, cells.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_temperature_rows() -> String {
    TEMPERATURE_LIMITS
        .iter()
        .map(|t| format!("  [{}], [{:.0}°C],", escape_typst(t.name), t.max_temp.0))
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_durability_rows() -> String {
    DURABILITY_SCORES
        .iter()
        .map(|d| format!("  [{}], [{}], [{}],", escape_typst(d.name), d.fatigue, d.corrosion))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape special Typst characters in user-provided text
fn escape_typst(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '#' => "\\#".to_string(),
            '$' => "\\$".to_string(),
            '@' => "\\@".to_string(),
            '<' => "\\<".to_string(),
            '>' => "\\>".to_string(),
            '[' => "\\[".to_string(),
            ']' => "\\]".to_string(),
            '\\' => "\\\\".to_string(),
            '`' => "\\`".to_string(),
            '/' => "\\/".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
