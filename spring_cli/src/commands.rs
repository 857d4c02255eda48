//! Subcommand implementations

use std::io::{self, BufRead, Write};

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use spring_core::calculations::{try_calculate, SpringRateInput, SpringRateRequest, SpringRateResult};
use spring_core::calculator::{CalculatorDisplay, SpringRateCalculator};
use spring_core::materials::reference::{
    durability, temperature_limit, tensile_strength_at, DurabilityScore, TemperatureLimit,
    TensileSeries, TensileStrengthRow, DURABILITY_SCORES, TEMPERATURE_LIMITS, TENSILE_STRENGTH,
};
use spring_core::materials::{SpringMaterial, DEFAULT_SHEAR_MODULUS_MPA};
use spring_core::units::Millimeters;
use spring_core::pdf::{render_material_report_pdf, ReportOptions};
use spring_core::CalcError;

use crate::args::{GlobalOpts, OutputFormat, ReportArgs, SpringArgs};

const RULE: &str = "═══════════════════════════════════════";

// ============================================================================
// rate
// ============================================================================

pub fn rate(args: &SpringArgs, global: &GlobalOpts) -> Result<()> {
    let material_id = resolve_material_id(&args.material, args.strict, global.quiet)?;
    let request = SpringRateRequest::from_text(
        &args.wire_diameter,
        &args.outer_diameter,
        &args.coils,
        &material_id,
    );

    let outcome = request
        .to_input()
        .and_then(|input| try_calculate(&input).map(|result| (input, result)));

    match outcome {
        Ok((input, result)) => {
            match global.format {
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Human => print_rate(&input, &result, global.quiet),
            }
            Ok(())
        }
        Err(err) if err.is_not_computable() => {
            match global.format {
                OutputFormat::Json => print_json(&Option::<SpringRateResult>::None)?,
                OutputFormat::Human => println!("Not computable: {}", spring_core::calculator::RESULT_PROMPT),
            }
            if !global.quiet {
                eprintln!("{}", err);
            }
            Ok(())
        }
        Err(err) => Err(err).into_diagnostic(),
    }
}

/// Unknown identifiers pass through unchanged (the calculator falls back to
/// music wire) unless `strict` is set.
fn resolve_material_id(material: &str, strict: bool, quiet: bool) -> Result<String> {
    if strict {
        let mat = SpringMaterial::from_str_flexible(material).into_diagnostic()?;
        return Ok(mat.id().to_string());
    }
    if SpringMaterial::from_id(material).is_none() && !quiet {
        eprintln!(
            "note: unknown material '{}', using {} modulus (G = {:.0} MPa)",
            material,
            SpringMaterial::default().display_name(),
            DEFAULT_SHEAR_MODULUS_MPA
        );
    }
    Ok(material.to_string())
}

fn print_rate(input: &SpringRateInput, result: &SpringRateResult, quiet: bool) {
    if !quiet {
        println!("{}", RULE);
        println!("  SPRING RATE");
        println!("{}", RULE);
        println!();
        println!("Input:");
        println!("  Material:       {} (G = {:.0} MPa)", input.material, result.shear_modulus_mpa);
        println!("  Wire diameter:  {:.2} mm", input.wire_diameter_mm);
        println!("  Outer diameter: {:.2} mm", input.outer_diameter_mm);
        println!("  Mean diameter:  {:.2} mm", result.mean_diameter_mm);
        println!("  Active coils:   {}", input.active_coils);
        println!("  Spring index:   {:.2}", result.spring_index);
        if let Some(tensile) = tensile_strength_line(input) {
            println!("  Tensile at d:   {}", tensile);
        }
        println!();
    }
    println!("k = {:.2} N/mm", result.rate_newtons_per_mm);
    println!("  ≈ {:.3} kg/mm", result.rate_kg_per_mm);
}

/// Approximate tensile strength of the wire, when the material has a
/// published curve covering the diameter.
fn tensile_strength_line(input: &SpringRateInput) -> Option<String> {
    let series = TensileSeries::for_material(input.material)?;
    let strength = tensile_strength_at(series, Millimeters(input.wire_diameter_mm))?;
    Some(format!("≈ {:.0} MPa ({})", strength.0, series.display_name()))
}

// ============================================================================
// materials
// ============================================================================

#[derive(Serialize)]
struct MaterialEntry {
    id: &'static str,
    name: &'static str,
    shear_modulus_mpa: f64,
    max_temp_c: Option<f64>,
    fatigue: Option<u8>,
    corrosion: Option<u8>,
}

#[derive(Serialize)]
struct MaterialsReport<'a> {
    materials: Vec<MaterialEntry>,
    tensile_strength: &'a [TensileStrengthRow],
    temperature_limits: &'a [TemperatureLimit],
    durability: &'a [DurabilityScore],
}

pub fn materials(global: &GlobalOpts) -> Result<()> {
    let entries: Vec<MaterialEntry> = SpringMaterial::ALL
        .iter()
        .map(|mat| {
            let score = durability(*mat);
            MaterialEntry {
                id: mat.id(),
                name: mat.display_name(),
                shear_modulus_mpa: mat.shear_modulus().0,
                max_temp_c: temperature_limit(*mat).map(|t| t.max_temp.0),
                fatigue: score.map(|d| d.fatigue),
                corrosion: score.map(|d| d.corrosion),
            }
        })
        .collect();

    if global.format == OutputFormat::Json {
        return print_json(&MaterialsReport {
            materials: entries,
            tensile_strength: &TENSILE_STRENGTH,
            temperature_limits: &TEMPERATURE_LIMITS,
            durability: &DURABILITY_SCORES,
        });
    }

    println!("{:<16} {:<28} {:>8} {:>9} {:>8} {:>10}", "ID", "MATERIAL", "G (MPa)", "MAX TEMP", "FATIGUE", "CORROSION");
    for e in &entries {
        let temp = e
            .max_temp_c
            .map(|t| format!("{:.0}°C", t))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<16} {:<28} {:>8.0} {:>9} {:>8} {:>10}",
            e.id,
            e.name,
            e.shear_modulus_mpa,
            temp,
            score_cell(e.fatigue),
            score_cell(e.corrosion)
        );
    }

    println!();
    println!("Tensile strength (MPa) vs wire diameter:");
    println!("{:>8} {:>11} {:>14} {:>10} {:>13}", "DIA (mm)", "Music Wire", "Stainless 302", "Chrome Si", "Oil Tempered");
    for row in TENSILE_STRENGTH.iter() {
        println!(
            "{:>8} {:>11.0} {:>14.0} {:>10.0} {:>13.0}",
            row.diameter_mm, row.music_wire_mpa, row.stainless_302_mpa, row.chrome_silicon_mpa, row.oil_tempered_mpa
        );
    }

    println!();
    println!("Max operating temperature:");
    for t in TEMPERATURE_LIMITS.iter() {
        println!("  {:<24} {:>5.0}°C", t.name, t.max_temp.0);
    }

    println!();
    println!("Durability & corrosion ratings (1-10):");
    println!("  {:<24} {:>7} {:>10}", "MATERIAL", "FATIGUE", "CORROSION");
    for d in DURABILITY_SCORES.iter() {
        println!("  {:<24} {:>7} {:>10}", d.name, d.fatigue, d.corrosion);
    }
    Ok(())
}

fn score_cell(score: Option<u8>) -> String {
    score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())
}

// ============================================================================
// report
// ============================================================================

pub fn report(args: &ReportArgs, global: &GlobalOpts) -> Result<()> {
    let defaults = ReportOptions::default();
    let options = ReportOptions {
        company: args.company.clone().unwrap_or(defaults.company),
        title: args.title.clone().unwrap_or(defaults.title),
        contact: args.contact.clone().unwrap_or(defaults.contact),
        date: args.date,
    };

    let calculation = match (&args.wire_diameter, &args.outer_diameter, &args.coils) {
        (Some(d), Some(od), Some(n)) => {
            let request = SpringRateRequest::from_text(d, od, n, &args.material);
            let input = request.to_input().into_diagnostic()?;
            let result = try_calculate(&input).into_diagnostic()?;
            Some((input, result))
        }
        _ => None,
    };

    let pdf = render_material_report_pdf(&options, calculation.as_ref().map(|(i, r)| (i, r)))
        .into_diagnostic()?;
    std::fs::write(&args.output, &pdf).into_diagnostic()?;

    match global.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "path": args.output.display().to_string(),
            "bytes": pdf.len(),
        }))?,
        OutputFormat::Human if !global.quiet => {
            println!("Wrote {} ({} bytes)", args.output.display(), pdf.len());
        }
        OutputFormat::Human => {}
    }
    Ok(())
}

// ============================================================================
// interactive
// ============================================================================

pub fn interactive(global: &GlobalOpts) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_interactive(stdin.lock(), stdout.lock(), global.quiet).into_diagnostic()
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt loop over any reader/writer; ends on EOF or a non-"y" answer.
fn run_interactive<R: BufRead, W: Write>(mut input: R, mut out: W, quiet: bool) -> io::Result<()> {
    if !quiet {
        writeln!(out, "Springcalc - Spring Rate Calculator")?;
        writeln!(out, "===================================")?;
        writeln!(out)?;
        let ids: Vec<&str> = SpringMaterial::ALL.iter().map(|m| m.id()).collect();
        writeln!(out, "Materials: {}", ids.join(", "))?;
        writeln!(out)?;
    }

    let mut calc = SpringRateCalculator::new();
    loop {
        let Some(material) = prompt(&mut input, &mut out, "Material [music_wire]: ")? else { break };
        if !material.is_empty() {
            calc.set_material(material);
        }
        let Some(d) = prompt(&mut input, &mut out, "Wire diameter d (mm): ")? else { break };
        calc.set_wire_diameter(d);
        let Some(od) = prompt(&mut input, &mut out, "Outer diameter OD (mm): ")? else { break };
        calc.set_outer_diameter(od);
        let Some(n) = prompt(&mut input, &mut out, "Active coils n: ")? else { break };
        calc.set_active_coils(n);

        calc.calculate();
        writeln!(out)?;
        match calc.display() {
            CalculatorDisplay::Rate { newtons_per_mm, kg_per_mm } => {
                writeln!(out, "Spring rate: {}", newtons_per_mm)?;
                writeln!(out, "             {}", kg_per_mm)?;
            }
            CalculatorDisplay::Prompt(text) => writeln!(out, "{}", text)?,
        }
        writeln!(out)?;

        match prompt(&mut input, &mut out, "Calculate another? [y/N]: ")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => calc.reset(),
            _ => break,
        }
    }
    Ok(())
}

// ============================================================================
// output helpers
// ============================================================================

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(CalcError::from)
        .into_diagnostic()?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> String {
        let mut out = Vec::new();
        run_interactive(script.as_bytes(), &mut out, true).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_interactive_single_calculation() {
        let output = run("stainless\n1.0\n10.0\n5\nn\n");
        assert!(output.contains("Spring rate: 2.37 N/mm"));
        assert!(output.contains("≈ 0.241 kg/mm"));
    }

    #[test]
    fn test_interactive_default_material_and_repeat() {
        let output = run("\n2\n20\n10\ny\n\n5\n5\n3\n");
        assert!(output.contains("Spring rate: 2.72 N/mm"));
        assert!(output.contains(spring_core::calculator::RESULT_PROMPT));
    }

    #[test]
    fn test_interactive_eof_mid_form() {
        let output = run("music_wire\n2\n");
        assert!(!output.contains("Spring rate"));
    }

    #[test]
    fn test_tensile_strength_line() {
        let input = SpringRateInput {
            wire_diameter_mm: 2.0,
            outer_diameter_mm: 20.0,
            active_coils: 10.0,
            material: SpringMaterial::MusicWire,
        };
        assert_eq!(tensile_strength_line(&input).unwrap(), "≈ 2300 MPa (Music Wire)");

        let bronze = SpringRateInput { material: SpringMaterial::PhosphorBronze, ..input };
        assert!(tensile_strength_line(&bronze).is_none());

        let thick = SpringRateInput { wire_diameter_mm: 12.0, outer_diameter_mm: 80.0, ..input };
        assert!(tensile_strength_line(&thick).is_none());
    }

    #[test]
    fn test_strict_material_resolution() {
        assert_eq!(resolve_material_id("Chrome Silicon", true, true).unwrap(), "chrome_silicon");
        assert!(resolve_material_id("titanium", true, true).is_err());
        assert_eq!(resolve_material_id("titanium", false, true).unwrap(), "titanium");
    }
}
