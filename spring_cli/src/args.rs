//! CLI argument definitions using clap derive

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "springcalc")]
#[command(author, version, about = "Helical spring rate calculator and material reference")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, env = "SPRINGCALC_FORMAT", default_value = "human")]
    pub format: OutputFormat,

    /// Suppress banners and notes
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate the rate of a helical spring
    Rate(SpringArgs),

    /// List wire materials and reference data
    Materials,

    /// Write the material specification sheet as PDF
    Report(ReportArgs),

    /// Prompt for spring dimensions on stdin
    Interactive,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Formatted text
    #[default]
    Human,
    /// JSON (for programming)
    Json,
}

/// Spring dimensions as typed by the user. Values stay text so that an
/// unparseable entry is reported as "not computable" rather than a usage error.
#[derive(clap::Args, Clone, Debug)]
pub struct SpringArgs {
    /// Wire diameter d (mm)
    #[arg(long, short = 'd', allow_hyphen_values = true)]
    pub wire_diameter: String,

    /// Outer diameter OD (mm)
    #[arg(long, short = 'o', allow_hyphen_values = true)]
    pub outer_diameter: String,

    /// Active coil count n
    #[arg(long, short = 'n', allow_hyphen_values = true)]
    pub coils: String,

    /// Wire material identifier (music_wire, stainless, chrome_silicon, oil_tempered, phosphor_bronze)
    #[arg(long, short = 'm', env = "SPRINGCALC_MATERIAL", default_value = "music_wire")]
    pub material: String,

    /// Reject unknown materials instead of using the music wire modulus
    #[arg(long)]
    pub strict: bool,
}

#[derive(clap::Args, Clone, Debug)]
pub struct ReportArgs {
    /// Output PDF path
    #[arg(long)]
    pub output: PathBuf,

    /// Company name in the header
    #[arg(long, env = "SPRINGCALC_COMPANY")]
    pub company: Option<String>,

    /// Document title
    #[arg(long)]
    pub title: Option<String>,

    /// Contact line in the footer
    #[arg(long, env = "SPRINGCALC_CONTACT")]
    pub contact: Option<String>,

    /// Report date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Include a spring rate section: wire diameter d (mm)
    #[arg(long, requires_all = ["outer_diameter", "coils"], allow_hyphen_values = true)]
    pub wire_diameter: Option<String>,

    /// Outer diameter OD (mm)
    #[arg(long, requires = "wire_diameter", allow_hyphen_values = true)]
    pub outer_diameter: Option<String>,

    /// Active coil count n
    #[arg(long, requires = "wire_diameter", allow_hyphen_values = true)]
    pub coils: Option<String>,

    /// Wire material for the spring rate section
    #[arg(long, default_value = "music_wire")]
    pub material: String,
}
