use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "srimgen",
    about = "Generate SRIM input files from TOML run descriptions",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options accepted by every command.
#[derive(Args)]
pub struct GlobalOptions {
    /// Suppress the banner and progress output (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write TRIM.IN and TRIMAUTO for a transport run
    #[command(visible_alias = "t")]
    Trim(TrimArgs),

    /// Write SR.IN for a stopping-and-range table
    #[command(visible_alias = "s")]
    Sr(SrArgs),

    /// Show the normalized composition of a chemical formula
    #[command(visible_alias = "m")]
    Material(MaterialArgs),
}

/// Output location shared by the file-writing commands.
#[derive(Args)]
pub struct OutputOptions {
    /// Directory the input files are written to (created if missing)
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct TrimArgs {
    /// TOML run description with [ion], [[layers]] and [trim]
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    #[command(flatten)]
    pub out: OutputOptions,

    /// TRIMAUTO mode: 0 normal, 1 unattended, 2 resume (overrides the file)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=2))]
    pub mode: Option<u8>,
}

#[derive(Args)]
pub struct SrArgs {
    /// TOML run description with [ion], [[layers]] and [sr]
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    #[command(flatten)]
    pub out: OutputOptions,
}

#[derive(Args)]
pub struct MaterialArgs {
    /// Chemical formula, e.g. SiC or Fe0.72Cr0.18Ni0.10
    #[arg(value_name = "FORMULA")]
    pub formula: String,

    /// Density in g/cm³
    #[arg(long, value_name = "D", default_value = "1.0")]
    pub density: f64,
}

pub fn parse() -> Cli {
    Cli::parse()
}
