use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "oqshp",
    about = "OpenQuake area sources from preformatted shapefiles",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a shapefile to an NRML or JSON source model
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Read a shapefile and summarize its area sources
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),
}

impl Command {
    pub fn quiet(&self) -> bool {
        match self {
            Command::Convert(args) => args.quiet,
            Command::Inspect(args) => args.quiet,
        }
    }
}

/// Attribute validation options shared by all commands.
#[derive(Args)]
#[command(next_help_heading = "Validation")]
pub struct ReadOptions {
    /// Fail when a nodal-plane or hypocentral-depth distribution does not sum to 1
    #[arg(long)]
    pub strict_weights: bool,

    /// Allowed deviation of distribution weight sums from 1
    #[arg(long, value_name = "TOL", default_value = "1e-6")]
    pub weight_tolerance: f64,

    /// Fail on mfd_type values other than truncGutenbergRichterMFD
    #[arg(long)]
    pub reject_unknown_mfd: bool,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Input shapefile (.shp with .dbf alongside)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file(s), repeatable for multi-format output (stdout if omitted)
    #[arg(short, long, value_name = "FILE", action = ArgAction::Append)]
    pub output: Vec<PathBuf>,

    /// Output format for first/only output (inferred from extension if not specified)
    #[arg(long = "outfmt", value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,

    /// Source model name (defaults to the input file stem)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    #[command(flatten)]
    pub read: ReadOptions,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Input shapefile (.shp with .dbf alongside)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Print every vertex ring as WKT
    #[arg(long)]
    pub wkt: bool,

    /// Suppress the banner
    #[arg(short, long)]
    pub quiet: bool,

    #[command(flatten)]
    pub read: ReadOptions,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// OpenQuake NRML 0.4 source model (XML)
    #[value(alias = "xml")]
    Nrml,
    /// JSON dump of the parsed sources
    Json,
}

pub fn parse() -> Cli {
    Cli::parse()
}
