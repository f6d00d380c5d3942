// src/args.rs
use crate::options::OutputFormat;
use crate::parsers;
use clap::{Args as ClapArgs, Parser, ValueHint};
use pgn_index_shared_kernel::{Variant, YearMonth};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pgn_index",
    version,
    about = "Render the archive index page and download lists for every variant"
)]
pub struct Args {
    #[command(flatten)]
    pub site: SiteOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// Source root with one subdirectory per variant
    #[arg(value_hint = ValueHint::DirPath)]
    pub source: PathBuf,
}

#[derive(ClapArgs, Debug, Default)]
pub struct SiteOptions {
    /// Directory holding index.html.tpl, table.html.tpl and style.css [default: .]
    #[arg(short, long, value_hint = ValueHint::DirPath, help_heading = "Site")]
    pub templates: Option<PathBuf>,

    /// Page output path [default: <SOURCE>/index.html]
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Site")]
    pub output: Option<PathBuf>,

    /// Download host used in links and lists
    #[arg(long, value_hint = ValueHint::Url, help_heading = "Site")]
    pub base_url: Option<String>,

    /// Variants to publish, in page order (repeatable, comma separated)
    #[arg(long = "variant", value_delimiter = ',', value_parser = parsers::parse_variant, help_heading = "Site")]
    pub variants: Vec<Variant>,

    /// First month whose archives include clock times (YYYY-MM)
    #[arg(long, value_parser = parsers::parse_year_month, help_heading = "Site")]
    pub clock_since: Option<YearMonth>,

    /// JSON config file; command line flags take precedence
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Site")]
    pub config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Run summary format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Do not print the run summary
    #[arg(short, long, help_heading = "Output")]
    pub quiet: bool,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,
}
