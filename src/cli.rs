use std::path::PathBuf;

use cfg_optimizer::{Options, OutputFormat, Stage};
use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// File containing the grammar (default: stdin)
    pub file: Option<PathBuf>,

    /// JSON file with options; flags override it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip lines without "->" instead of failing
    #[arg(short, long)]
    pub lenient: bool,

    /// Remove unit productions after inlining them
    #[arg(short = 'u', long)]
    pub strip_units: bool,

    /// Stage to run, may be repeated (default: all, in pipeline order)
    #[arg(short, long = "stage", value_enum, value_name = "STAGE")]
    pub stages: Vec<Stage>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    pub fn apply(&self, options: &mut Options) {
        options.lenient |= self.lenient;
        options.strip_unit_productions |= self.strip_units;
        if !self.stages.is_empty() {
            options.stages = self.stages.clone();
        }
        if let Some(format) = self.format {
            options.format = format;
        }
    }
}
