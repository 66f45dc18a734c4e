use std::{fs, path::Path};

use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};

use crate::{error::Result, Grammar};

/// The rewriting stages, in the order they always run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    LeftRecursion,
    LeftFactor,
    Epsilon,
    UnitProduction,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::LeftRecursion,
        Stage::LeftFactor,
        Stage::Epsilon,
        Stage::UnitProduction,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Latex,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Skip lines without `->` instead of failing.
    pub lenient: bool,
    /// Remove unit productions once their targets are inlined.
    pub strip_unit_productions: bool,
    pub stages: Vec<Stage>,
    pub format: OutputFormat,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            lenient: false,
            strip_unit_productions: false,
            stages: Stage::ALL.to_vec(),
            format: OutputFormat::Plain,
        }
    }
}

impl Options {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

impl Grammar {
    /// Runs the selected stages in their fixed order.
    pub fn run_stages(&mut self, options: &Options) {
        for stage in Stage::ALL {
            if !options.stages.contains(&stage) {
                continue;
            }
            match stage {
                Stage::LeftRecursion => self.eliminate_left_recursion(),
                Stage::LeftFactor => self.left_factor(),
                Stage::Epsilon => self.eliminate_epsilon(),
                Stage::UnitProduction => {
                    self.eliminate_unit_productions(options.strip_unit_productions)
                }
            }
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let t = self.to_production_output_vec();
        Ok(match format {
            OutputFormat::Plain => t.to_plaintext(),
            OutputFormat::Latex => t.to_latex(),
            OutputFormat::Json => t.to_json()?,
        })
    }
}

/// Loads `grammar` strictly, runs every stage and returns the canonical text.
pub fn optimize(grammar: &str) -> Result<String> {
    optimize_with(grammar, &Options::default())
}

pub fn optimize_with(grammar: &str, options: &Options) -> Result<String> {
    let mut g = Grammar::parse_with(grammar, options.lenient)?;
    g.run_stages(options);
    info!(
        "optimized grammar: {} productions, {} nonterminals",
        g.productions.len(),
        g.defined_non_terminals().len()
    );
    g.render(options.format)
}
