mod cli;

use std::{
    fs,
    io::{self, Read},
    process,
};

use cfg_optimizer::{optimize_with, Options, Result};
use clap::Parser;
use log::info;

fn run(cli: cli::Cli) -> Result<String> {
    let mut options = match &cli.config {
        Some(path) => Options::from_json_file(path)?,
        None => Options::default(),
    };
    cli.apply(&mut options);

    let input = match &cli.file {
        Some(path) => {
            info!("reading grammar from {}", path.display());
            fs::read_to_string(path)?
        }
        None => {
            let mut input = String::new();
            io::stdin().lock().read_to_string(&mut input)?;
            input
        }
    };

    optimize_with(&input, &options)
}

fn main() {
    env_logger::init();

    match run(cli::Cli::parse()) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
