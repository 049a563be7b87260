use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use gridfill::config::GridFillConfig;
use gridfill::io;
use gridfill::io::cli::Cli;
use gridfill::solve::solve_and_write;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: GridFillConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GridFillConfig::default()
        }
        Some(config_file) => io::read_json(&config_file).context("incorrect config file format")?,
    };

    info!("Successfully parsed GridFillConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let instances = io::read_input_file(&args.input_file)?.into_instances();
    info!(
        "[MAIN] Read {} instance(s) from {}",
        instances.len(),
        args.input_file.display()
    );

    solve_and_write(&instances, &config, &input_file_stem, &args.solution_folder)?;

    Ok(())
}
