// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::{ Result, WrapErr };

use pydocs_scrape::cli::{ self, Cli };
use pydocs_scrape::log::{ LogConfig, Logger };

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    let base_dir = std::env::current_dir().wrap_err("cannot resolve the working directory")?;
    let options = args.into_options(base_dir);

    let logger = Logger::new(&LogConfig::new(options.dirs().logs))
        .wrap_err("cannot open the log file")?;
    logger.in_scope(|| cli::run(&options));
    Ok(())
}
