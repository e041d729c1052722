// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

/*!
  Binary for the group census: groups
*/

mod cli;

use std::io::{self, BufWriter};

use clap::Parser;
use cli::CliApp;
use colored::Colorize;
use group_census::error::Result;
use group_census::GroupSearch;

fn run(cli: CliApp) -> Result<()> {
    let config = cli.config()?;

    let mut search = GroupSearch::new(config)?;
    if config.report_tables() {
        search = search.with_output(Box::new(BufWriter::new(io::stdout())));
    }
    let census = search.run()?;

    println!(
        "Total valid groups of size {}: {}",
        config.order(),
        census.count()
    );
    Ok(())
}

fn main() {
    let cli = CliApp::parse();

    cli.logging.initialize_logging();
    log::info!("Version: {}", clap::crate_version!());
    log::debug!("Order: {}", cli.order);

    run(cli).unwrap_or_else(|err| {
        log::error!("{} {err}", "error:".red().bold());
        std::process::exit(1)
    })
}
