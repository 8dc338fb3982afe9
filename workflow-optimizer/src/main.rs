//! Rewrites the infrastructure-loading step of the repository's workflows to
//! read GitHub Variables instead of deployment-info files.
//!
//! Runs against the current directory over a fixed list of workflow files.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use workflow_optimizer::exit_codes;
use workflow_optimizer::logging;
use workflow_optimizer::optimize::optimize_from_root;

#[derive(Parser)]
#[command(
    name = "workflow-optimizer",
    version,
    about = "Replace deployment-info lookups in CI workflows with GitHub Variables"
)]
struct Cli {}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILED);
    }
    std::process::exit(exit_codes::OK);
}

fn run() -> Result<()> {
    let Cli {} = Cli::parse();
    let root = std::env::current_dir().context("resolve current directory")?;
    let mut stdout = std::io::stdout().lock();
    optimize_from_root(&root, &mut stdout)?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}
