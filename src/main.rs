use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};

use workflow_check::config::Config;

fn main() -> Result<ExitCode> {
    env_logger::init();

    // Parse configuration from command line
    let config = Config::from_args_and_env()?;
    log::debug!("Checking workflows in {:?}", config.workflows_dir);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let status = workflow_check::run(&config, &mut out)?;
    out.flush().context("Failed to flush stdout")?;

    Ok(status.exit_code())
}
