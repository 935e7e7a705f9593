use anyhow::{anyhow, Result};
use std::env;
use std::io;
use std::process;

mod cli;
mod dispatch;
mod util;

/// Environment variable holding the tracing filter.
const LOG_ENV: &str = "KI_LOG";

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("ki: {err:#}");
            1
        }
    };
    process::exit(code);
}

fn run() -> Result<i32> {
    init_tracing()?;

    let invocation = cli::parse_invocation(env::args_os());
    tracing::debug!(?invocation, "parsed invocation");

    dispatch::run(invocation, util::program_dir, &mut io::stdout())
}

fn init_tracing() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    // stdout belongs to the fallback line and the child.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to initialize tracing subscriber: {err}"))
}
