//! Routing from a subcommand to its sibling program.
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::cli::{unknown_command_line, Invocation};

/// Exit code used when the subcommand is not recognized.
pub const FALLBACK_EXIT_CODE: i32 = 0;

/// Known subcommands. Each one runs the same-named program next to `ki`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Sibling `search`: account search and warm-path scoring.
    #[value(name = "search")]
    Search,
    /// Sibling `enrich`: company enrichment.
    #[value(name = "enrich")]
    Enrich,
    /// Sibling `agent`: account reasoning and outreach drafts.
    #[value(name = "agent")]
    Agent,
}

impl Tool {
    /// Exact, case-sensitive lookup.
    pub fn from_token(token: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(token, false).ok()
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::Search => "search",
            Tool::Enrich => "enrich",
            Tool::Agent => "agent",
        }
    }
}

pub fn sibling_path(dir: &Path, tool: Tool) -> PathBuf {
    dir.join(tool.name())
}

/// Run one invocation to completion and return the exit code to use.
///
/// `program_dir` is only consulted for known subcommands, so the fallback
/// branch never touches the filesystem.
pub fn run<F>(invocation: Invocation, program_dir: F, out: &mut dyn Write) -> Result<i32>
where
    F: FnOnce() -> Result<PathBuf>,
{
    match invocation {
        Invocation::Known(tool) => {
            let dir = program_dir()?;
            run_tool(&dir, tool)
        }
        Invocation::Unknown(token) => {
            tracing::debug!(token = %token, "no matching subcommand");
            writeln!(out, "{}", unknown_command_line(&token))?;
            out.flush()?;
            Ok(FALLBACK_EXIT_CODE)
        }
    }
}

/// Spawn the sibling with no arguments and inherited stdio, then wait.
pub fn run_tool(dir: &Path, tool: Tool) -> Result<i32> {
    let path = sibling_path(dir, tool);
    tracing::debug!(tool = tool.name(), path = %path.display(), "running sibling");

    let status = Command::new(&path)
        .status()
        .with_context(|| format!("run {} ({})", tool.name(), path.display()))?;

    let code = exit_code(status);
    tracing::debug!(tool = tool.name(), code, "sibling exited");
    Ok(code)
}

/// Map a child status to the code we exit with.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            tracing::warn!(signal, "sibling terminated by signal");
            return 128 + signal;
        }
    }
    1
}
