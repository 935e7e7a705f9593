use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Directory holding the running executable, with symlinks resolved.
pub fn program_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("locate running executable")?;
    let resolved = exe
        .canonicalize()
        .with_context(|| format!("resolve executable path {}", exe.display()))?;
    resolved
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("executable {} has no parent directory", resolved.display()))
}
