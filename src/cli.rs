//! Argument handling for the dispatcher.
//!
//! Only the first user-supplied argument matters. It is read raw rather than
//! through a clap parser so that flag-like tokens (`--help`, `--`) reach the
//! fallback branch like any other unknown name.
use std::ffi::OsString;

use crate::dispatch::Tool;

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Known(Tool),
    /// Raw token, empty when no argument was given.
    Unknown(String),
}

/// Parse a full process argument list (program name first).
///
/// Arguments after the subcommand are dropped here and never reach the child.
pub fn parse_invocation<I>(args: I) -> Invocation
where
    I: IntoIterator<Item = OsString>,
{
    let token = args
        .into_iter()
        .nth(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default();
    match Tool::from_token(&token) {
        Some(tool) => Invocation::Known(tool),
        None => Invocation::Unknown(token),
    }
}

/// The fallback diagnostic, without trailing newline.
pub fn unknown_command_line(token: &str) -> String {
    format!("unknown command: {token}")
}
