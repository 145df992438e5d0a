//! JSON-lines command scripts
//!
//! One [`Command`] per line; blank lines and lines starting with `#` are
//! skipped. Every command produces exactly one response line.

use super::{dispatch, Command, Response};
use crate::export::render_json;
use crate::registry::Registry;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Counters for a finished script run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Commands executed, including malformed ones
    pub commands: usize,

    /// Responses that reported an error
    pub errors: usize,
}

/// Replay a command script against `registry`, writing one response per command
///
/// Malformed lines are answered with a 400 error response; only I/O
/// failures abort the run.
pub fn run_script<R: BufRead, W: Write>(
    registry: &Registry,
    reader: R,
    mut writer: W,
    pretty: bool,
) -> Result<ScriptSummary> {
    let mut summary = ScriptSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("Failed to read script line {}", line_number))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let response = match serde_json::from_str::<Command>(line) {
            Ok(command) => dispatch(registry, command),
            Err(e) => {
                log::warn!("Line {}: invalid command: {}", line_number, e);
                Response::error(400, format!("Invalid command on line {}: {}", line_number, e))
            }
        };

        summary.commands += 1;
        if response.is_error() {
            summary.errors += 1;
        }

        let rendered = render_json(&response, pretty)
            .with_context(|| format!("Failed to serialize response for line {}", line_number))?;
        writeln!(writer, "{}", rendered)
            .with_context(|| format!("Failed to write response for line {}", line_number))?;
    }

    writer.flush().context("Failed to flush responses")?;

    log::info!(
        "Script finished: {} commands, {} errors",
        summary.commands,
        summary.errors
    );
    Ok(summary)
}
