use std::path::Path;
use std::process::Command;
use std::time::Duration;

use thiserror::Error;
use which::which;

use crate::process;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("go toolchain not found on PATH (install it from https://go.dev/dl/)")]
    GoMissing,

    #[error(
        "no symbol table in \"{binary}\": it was likely built with -ldflags \"-s -w\"; rebuild without those flags to inspect it"
    )]
    SymbolTableAbsent { binary: String },

    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("command timed out after {timeout_ms}ms: {command}")]
    TimedOut { command: String, timeout_ms: u64 },

    #[error("failed to spawn process: {0}")]
    SpawnFailed(std::io::Error),

    #[error("failed to wait on process: {0}")]
    WaitFailed(std::io::Error),

    #[error("io error: {0}")]
    Io(std::io::Error),
}

#[derive(Debug)]
pub struct BinaryListings {
    pub nm: String,
    pub buildinfo: String,
}

pub fn collect_listings(binary: &Path, timeout: Duration) -> Result<BinaryListings, ToolError> {
    let go = which("go").map_err(|_| ToolError::GoMissing)?;
    let nm = run_go(&go, &["tool", "nm", "-size"], binary, timeout)?;
    let buildinfo = run_go(&go, &["version", "-m"], binary, timeout)?;
    Ok(BinaryListings { nm, buildinfo })
}

fn run_go(
    go: &Path,
    args: &[&str],
    binary: &Path,
    timeout: Duration,
) -> Result<String, ToolError> {
    let display_command = format!("go {} {}", args.join(" "), binary.display());
    let mut command = Command::new(go);
    command.args(args).arg(binary);
    let captured = process::capture_with_timeout(command, display_command.clone(), timeout)?;
    if !captured.status.success() {
        let stderr = String::from_utf8_lossy(&captured.stderr).trim().to_string();
        return Err(classify_failure(display_command, stderr, binary));
    }
    Ok(String::from_utf8_lossy(&captured.stdout).into_owned())
}

pub(crate) fn classify_failure(command: String, stderr: String, binary: &Path) -> ToolError {
    // `go tool nm` reports "no symbols" for stripped binaries; that case
    // deserves an actionable message instead of the raw stderr.
    if stderr.contains("no symbols") {
        return ToolError::SymbolTableAbsent {
            binary: binary.display().to_string(),
        };
    }
    ToolError::CommandFailed { command, stderr }
}
