use std::process::{Command, Stdio};
use std::thread::JoinHandle;
use std::time::Duration;

use wait_timeout::ChildExt;

use crate::toolchain::ToolError;

#[derive(Debug)]
pub struct CapturedOutput {
    pub status: std::process::ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

fn drain_in_background(
    reader: Option<impl std::io::Read + Send + 'static>,
) -> Option<JoinHandle<std::io::Result<Vec<u8>>>> {
    reader.map(|mut r| {
        std::thread::spawn(move || {
            let mut buf: Vec<u8> = vec![];
            r.read_to_end(&mut buf)?;
            Ok(buf)
        })
    })
}

fn finish_drain(handle: Option<JoinHandle<std::io::Result<Vec<u8>>>>) -> Result<Vec<u8>, ToolError> {
    let Some(handle) = handle else {
        return Ok(vec![]);
    };
    handle
        .join()
        .map_err(|_| ToolError::Io(std::io::Error::other("capture thread panicked")))?
        .map_err(ToolError::Io)
}

pub fn capture_with_timeout(
    mut command: Command,
    display_command: String,
    timeout: Duration,
) -> Result<CapturedOutput, ToolError> {
    command.stdout(Stdio::piped()).stderr(Stdio::piped());
    let mut child = command.spawn().map_err(ToolError::SpawnFailed)?;

    let stdout_drain = drain_in_background(child.stdout.take());
    let stderr_drain = drain_in_background(child.stderr.take());

    let maybe_status = child.wait_timeout(timeout).map_err(ToolError::WaitFailed)?;
    let Some(status) = maybe_status else {
        let _ = child.kill();
        let _ = child.wait();
        let _ = finish_drain(stdout_drain);
        let _ = finish_drain(stderr_drain);
        return Err(ToolError::TimedOut {
            command: display_command,
            timeout_ms: timeout.as_millis() as u64,
        });
    };

    Ok(CapturedOutput {
        status,
        stdout: finish_drain(stdout_drain)?,
        stderr: finish_drain(stderr_drain)?,
    })
}
