//! `CommandRunner` implementation backed by `tokio::process`.
//!
//! This module spawns the external TV control tool, captures its
//! stdout/stderr and maps the exit status onto [`RunnerError`].

use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use lounge_tv_core::{CommandRunner, Invocation, RunnerError};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// `CommandRunner` that runs each invocation as a local child process.
///
/// # Design
///
/// - One process per call, no pooling and no retries
/// - stdin is `/dev/null`; stdout and stderr are read to EOF concurrently
///   with waiting, so a chatty tool cannot fill a pipe and stall
/// - The child lives in a detached supervisor task. Dropping the future
///   returned by [`run`](CommandRunner::run) lets the process finish and still
///   reaps it
/// - On Unix the child leads its own process group; cancellation and timeouts
///   kill the whole group and return without waiting for the pipes to close
#[derive(Debug, Clone, Copy, Default)]
pub struct SubprocessRunner {
    /// Kill the child after this long. `None` waits indefinitely.
    timeout: Option<Duration>,
}

impl SubprocessRunner {
    /// Create a runner without a timeout.
    pub const fn new() -> Self {
        Self { timeout: None }
    }

    /// Kill any invocation that has not finished after `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Run `invocation`, killing the child if `cancel` fires first.
    ///
    /// Returns [`RunnerError::Cancelled`] once the killed child has been
    /// reaped. Output the tool produced before that point is discarded.
    pub async fn run_until(
        &self,
        invocation: &Invocation,
        cancel: CancellationToken,
    ) -> Result<Vec<u8>, RunnerError> {
        let child = spawn(invocation)?;
        debug!(pid = ?child.id(), command = %invocation, "Spawned TV control tool");

        let supervisor = tokio::spawn(supervise(
            child,
            invocation.args().to_vec(),
            cancel,
            self.timeout,
        ));

        supervisor
            .await
            .map_err(|e| RunnerError::Io(format!("Supervisor task failed: {e}")))?
    }
}

#[async_trait]
impl CommandRunner for SubprocessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<Vec<u8>, RunnerError> {
        self.run_until(invocation, CancellationToken::new()).await
    }
}

fn spawn(invocation: &Invocation) -> Result<Child, RunnerError> {
    let mut command = Command::new(invocation.program());
    command
        .args(invocation.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    // Own process group, so cancelling also takes down anything the tool forked.
    #[cfg(unix)]
    command.process_group(0);

    command.spawn().map_err(|e| RunnerError::Spawn {
        program: invocation.program().display().to_string(),
        message: e.to_string(),
    })
}

/// Own `child` until it exits (or is killed) and reduce it to a result.
///
/// On cancellation the output pipes are abandoned rather than drained: a
/// process the tool left behind may keep them open indefinitely.
async fn supervise(
    mut child: Child,
    args: Vec<String>,
    cancel: CancellationToken,
    timeout: Option<Duration>,
) -> Result<Vec<u8>, RunnerError> {
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let finished = {
        let completion = async {
            tokio::join!(child.wait(), read_to_end(stdout), read_to_end(stderr))
        };
        tokio::select! {
            output = completion => Some(output),
            () = cancel.cancelled() => None,
            () = deadline(timeout) => {
                warn!(?timeout, args = %args.join(" "), "TV control tool timed out");
                None
            }
        }
    };

    let Some((status, stdout, stderr)) = finished else {
        terminate(&mut child).await;
        return Err(RunnerError::Cancelled { args });
    };
    let status = status.map_err(io_error)?;
    let stdout = stdout.map_err(io_error)?;
    let stderr = stderr.map_err(io_error)?;

    debug!(
        code = ?status.code(),
        stdout_bytes = stdout.len(),
        stderr_bytes = stderr.len(),
        "TV control tool exited"
    );

    into_result(status, args, stdout, &stderr)
}

fn into_result(
    status: ExitStatus,
    args: Vec<String>,
    stdout: Vec<u8>,
    stderr: &[u8],
) -> Result<Vec<u8>, RunnerError> {
    if status.success() {
        Ok(stdout)
    } else {
        Err(RunnerError::Execution {
            code: status.code(),
            args,
            stderr: String::from_utf8_lossy(stderr).into_owned(),
        })
    }
}

/// Kill the tool's process group, then the tool itself, and reap it.
async fn terminate(child: &mut Child) {
    #[cfg(unix)]
    if let Some(pgid) = child.id().and_then(|pid| i32::try_from(pid).ok()) {
        use nix::sys::signal::{Signal, killpg};
        use nix::unistd::Pid;

        if let Err(e) = killpg(Pid::from_raw(pgid), Signal::SIGKILL) {
            debug!(pgid, "Failed to kill TV control tool process group: {}", e);
        }
    }

    // `kill` also waits, so the child is reaped either way.
    if let Err(e) = child.kill().await {
        warn!(pid = ?child.id(), "Failed to kill TV control tool: {}", e);
    }
}

async fn deadline(timeout: Option<Duration>) {
    match timeout {
        Some(timeout) => tokio::time::sleep(timeout).await,
        None => std::future::pending().await,
    }
}

async fn read_to_end<R: AsyncRead + Unpin>(stream: Option<R>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        stream.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

#[allow(clippy::needless_pass_by_value)]
fn io_error(err: io::Error) -> RunnerError {
    RunnerError::Io(err.to_string())
}
