//! Test harness process management

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::{mpsc, oneshot};

use testlens_core::prelude::*;

/// Output observed from a running harness
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessEvent {
    /// One line of stdout, line terminator removed
    Stdout(String),
    /// One line of stderr, line terminator removed
    Stderr(String),
    /// The process exited; `None` when killed by a signal
    Exited { code: Option<i32> },
}

/// Program, arguments and working directory of the harness
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl HarnessCommand {
    pub fn new(program: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.into(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Full command line, for logs and error messages
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Manages a running test harness child process.
///
/// The `Child` handle is owned by a background wait task that reports the
/// real exit code. Dropping a `HarnessProcess` whose child is still running
/// signals that task to kill it.
pub struct HarnessProcess {
    pid: Option<u32>,
    kill_tx: Option<oneshot::Sender<()>>,
    exited: Arc<AtomicBool>,
}

impl HarnessProcess {
    /// Spawn the harness and stream its output into `event_tx`.
    ///
    /// The channel closes once stdout and stderr reach EOF and the exit
    /// status has been sent, so receivers can simply drain until `None`.
    pub fn spawn(command: &HarnessCommand, event_tx: mpsc::Sender<HarnessEvent>) -> Result<Self> {
        if !command.working_dir.is_dir() {
            return Err(Error::harness_spawn(
                command.display(),
                format!("working directory {} does not exist", command.working_dir.display()),
            ));
        }

        info!(
            "Spawning harness: {} (in {})",
            command.display(),
            command.working_dir.display()
        );

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::harness_spawn(&command.program, "command not found in PATH")
                } else {
                    Error::harness_spawn(command.display(), e.to_string())
                }
            })?;

        let pid = child.id();
        info!("Harness process started with PID: {:?}", pid);

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::harness("stdout pipe unavailable"))?;
        tokio::spawn(Self::read_lines(stdout, event_tx.clone(), HarnessEvent::Stdout));

        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| Error::harness("stderr pipe unavailable"))?;
        tokio::spawn(Self::read_lines(stderr, event_tx.clone(), HarnessEvent::Stderr));

        let exited = Arc::new(AtomicBool::new(false));
        let (kill_tx, kill_rx) = oneshot::channel::<()>();

        tokio::spawn(Self::wait_for_exit(
            child,
            kill_rx,
            event_tx,
            Arc::clone(&exited),
        ));

        Ok(Self {
            pid,
            kill_tx: Some(kill_tx),
            exited,
        })
    }

    /// Background task: owns `child`, waits for it, emits `HarnessEvent::Exited`.
    async fn wait_for_exit(
        mut child: Child,
        kill_rx: oneshot::Receiver<()>,
        event_tx: mpsc::Sender<HarnessEvent>,
        exited: Arc<AtomicBool>,
    ) {
        let code: Option<i32> = tokio::select! {
            result = child.wait() => {
                match result {
                    Ok(status) => {
                        info!("Harness exited with status: {:?}", status);
                        status.code()
                    }
                    Err(e) => {
                        error!("Error waiting for harness: {}", e);
                        None
                    }
                }
            }
            _ = kill_rx => {
                info!("Kill requested, terminating harness");
                if let Err(e) = child.kill().await {
                    error!("Failed to kill harness: {}", e);
                }
                child.wait().await.ok().and_then(|status| status.code())
            }
        };

        exited.store(true, Ordering::Release);
        let _ = event_tx.send(HarnessEvent::Exited { code }).await;
    }

    /// Forward each line of `stream` as an event. Invalid UTF-8 is replaced
    /// rather than ending the stream.
    async fn read_lines<R>(
        stream: R,
        tx: mpsc::Sender<HarnessEvent>,
        wrap: fn(String) -> HarnessEvent,
    ) where
        R: AsyncRead + Unpin,
    {
        let mut segments = BufReader::new(stream).split(b'\n');

        loop {
            match segments.next_segment().await {
                Ok(Some(bytes)) => {
                    let line = String::from_utf8_lossy(&bytes)
                        .trim_end_matches('\r')
                        .to_string();
                    if tx.send(wrap(line)).await.is_err() {
                        debug!("harness event channel closed");
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("Error reading harness output: {}", e);
                    break;
                }
            }
        }
    }

    /// Ask the wait task to kill the child. No-op once it has exited.
    pub fn kill(&mut self) {
        if let Some(tx) = self.kill_tx.take() {
            let _ = tx.send(());
        }
    }

    pub fn has_exited(&self) -> bool {
        self.exited.load(Ordering::Acquire)
    }
}

impl Drop for HarnessProcess {
    fn drop(&mut self) {
        if !self.has_exited() {
            debug!("Harness {:?} dropped while running, killing", self.pid);
            self.kill();
        }
    }
}
