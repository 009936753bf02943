//! Launching child processes with captured output.
//!
//! [`start_process`] runs a program, optionally feeds it stdin, collects
//! stdout and stderr on helper threads, and waits a bounded time for it to
//! exit. A process still running when the wait window closes is killed.
//!
//! # Examples
//!
//! ```no_run
//! use streamliner::process::{start_process, ProcessOptions};
//!
//! let options = ProcessOptions {
//!     arguments: vec!["-la".into()],
//!     ..ProcessOptions::default()
//! };
//! let output = start_process("ls", &options)?;
//! println!("{}", String::from_utf8_lossy(&output.stdout.unwrap_or_default()));
//! # Ok::<(), streamliner::StreamlinerError>(())
//! ```

use std::collections::HashMap;
use std::ffi::OsStr;
use std::io::{self, Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::Result;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Options for [`start_process`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    pub arguments: Vec<String>,
    /// Variables added to (or overriding) the inherited environment.
    pub environment: HashMap<String, String>,
    /// Bytes written to the child's stdin, which is then closed. When `None`
    /// the child inherits stdin.
    pub stdin: Option<Vec<u8>>,
    pub capture_output: bool,
    pub capture_error: bool,
    /// How long to wait for the child to exit before killing it.
    pub wait_for_exit: Duration,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            arguments: Vec::new(),
            environment: HashMap::new(),
            stdin: None,
            capture_output: true,
            capture_error: true,
            wait_for_exit: Duration::from_millis(15_000),
        }
    }
}

/// What a finished (or killed) child left behind.
#[derive(Debug)]
pub struct ProcessOutput {
    /// Captured stdout, `None` when not captured.
    pub stdout: Option<Vec<u8>>,
    /// Captured stderr decoded as UTF-8 (lossy), `None` when not captured.
    pub stderr: Option<String>,
    /// Exit status, `None` when the child was killed after the wait window.
    pub status: Option<ExitStatus>,
}

fn stdio(piped: bool) -> Stdio {
    if piped { Stdio::piped() } else { Stdio::inherit() }
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buffer = Vec::new();
        pipe.read_to_end(&mut buffer)?;
        Ok(buffer)
    })
}

fn join<T>(handle: JoinHandle<io::Result<T>>) -> Result<T> {
    let result = handle
        .join()
        .map_err(|_| io::Error::other("process pipe thread panicked"))?;
    Ok(result?)
}

fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Result<Option<ExitStatus>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            log::warn!("Process {} still running after {:?}, killing it", child.id(), timeout);
            if let Err(e) = child.kill() {
                log::warn!("Failed to kill process {}: {}", child.id(), e);
            }
            child.wait()?;
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Runs `file_name` with `options` and collects its output.
///
/// # Errors
///
/// Returns an `Io` error if the program cannot be started or one of its
/// pipes fails.
pub fn start_process<S: AsRef<OsStr>>(file_name: S, options: &ProcessOptions) -> Result<ProcessOutput> {
    let file_name = file_name.as_ref();
    let mut command = Command::new(file_name);
    command
        .args(&options.arguments)
        .envs(&options.environment)
        .stdin(stdio(options.stdin.is_some()))
        .stdout(stdio(options.capture_output))
        .stderr(stdio(options.capture_error));

    log::debug!("Starting process {:?} {:?}", file_name, options.arguments);
    let mut child = command.spawn()?;

    let stdin_writer = match (child.stdin.take(), options.stdin.clone()) {
        (Some(mut pipe), Some(data)) => Some(thread::spawn(move || pipe.write_all(&data))),
        _ => None,
    };
    let stdout_reader = child.stdout.take().map(spawn_reader);
    let stderr_reader = child.stderr.take().map(spawn_reader);

    let status = wait_with_timeout(&mut child, options.wait_for_exit)?;

    if let Some(writer) = stdin_writer {
        // a child that exits without draining stdin closes the pipe under us
        if let Err(e) = join(writer) {
            log::debug!("Writing stdin of {:?} stopped early: {}", file_name, e);
        }
    }
    let stdout = stdout_reader.map(join).transpose()?;
    let stderr = stderr_reader
        .map(join)
        .transpose()?
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned());

    log::debug!("Process {:?} finished with {:?}", file_name, status);
    Ok(ProcessOutput { stdout, stderr, status })
}
