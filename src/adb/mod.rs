/// Bridge to the adb command-line tool
///
/// This module owns every subprocess interaction with adb: listing
/// attached devices and capturing device screenshots. Output parsing
/// lives in the devices submodule.

pub mod devices;

// Re-export the main bridge types
pub use devices::{parse_devices, Device};

use std::process::Stdio;

use thiserror::Error;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tracing::{debug, warn};

/// Largest screenshot payload we will buffer (10 MiB)
pub const MAX_CAPTURE_BYTES: usize = 10 * 1024 * 1024;

/// Errors that can occur while driving the adb executable
///
/// Every variant renders with the same "Error executing adb" prefix, which
/// is the message text clients of this protocol already match on.
#[derive(Error, Debug)]
pub enum AdbError {
    #[error("Error executing adb: {stderr}")]
    CommandFailed { stderr: String },

    #[error("Error executing adb: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("Error executing adb: {0}")]
    Io(#[source] std::io::Error),

    #[error("Error executing adb: output exceeded the {limit} byte capture limit")]
    OutputTooLarge { limit: usize },
}

/// Handle to the adb executable
///
/// Holds the program name (resolved through PATH unless given as a path)
/// and the screenshot capture cap. Cheap to clone; every tool task gets
/// its own copy.
#[derive(Debug, Clone)]
pub struct AdbBridge {
    program: String,
    max_capture_bytes: usize,
}

impl AdbBridge {
    /// Create a bridge around the given adb program name or path
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            max_capture_bytes: MAX_CAPTURE_BYTES,
        }
    }

    /// Override the screenshot capture cap (tests use tiny limits)
    pub fn with_max_capture_bytes(mut self, limit: usize) -> Self {
        self.max_capture_bytes = limit;
        self
    }

    /// The program this bridge invokes
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `adb devices -l` and return its raw stdout
    ///
    /// The text still contains the header line; `parse_devices` turns it
    /// into device records.
    pub async fn list_devices(&self) -> Result<String, AdbError> {
        debug!("Running {} devices -l", self.program);

        let child = Command::new(&self.program)
            .args(["devices", "-l"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(AdbError::Spawn)?;

        let output = child.wait_with_output().await.map_err(AdbError::Io)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("adb devices failed: {}", stderr);
            return Err(AdbError::CommandFailed { stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run `adb [-s <device>] shell screencap -p` and return the raw PNG
    ///
    /// Stdout is read as bytes, never text-decoded, and is bounded by the
    /// capture cap; an oversized capture kills the child and fails. Stderr
    /// is drained in parallel, so a child flooding it past the pipe buffer
    /// cannot stall the capture before it ever closes stdout.
    pub async fn screencap(&self, device: Option<&str>) -> Result<Vec<u8>, AdbError> {
        let mut command = Command::new(&self.program);
        if let Some(device) = device {
            command.args(["-s", device]);
        }
        command.args(["shell", "screencap", "-p"]);

        debug!("Running {:?}", command.as_std());

        let mut child = command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(AdbError::Spawn)?;

        let stdout = match child.stdout.take() {
            Some(stdout) => stdout,
            None => {
                return Err(AdbError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "child stdout was not captured",
                )))
            }
        };
        let mut stderr = match child.stderr.take() {
            Some(stderr) => stderr,
            None => {
                return Err(AdbError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "child stderr was not captured",
                )))
            }
        };

        let stderr_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            let _ = stderr.read_to_end(&mut buf).await;
            buf
        });

        // Read one byte past the cap so an at-limit capture and an
        // oversized one are distinguishable.
        let mut png = Vec::new();
        stdout
            .take(self.max_capture_bytes as u64 + 1)
            .read_to_end(&mut png)
            .await
            .map_err(AdbError::Io)?;

        if png.len() > self.max_capture_bytes {
            warn!(
                "Screen capture exceeded {} bytes, killing adb",
                self.max_capture_bytes
            );
            // Killing the child closes its pipes and lets the drain finish.
            let _ = child.kill().await;
            let _ = stderr_task.await;
            return Err(AdbError::OutputTooLarge {
                limit: self.max_capture_bytes,
            });
        }

        let status = child.wait().await.map_err(AdbError::Io)?;
        let stderr_buf = stderr_task.await.unwrap_or_default();

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_buf).trim().to_string();
            warn!("adb screencap failed: {}", stderr);
            return Err(AdbError::CommandFailed { stderr });
        }

        debug!("Captured {} bytes", png.len());
        Ok(png)
    }
}
