// ABOUTME: Subprocess boundary to the external recipe generation process
// ABOUTME: Handles spawn, concurrent output draining, line framing, and failure taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorMind

//! # Recipe Generator Invoker
//!
//! Launches the external generation process once per request, delivers the
//! request as a single JSON document on stdin, and collects stdout/stderr
//! concurrently. The generator is opaque logic behind a text-in/text-out
//! boundary: any process honoring the same framing convention can replace it
//! without touching the route handlers.
//!
//! ## Framing convention
//!
//! The process may emit arbitrary diagnostic lines on stdout. Only lines that,
//! after trimming, begin with `{` are candidates for the structured result,
//! and the **last** such line is authoritative. A result object carrying an
//! `error` field is a logical failure reported by the generator itself,
//! distinct from a failure to communicate with it.
//!
//! Exactly one outcome is produced per invocation. No retries happen here;
//! retry policy belongs to the caller.

use crate::config::GeneratorConfig;
use crate::models::GenerationRequest;
use serde_json::Value;
use std::io;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;
use tracing::{debug, warn};

/// Maximum bytes of raw process output carried in error diagnostics
const DIAGNOSTIC_LIMIT: usize = 4096;

/// stderr lines containing these markers are not logged
const BENIGN_STDERR_MARKERS: &[&str] = &["DeprecationWarning", "UserWarning"];

/// Failure modes of a single generator invocation
#[derive(Debug, Error)]
pub enum InvocationError {
    /// The process could not be started at all
    #[error("failed to start generator process: {0}")]
    Launch(#[source] io::Error),

    /// The process exited without emitting any framed result line
    #[error("generator produced no parseable output")]
    NoOutput {
        /// Accumulated stderr, for operator diagnostics
        stderr: String,
    },

    /// The framed result line was not valid JSON
    #[error("generator output was not valid JSON: {source}")]
    MalformedOutput {
        #[source]
        source: serde_json::Error,
        /// Raw stdout, for operator diagnostics
        raw_output: String,
    },

    /// The generator itself reported a logical failure
    #[error("{0}")]
    Upstream(String),

    /// The process exceeded the caller-supplied deadline and was killed
    #[error("generator exceeded the {} second deadline", .0.as_secs())]
    Timeout(Duration),
}

/// Invoker for the external recipe generation process
///
/// Each call to [`invoke`](Self::invoke) owns its process handle and output
/// buffers exclusively; nothing is shared between concurrent invocations.
#[derive(Debug, Clone)]
pub struct RecipeGenerator {
    config: GeneratorConfig,
}

impl RecipeGenerator {
    /// Create an invoker for the configured generator command
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Run one generation request through the external process
    ///
    /// Spawns exactly one process, writes the serialized request to its stdin
    /// and closes the channel, then drains stdout and stderr concurrently
    /// until the process exits. Both streams must be drained or the child can
    /// deadlock on a full pipe buffer.
    ///
    /// The spawned child is killed if this future is dropped, so an aborted
    /// HTTP request does not leave orphaned generator processes behind.
    ///
    /// # Errors
    ///
    /// Returns one [`InvocationError`] variant per the module-level taxonomy.
    pub async fn invoke(&self, request: &GenerationRequest) -> Result<Value, InvocationError> {
        let payload = serde_json::to_vec(request)
            .map_err(|e| InvocationError::Launch(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        let mut command = Command::new(&self.config.command);
        command
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.config.working_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(InvocationError::Launch)?;

        let stdin = child.stdin.take();
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // Reader tasks start before stdin is written so a chatty child can
        // never fill a pipe while we are still blocked on the write. Output
        // is drained as raw bytes: the generator runtime may emit non-UTF-8
        // diagnostics, and those must still reach the error paths.
        let stdout_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            if let Some(mut stream) = stdout {
                if let Err(e) = stream.read_to_end(&mut buf).await {
                    warn!("error draining generator stdout: {e}");
                }
            }
            String::from_utf8_lossy(&buf).into_owned()
        });
        let stderr_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            if let Some(mut stream) = stderr {
                if let Err(e) = stream.read_to_end(&mut buf).await {
                    warn!("error draining generator stderr: {e}");
                }
            }
            String::from_utf8_lossy(&buf).into_owned()
        });

        // The write runs as its own task so the deadline below also bounds
        // payload delivery: a child that never reads a payload larger than
        // the pipe buffer would otherwise block this future past the
        // deadline. Killing the child breaks the pipe and unblocks the task.
        let stdin_task = stdin.map(|mut stdin| {
            tokio::spawn(async move {
                // A child that exits without reading its input breaks the
                // pipe; that is not a transport failure, its output still
                // decides the outcome.
                let delivered = async {
                    stdin.write_all(&payload).await?;
                    stdin.shutdown().await
                }
                .await;
                if let Err(e) = delivered {
                    debug!("generator closed stdin early: {e}");
                }
                // Dropping the handle closes the channel, end-of-input.
            })
        });

        let status = match self.config.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(result) => result.map_err(InvocationError::Launch)?,
                Err(_) => {
                    let _ = child.kill().await;
                    if let Some(task) = stdin_task {
                        task.abort();
                    }
                    stdout_task.abort();
                    stderr_task.abort();
                    warn!("generator killed after exceeding {}s deadline", limit.as_secs());
                    return Err(InvocationError::Timeout(limit));
                }
            },
            None => child.wait().await.map_err(InvocationError::Launch)?,
        };

        // The child is gone, so a still-pending write fails promptly.
        if let Some(task) = stdin_task {
            let _ = task.await;
        }
        let stdout_buf = stdout_task.await.unwrap_or_default();
        let stderr_buf = stderr_task.await.unwrap_or_default();

        debug!(exit_code = ?status.code(), "generator process exited");
        log_stderr_diagnostics(&stderr_buf);

        // The exit code is deliberately ignored for result parsing: some
        // generator runtimes exit non-zero after having already printed a
        // valid result or error object.
        let Some(line) = last_framed_line(&stdout_buf) else {
            return Err(InvocationError::NoOutput {
                stderr: truncate_diagnostic(&stderr_buf),
            });
        };

        let value: Value = serde_json::from_str(line).map_err(|source| {
            InvocationError::MalformedOutput {
                source,
                raw_output: truncate_diagnostic(&stdout_buf),
            }
        })?;

        if let Some(error) = value.get("error") {
            let message = error
                .as_str()
                .map_or_else(|| error.to_string(), str::to_owned);
            return Err(InvocationError::Upstream(message));
        }

        Ok(value)
    }
}

/// Select the authoritative result line from accumulated stdout
///
/// Keeps only lines that begin with `{` after trimming and returns the last
/// one; earlier matches are treated as diagnostics.
fn last_framed_line(stdout: &str) -> Option<&str> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('{'))
        .next_back()
}

/// Log non-benign stderr lines for operability
///
/// The user payload never appears on stderr paths, so these lines are safe to
/// log verbatim.
fn log_stderr_diagnostics(stderr: &str) {
    for line in stderr.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if BENIGN_STDERR_MARKERS.iter().any(|m| trimmed.contains(m)) {
            continue;
        }
        warn!("generator stderr: {trimmed}");
    }
}

/// Bound the size of raw output carried in error diagnostics
fn truncate_diagnostic(raw: &str) -> String {
    if raw.len() <= DIAGNOSTIC_LIMIT {
        return raw.to_owned();
    }
    let mut end = DIAGNOSTIC_LIMIT;
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated)", &raw[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_framed_line_picks_last_json_line() {
        let output = "loading model\n{\"first\": 1}\ndiagnostic\n  {\"second\": 2}  \n";
        assert_eq!(last_framed_line(output), Some("{\"second\": 2}"));
    }

    #[test]
    fn test_last_framed_line_ignores_non_json_lines() {
        let output = "warning: something\nplain text\n";
        assert_eq!(last_framed_line(output), None);
    }

    #[test]
    fn test_last_framed_line_empty_input() {
        assert_eq!(last_framed_line(""), None);
    }

    #[test]
    fn test_truncate_diagnostic_bounds_output() {
        let raw = "x".repeat(DIAGNOSTIC_LIMIT * 2);
        let truncated = truncate_diagnostic(&raw);
        assert!(truncated.len() < raw.len());
        assert!(truncated.ends_with("(truncated)"));
    }
}
