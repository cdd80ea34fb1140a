//! Supervised external tagger process.
//!
//! The tagger speaks a line protocol on stdin/stdout, so requests must never
//! interleave: a single mutex covers write, flush and read. When the
//! exchange fails (broken pipe, process gone) the process is restarted once
//! and the request retried under the same lock.
//!
//! ## Limitations
//!
//! - **No timeout**: a tagger that stops answering blocks the caller, and
//!   every caller queued behind it.

use std::io::{self, BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::{Error, Result};
use super::{Tagger, TaggerConfig};

// ============================================================================
// ProcessTagger
// ============================================================================

/// Tagger backed by one long-lived child process.
pub struct ProcessTagger {
    config: TaggerConfig,
    /// Empty after a failed restart; the next request starts a new process.
    process: Mutex<Option<TaggerProcess>>,
}

impl ProcessTagger {
    /// Locate and start the tagger.
    pub fn start(config: TaggerConfig) -> Result<Self> {
        let process = TaggerProcess::spawn(&config)?;
        Ok(Self { config, process: Mutex::new(Some(process)) })
    }

    pub fn config(&self) -> &TaggerConfig {
        &self.config
    }

    /// OS pid of the current tagger process, if one is running.
    pub fn pid(&self) -> Option<u32> {
        self.process.lock().as_ref().map(|p| p.child.id())
    }
}

impl Tagger for ProcessTagger {
    fn tag(&self, text: &str) -> Result<String> {
        let line = text.replace(['\r', '\n'], " ");
        let mut slot = self.process.lock();
        if let Some(process) = slot.as_mut() {
            match process.round_trip(&line) {
                Ok(tagged) => return Ok(tagged),
                Err(e) => {
                    warn!(pid = process.child.id(), error = %e, "Tagger exchange failed, restarting");
                }
            }
        }

        // The old process is killed and reaped before its replacement starts.
        drop(slot.take());
        let process = slot.insert(TaggerProcess::spawn(&self.config)?);
        process.round_trip(&line).map_err(|e| {
            Error::TaggerUnavailable(format!("tagger failed again after restart: {e}"))
        })
    }
}

// ============================================================================
// TaggerProcess
// ============================================================================

struct TaggerProcess {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl TaggerProcess {
    fn spawn(config: &TaggerConfig) -> Result<Self> {
        let mut cmd = command(config)?;
        let mut child = cmd
            .spawn()
            .map_err(|e| Error::TaggerUnavailable(format!("failed to start {cmd:?}: {e}")))?;

        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(Error::TaggerUnavailable("tagger pipes unavailable".into()));
        };
        debug!(pid = child.id(), "Tagger process started");

        Ok(Self { child, stdin, stdout: BufReader::new(stdout) })
    }

    /// Write one request line, read one response line.
    fn round_trip(&mut self, line: &str) -> io::Result<String> {
        self.stdin.write_all(line.as_bytes())?;
        self.stdin.write_all(b"\n")?;
        self.stdin.flush()?;

        let mut response = String::new();
        if self.stdout.read_line(&mut response)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "tagger closed its output"));
        }
        Ok(response.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Drop for TaggerProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// First existing interpreter, else the fallback command, followed by the
/// configured arguments.
fn command(config: &TaggerConfig) -> Result<Command> {
    let mut cmd = match config.interpreters.iter().find(|path| path.is_file()) {
        Some(interpreter) => {
            info!(interpreter = %interpreter.display(), "Using tagger interpreter");
            Command::new(interpreter)
        }
        None => {
            let (program, leading) = config.fallback.split_first().ok_or_else(|| {
                Error::TaggerUnavailable("no interpreter found and no fallback command".into())
            })?;
            info!(command = %config.fallback.join(" "), "No interpreter found, using fallback");
            let mut cmd = Command::new(program);
            cmd.args(leading);
            cmd
        }
    };
    cmd.args(&config.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());
    if let Some(dir) = &config.current_dir {
        cmd.current_dir(dir);
    }
    Ok(cmd)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sh(script: &str) -> TaggerConfig {
        TaggerConfig {
            interpreters: vec![PathBuf::from("/nonexistent/java"), PathBuf::from("/bin/sh")],
            fallback: Vec::new(),
            args: vec!["-c".into(), script.into()],
            current_dir: None,
        }
    }

    #[test]
    fn test_round_trip() {
        let tagger = ProcessTagger::start(sh("while read l; do echo \"${l}_NPP\"; done")).unwrap();
        assert_eq!(tagger.tag("Paris").unwrap(), "Paris_NPP");
        assert_eq!(tagger.tag("Lyon").unwrap(), "Lyon_NPP");
    }

    #[test]
    fn test_embedded_newline_is_flattened() {
        let tagger = ProcessTagger::start(sh("while read l; do echo \"[$l]\"; done")).unwrap();
        assert_eq!(tagger.tag("a\nb").unwrap(), "[a b]");
    }

    #[test]
    fn test_no_command_at_all() {
        let mut config = sh("true");
        config.interpreters.clear();
        assert!(matches!(ProcessTagger::start(config), Err(Error::TaggerUnavailable(_))));
    }
}
