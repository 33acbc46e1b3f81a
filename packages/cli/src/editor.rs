//! Interactive synopsis capture, in the style of `git commit`.
//!
//! A comment template is written to a scratch file, the configured editor is
//! run on it, and the process blocks until the editor exits. The first line
//! that is neither blank nor a `#` comment becomes the synopsis.

use std::fs;
use std::io::{self, Write};
use std::process::{Command, ExitStatus};

use agora_client::{validate_synopsis, ValidationError, SYNOPSIS_MAX_LEN};
use thiserror::Error;
use tracing::debug;

/// Errors that end a synopsis capture.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("synopsis scratch file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to run editor {editor:?}: {source}; set EDITOR")]
    Spawn { editor: String, source: io::Error },

    #[error("no editor configured; set EDITOR")]
    NoEditor,

    #[error("editor exited with {0}; push cancelled")]
    Aborted(ExitStatus),

    #[error("empty synopsis; push cancelled")]
    EmptySynopsis,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

fn template() -> String {
    format!(
        "\n\
         # Provide a one-sentence synopsis (at most {SYNOPSIS_MAX_LEN} characters) on the first line.\n\
         # Lines starting with '#' are ignored, as is everything after the synopsis.\n\
         # An empty synopsis cancels the push.\n"
    )
}

/// Open `editor` on a templated scratch file and return the synopsis typed.
///
/// `editor` is split on whitespace so values such as `"code --wait"` work.
pub fn capture_synopsis(editor: &str) -> Result<String, EditorError> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or(EditorError::NoEditor)?;

    let mut scratch = tempfile::Builder::new()
        .prefix("agora-synopsis-")
        .suffix(".tmp")
        .tempfile()?;
    scratch.write_all(template().as_bytes())?;
    scratch.flush()?;

    debug!(editor, path = %scratch.path().display(), "waiting for editor");
    let status = Command::new(program)
        .args(parts)
        .arg(scratch.path())
        .status()
        .map_err(|source| EditorError::Spawn {
            editor: editor.to_string(),
            source,
        })?;
    if !status.success() {
        return Err(EditorError::Aborted(status));
    }

    let text = fs::read_to_string(scratch.path())?;
    parse_synopsis(&text)
}

/// Extract the synopsis from edited text.
pub fn parse_synopsis(text: &str) -> Result<String, EditorError> {
    let synopsis = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or(EditorError::EmptySynopsis)?;
    validate_synopsis(synopsis)?;
    Ok(synopsis.to_string())
}
