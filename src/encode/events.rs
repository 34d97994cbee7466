use std::path::Path;

use crate::{
    foundation::error::OsbResult, storyboard::chain::ChainBuilder,
    storyboard::registry::Storyboard,
};

/// Section header line of the storyboard events block.
pub const EVENTS_HEADER: &str = "[Events]";

/// Line terminator used in the emitted document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// `\r\n`, what the game itself writes.
    #[default]
    CrLf,
    /// `\n`.
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

/// Options for [`render_events`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EventsOpts {
    pub line_ending: LineEnding,
}

/// Render every registered sprite chain into the `[Events]` document.
///
/// Sprites appear in registry order, separated by a blank line; the document ends with a
/// trailing blank line. Reads only, so rendering twice yields the same text.
pub fn render_events(board: &Storyboard, opts: EventsOpts) -> String {
    let eol = opts.line_ending.as_str();
    let mut out = String::new();
    out.push_str(EVENTS_HEADER);
    out.push_str(eol);

    for (i, sprite) in board.get().iter().enumerate() {
        if i > 0 {
            out.push_str(eol);
        }
        for record in sprite.chain() {
            out.push_str(&record.to_string());
            out.push_str(eol);
        }
    }

    out.push_str(eol);
    out
}

/// Write a rendered document to `path`, creating parent directories.
///
/// The text goes to a sibling temp file first and is renamed into place, so readers never see
/// a half-written document.
pub fn write_document(path: &Path, text: &str) -> OsbResult<()> {
    use anyhow::Context as _;

    ensure_parent_dir(path)?;
    let tmp = temp_path(path);

    let guard = TempFileGuard(Some(tmp.clone()));
    std::fs::write(&tmp, text)
        .with_context(|| format!("failed to write temp file '{}'", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("failed to move output into '{}'", path.display()))?;
    guard.disarm();
    Ok(())
}

/// Sibling of `path` private to this process: `<name>.<pid>.tmp`.
fn temp_path(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "storyboard.osb".into());
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> OsbResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

struct TempFileGuard(Option<std::path::PathBuf>);

impl TempFileGuard {
    fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/events.rs"]
mod tests;
