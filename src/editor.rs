//! Opening notes in the user's editor.

use crate::error::{KrappError, Result};
use std::path::Path;
use std::process::Command;

/// Build the argument list for `editor`: the words of `option` followed by
/// `path`.
fn editor_args(option: &str, path: &Path) -> Result<Vec<String>> {
    let mut args = shell_words::split(option)
        .map_err(|e| KrappError::Editor(format!("invalid editor_option '{}': {}", option, e)))?;
    args.push(path.to_string_lossy().into_owned());
    Ok(args)
}

/// Run `editor` on `path` attached to the current terminal and wait for it.
pub fn open_in_editor(editor: &str, option: &str, path: &Path) -> Result<()> {
    if editor.trim().is_empty() {
        return Err(KrappError::Editor("no editor configured".to_string()));
    }
    let args = editor_args(option, path)?;
    log::debug!("running {} {}", editor, args.join(" "));

    let status = Command::new(editor)
        .args(&args)
        .status()
        .map_err(|e| KrappError::Editor(format!("failed to execute {}: {}", editor, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(KrappError::Editor(format!(
            "{} exited with code {}",
            editor,
            status.code().unwrap_or(-1)
        )))
    }
}
