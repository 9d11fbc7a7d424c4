// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use std::path::Path;

/// Export target check: a new file is fine, an existing one needs `force`
/// or an explicit yes at the prompt.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    let question = format!("'{}' already exists. Overwrite?", path.display());
    if !confirm(&question)? {
        return Err(AppError::Export(format!(
            "export cancelled: {} left untouched",
            path.display()
        )));
    }

    info("Existing file will be replaced.");
    Ok(())
}
