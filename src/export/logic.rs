// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::notify_export_success;
use crate::utils::path::expand_tilde;
use serde::Serialize;
use std::fs;

/// Pretty-printed JSON array.
pub fn to_json<T: Serialize>(rows: &[T]) -> AppResult<String> {
    let mut json = serde_json::to_string_pretty(rows)?;
    json.push('\n');
    Ok(json)
}

/// CSV with a header row derived from the field names.
pub fn to_csv<T: Serialize>(rows: &[T]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in rows {
        wtr.serialize(row)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

/// Print `content` to stdout, or write it to `output` (asking before an
/// existing file is replaced unless `force` is set).
pub fn write_output(content: &str, label: &str, output: Option<&str>, force: bool) -> AppResult<()> {
    let Some(file) = output else {
        print!("{content}");
        return Ok(());
    };

    let path = expand_tilde(file);
    ensure_writable(&path, force)?;
    fs::write(&path, content)?;

    notify_export_success(label, &path);
    Ok(())
}
