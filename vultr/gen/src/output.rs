//! Validation and file writing for the generated client.
//!
//! ## Safety Guarantees
//!
//! - **Validation**: The emitted source is parsed with `syn` before writing
//! - **Atomic writes**: Uses temp file + rename so a failed run never leaves
//!   a truncated client behind

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::GeneratorError;

/// Parses generated source to make sure it is valid Rust.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` with the parser's message.
pub fn validate_code(code: &str) -> Result<syn::File, GeneratorError> {
    syn::parse_file(code)
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {}", e)))
}

/// Writes `content` to `path` through a hidden sibling temp file that is
/// renamed over the target, creating parent directories as needed.
///
/// The temp file is named after the full target file name, so a
/// neighbouring `api.tmp` is never touched, and it is removed again when the
/// rename fails.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` naming whichever path could not be
/// written to.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    let dir = path.parent().filter(|dir| !dir.as_os_str().is_empty());
    if let Some(dir) = dir {
        fs::create_dir_all(dir).map_err(|e| write_error(dir, e))?;
    }

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, content).map_err(|e| write_error(&temp_path, e))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_error(path, e));
    }
    Ok(())
}

/// `dir/api.generated.rs` becomes `dir/.api.generated.rs.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| OsStr::new("client")));
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_error(path: &Path, source: std::io::Error) -> GeneratorError {
    GeneratorError::WriteError {
        path: path.display().to_string(),
        source,
    }
}

/// Writes the client to `path`, or prints it to stdout when `dry_run` is set.
pub fn write_output(path: &Path, code: &str, dry_run: bool) -> Result<(), GeneratorError> {
    if dry_run {
        println!("{code}");
        return Ok(());
    }

    write_atomic(path, code)?;
    info!(path = %path.display(), bytes = code.len(), "Wrote generated client");
    Ok(())
}
