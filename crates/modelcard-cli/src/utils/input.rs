//! Record document input.
//!
//! Commands take a path, where `-` means stdin.

use std::io::{self, Read};
use std::path::Path;

use modelcard_core::{ModelRecord, parse_records, read_records};

use crate::error::CliError;

/// Whether `path` refers to stdin.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Load records from a file, or from stdin when `path` is `-`.
pub fn load_records(path: &Path) -> Result<Vec<ModelRecord>, CliError> {
    if is_stdin(path) {
        tracing::debug!("Reading records from stdin");
        let mut content = String::new();
        io::stdin().lock().read_to_string(&mut content)?;
        return Ok(parse_records(&content)?);
    }

    tracing::debug!(path = %path.display(), "Reading records from file");
    Ok(read_records(path)?)
}
