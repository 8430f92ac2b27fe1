use crate::error::{CliError, Result};
use std::path::Path;

/// The sample to work on: values from the command line, or a JSON array of
/// strings read from `json`.
pub(crate) fn read_sample(values: Vec<String>, json: Option<&Path>) -> Result<Vec<String>> {
    match json {
        None => Ok(values),
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => CliError::FileNotFound(path.to_path_buf()),
                _ => CliError::Io(e),
            })?;
            Ok(serde_json::from_str(&text)?)
        }
    }
}
