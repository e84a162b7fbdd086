use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ConvertError, Result};

/// Serializes an object to a pretty-printed JSON file.
///
/// The JSON is written to a sibling temporary file first and then renamed
/// over `output_path`, so readers never observe a half-written document.
pub fn object_to_json<T: Serialize>(output_path: impl AsRef<Path>, object: &T) -> Result<()> {
    let output_path = output_path.as_ref();
    let j = serde_json::to_string_pretty(object).map_err(|source| ConvertError::Json {
        path: output_path.to_path_buf(),
        source,
    })?;

    let tmp_path = temporary_sibling(output_path);
    {
        let mut file =
            fs::File::create(&tmp_path).map_err(|e| ConvertError::io(&tmp_path, e))?;
        file.write_all(j.as_bytes())
            .and_then(|_| file.write_all(b"\n"))
            .and_then(|_| file.sync_all())
            .map_err(|e| ConvertError::io(&tmp_path, e))?;
    }
    fs::rename(&tmp_path, output_path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        ConvertError::io(output_path, e)
    })
}

/// Deserializes an object from a JSON file.
pub fn object_from_json<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> Result<T> {
    let file_path = file_path.as_ref();
    let contents = fs::read_to_string(file_path).map_err(|e| ConvertError::io(file_path, e))?;
    serde_json::from_str(&contents).map_err(|source| ConvertError::Json {
        path: file_path.to_path_buf(),
        source,
    })
}

fn temporary_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Reads whitespace separated numbers, one row per line.
///
/// Blank lines and `#` comments are skipped. Every row must hold the same
/// number of values.
pub fn parse_numeric_rows(path: impl AsRef<Path>) -> Result<Vec<Vec<f64>>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (line_idx, line) in contents.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| ConvertError::InvalidNumber {
                    path: path.to_path_buf(),
                    line: line_idx + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(ConvertError::RaggedMatrix {
                    path: path.to_path_buf(),
                    line: line_idx + 1,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }
    Ok(rows)
}
