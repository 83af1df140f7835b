//! Reading and decoding flattened input.

use std::{
    collections::BTreeMap,
    io::Read,
    path::{Path, PathBuf},
};

use crate::cli::InputFormat;

type BoxError = Box<dyn std::error::Error>;

/// Read the whole input from a file, or from stdin for `None` and `-`.
pub fn read_input(path: Option<&PathBuf>) -> Result<String, BoxError> {
    match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "Reading input file");
            std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {e}", path.display()).into())
        }
        _ => {
            tracing::debug!("Reading input from stdin");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Decode flattened `(key, value)` pairs.
pub fn parse_pairs(text: &str, format: InputFormat) -> Result<Vec<(String, String)>, BoxError> {
    match format {
        InputFormat::Json => {
            let object: BTreeMap<String, String> = serde_json::from_str(text)
                .map_err(|e| format!("Input must be a JSON object of strings: {e}"))?;
            Ok(object.into_iter().collect())
        }
        InputFormat::Query => {
            let query = text.trim();
            let query = query.strip_prefix('?').unwrap_or(query);
            Ok(url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect())
        }
        InputFormat::Lines => parse_lines(text),
    }
}

fn parse_lines(text: &str) -> Result<Vec<(String, String)>, BoxError> {
    let mut pairs = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(format!("Line {}: expected key=value, got '{line}'", number + 1).into());
        };
        pairs.push((key.trim().to_string(), value.to_string()));
    }
    Ok(pairs)
}
