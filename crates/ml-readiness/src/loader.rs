//! CSV loading for the input boundary.
//!
//! Every rejection is reported as [`ReadinessError::InvalidInputFormat`],
//! so callers can tell bad uploads apart from analysis failures.

use crate::error::{ReadinessError, Result};
use polars::io::csv::read::{CsvParseOptions, CsvReadOptions};
use polars::prelude::*;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const INFER_SCHEMA_ROWS: usize = 100;

/// Validate and load a CSV file into a DataFrame.
pub fn load_csv(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    validate_input_file(path)?;

    let df = read_with_fallbacks(path)?;
    if df.width() == 0 {
        return Err(ReadinessError::InvalidInputFormat(format!(
            "no columns could be read from '{}'",
            path.display()
        )));
    }

    info!(
        "Loaded {} ({} rows x {} columns)",
        path.display(),
        df.height(),
        df.width()
    );
    Ok(df)
}

fn validate_input_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(ReadinessError::InvalidInputFormat(format!(
            "file not found: {}",
            path.display()
        )));
    }

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(ReadinessError::InvalidInputFormat(format!(
            "only .csv files are supported: {}",
            path.display()
        )));
    }

    if fs::metadata(path)?.len() == 0 {
        return Err(ReadinessError::InvalidInputFormat(format!(
            "file is empty: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Try progressively more lenient parses before giving up.
fn read_with_fallbacks(path: &Path) -> Result<DataFrame> {
    let path_buf = PathBuf::from(path);

    // Strategy 1: standard loading with quote handling
    let quoted = CsvReadOptions::default()
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(path_buf.clone()))
        .and_then(|reader| reader.finish());
    match quoted {
        Ok(df) => return Ok(df),
        Err(e) => debug!("Standard loading failed: {}", e),
    }

    // Strategy 2: without quote handling
    let unquoted = CsvReadOptions::default()
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(None))
        .try_into_reader_with_file_path(Some(path_buf))
        .and_then(|reader| reader.finish());
    match unquoted {
        Ok(df) => return Ok(df),
        Err(e) => debug!("Loading without quotes failed: {}", e),
    }

    // Strategy 3: pre-clean the raw text
    let content = fs::read_to_string(path).map_err(|e| {
        ReadinessError::InvalidInputFormat(format!("could not read {}: {}", path.display(), e))
    })?;
    CsvReadOptions::default()
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(clean_csv_content(&content)))
        .finish()
        .map_err(|e| {
            ReadinessError::InvalidInputFormat(format!(
                "could not parse {} as CSV: {}",
                path.display(),
                e
            ))
        })
}

/// Collapse doubled quotes and drop blank lines.
fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
