use std::path::Path;

use thiserror::Error;

use super::model::{Dataset, EmissionRecord};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while loading the source CSV. Startup treats these as fatal;
/// a runtime reload keeps the previous dataset and reports the message.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: column '{column}' value '{value}' is not numeric")]
    TypeCoercion {
        row: usize,
        column: &'static str,
        value: String,
    },
}

// Exact column names are a contract with the data source.
const COL_COUNTRY: &str = "Country";
const COL_YEAR: &str = "Year";
const COL_EMISSION: &str = "CO2 emission (Tons)";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the emissions dataset from a CSV file.
///
/// Expected columns: `Country`, `Year`, `CO2 emission (Tons)`. Rows where
/// `Year` or the emission value is empty are dropped; non-empty values that
/// fail to parse as numbers are an error (the source is assumed clean, so
/// this path is defensive).
pub fn load(path: &Path) -> Result<Dataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let country_idx = column_index(&headers, COL_COUNTRY)?;
    let year_idx = column_index(&headers, COL_YEAR)?;
    let emission_idx = column_index(&headers, COL_EMISSION)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;

        let country = record.get(country_idx).unwrap_or("").trim();
        let year_raw = record.get(year_idx).unwrap_or("").trim();
        let emission_raw = record.get(emission_idx).unwrap_or("").trim();

        // Rows missing either numeric field are dropped, not an error.
        if year_raw.is_empty() || emission_raw.is_empty() {
            dropped += 1;
            continue;
        }

        let year = parse_year(year_raw).ok_or_else(|| LoadError::TypeCoercion {
            row: row_no,
            column: COL_YEAR,
            value: year_raw.to_string(),
        })?;

        let emission: f64 = emission_raw
            .parse()
            .map_err(|_| LoadError::TypeCoercion {
                row: row_no,
                column: COL_EMISSION,
                value: emission_raw.to_string(),
            })?;

        records.push(EmissionRecord {
            country: country.to_string(),
            year,
            emission,
        });
    }

    if dropped > 0 {
        log::info!("Dropped {dropped} rows with missing Year or emission");
    }

    Ok(Dataset::from_records(records))
}

fn column_index(headers: &[String], name: &'static str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(LoadError::MissingColumn(name))
}

/// Parse a year that may be written as an integer or a float-formatted
/// integer (`"2005"` or `"2005.0"`, the latter from float-typed source
/// columns).
fn parse_year(s: &str) -> Option<i32> {
    if let Ok(y) = s.parse::<i32>() {
        return Some(y);
    }
    let f: f64 = s.parse().ok()?;
    if f.fract() == 0.0 && (i32::MIN as f64..=i32::MAX as f64).contains(&f) {
        Some(f as i32)
    } else {
        None
    }
}
