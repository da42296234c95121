use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Export the filtered view
// ---------------------------------------------------------------------------

/// Write the records at `indices` to a CSV file with the same column names
/// as the input contract.
pub fn write_csv(path: &Path, dataset: &Dataset, indices: &[usize]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating '{}'", path.display()))?;

    for &i in indices {
        writer
            .serialize(&dataset.records[i])
            .with_context(|| format!("writing record {i}"))?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

/// Write the records at `indices` as a JSON array of row objects (the same
/// shape as `df.to_json(orient='records')`).
pub fn write_json(path: &Path, dataset: &Dataset, indices: &[usize]) -> Result<()> {
    let rows: Vec<_> = indices.iter().map(|&i| &dataset.records[i]).collect();
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating '{}'", path.display()))?;
    serde_json::to_writer_pretty(file, &rows).context("writing JSON")?;
    Ok(())
}

/// Dispatch by extension (`.csv` or `.json`).
pub fn write_view(path: &Path, dataset: &Dataset, indices: &[usize]) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => write_csv(path, dataset, indices),
        "json" => write_json(path, dataset, indices),
        other => bail!("Unsupported export extension: .{other}"),
    }
}
