use std::path::Path;

use anyhow::Context;
use csv::WriterBuilder;

use crate::model::JobRecord;

/// Writes the final records as a headered CSV, one row per record, one
/// column per field, no index column.
pub fn write_csv(path: &Path, records: &[JobRecord]) -> anyhow::Result<()> {
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    Ok(())
}
