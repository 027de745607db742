use crate::error::Result;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads every CSV record from `path`, header row included as row 0.
pub fn read_records(path: &Path) -> Result<Vec<Vec<String>>> {
    let file = std::fs::File::open(path)?;
    let records = read_records_from(file)?;
    debug!("read {} records from {}", records.len(), path.display());
    Ok(records)
}

pub fn read_records_from<R: Read>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        records.push(record.iter().map(str::to_string).collect());
    }
    Ok(records)
}
