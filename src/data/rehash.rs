use crate::data::{RehashData, RehashSample, INSERT_SIZE, REHASH_ROUNDS};
use crate::error::{ChartError, Result};
use csv::StringRecord;
use std::io::Read;
use std::path::Path;

/// Read the rehash benchmark CSV at `path` into [RehashData]
///
/// The header must contain the `insert size` and `rehash rounds` columns, any
/// other column is ignored. Rows are kept in file order.
pub fn read_rehash_sizes(path: &Path) -> Result<RehashData> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|err| match err.kind() {
            csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                ChartError::NotFound {
                    path: path.to_path_buf(),
                }
            }
            _ => ChartError::Csv(err),
        })?;

    read_records(reader)
}

/// Same as [read_rehash_sizes], for any reader
pub fn read_rehash_sizes_from_reader<R: Read>(rdr: R) -> Result<RehashData> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(rdr);
    read_records(reader)
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<RehashData> {
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();

    let size_idx = column_index(&headers, INSERT_SIZE)?;
    let rounds_idx = column_index(&headers, REHASH_ROUNDS)?;

    let mut samples = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = i + 1;
        samples.push(RehashSample {
            insert_size: parse_field(&record, size_idx, row, INSERT_SIZE)?,
            rehash_rounds: parse_field(&record, rounds_idx, row, REHASH_ROUNDS)?,
        });
    }

    Ok(RehashData::new(samples))
}

fn column_index(headers: &[String], column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|name| name == column)
        .ok_or_else(|| ChartError::Schema {
            column: column.to_string(),
        })
}

fn parse_field(record: &StringRecord, idx: usize, row: usize, column: &str) -> Result<u64> {
    let raw = record.get(idx).unwrap_or_default();
    raw.trim().parse::<u64>().map_err(|_| ChartError::Parse {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })
}
