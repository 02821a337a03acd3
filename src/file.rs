// src/file.rs
//
// CSV in (store list) and CSV out (report).

use std::{
    collections::HashSet,
    fs,
    path::Path,
};

use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};

use crate::data::{report_header, ReportRow, Store};
use crate::error::{InputError, ReportError};

/// Header names accepted for the domain column.
const DOMAIN_HEADERS: &[&str] = &["url", "domain", "website", "store"];

/// Load store domains from a CSV file, keeping input order.
///
/// - If the first record names a domain column (see `DOMAIN_HEADERS`), that
///   column is used and the record skipped; otherwise column 0 is used.
/// - Undecodable rows, rows without the column, malformed domains and repeats
///   are skipped with a warning.
/// - Fails if the file cannot be opened or no store remains.
pub fn load_store_domains(path: &Path) -> Result<Vec<Store>, InputError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| InputError::Unreadable { path: path.to_path_buf(), source })?;

    let mut column = 0usize;
    let mut seen: HashSet<String> = HashSet::new();
    let mut stores = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let line = i + 1;
        let record = match record {
            Ok(r) => r,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => {
                return Err(InputError::Unreadable { path: path.to_path_buf(), source: e });
            }
            Err(e) => {
                log::warn!("{}: line {line} skipped: {e}", path.display());
                continue;
            }
        };

        if i == 0 {
            if let Some(idx) = header_column(&record) {
                column = idx;
                continue;
            }
        }

        let Some(raw) = record.get(column) else {
            log::warn!("{}: line {line} has no column {}", path.display(), column + 1);
            continue;
        };
        let Some(store) = Store::parse(raw) else {
            log::warn!("{}: line {line} skipped: {raw:?} is not a domain", path.display());
            continue;
        };
        if !seen.insert(store.domain.clone()) {
            log::warn!("{}: line {line} skipped: duplicate {}", path.display(), store.domain);
            continue;
        }
        stores.push(store);
    }

    if stores.is_empty() {
        return Err(InputError::Empty { path: path.to_path_buf() });
    }
    Ok(stores)
}

fn header_column(record: &StringRecord) -> Option<usize> {
    record
        .iter()
        .position(|cell| DOMAIN_HEADERS.iter().any(|h| cell.trim().eq_ignore_ascii_case(h)))
}

/// Write the report: fixed header, then one record per row. Truncates any
/// existing file; creates missing parent directories.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)?; // truncate/overwrite

    writer.write_record(report_header())?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }
    writer.flush()?;
    Ok(())
}

fn ensure_directory(dir: &Path) -> Result<(), std::io::Error> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
