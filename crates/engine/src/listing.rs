//! Variant directory enumeration.

use crate::counts::CountsTable;
use crate::error::{EngineError, Result};
use crate::record::{FileRecord, is_archive};
use pgn_index_shared_kernel::{DomainError, YearMonth};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::path::Path;

/// Lists the archives of one variant directory, newest first.
///
/// Every entry whose name contains `.pgn.bz2` becomes a record; metadata is
/// gathered in parallel and the first failure aborts the listing.
///
/// # Errors
///
/// Fails when the directory cannot be read, an archive cannot be stated, or an
/// archive name carries no release month or is not valid UTF-8.
pub fn list_archives(
    counts: &CountsTable,
    variant_dir: &Path,
    clock_since: YearMonth,
) -> Result<Vec<FileRecord>> {
    let dir_err = |e: std::io::Error| EngineError::DirRead {
        path: variant_dir.to_path_buf(),
        source: e,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(variant_dir).map_err(dir_err)? {
        let entry = entry.map_err(dir_err)?;
        match entry.file_name().into_string() {
            Ok(name) if is_archive(&name) => names.push(name),
            Ok(_) => {}
            Err(raw) => {
                let lossy = raw.to_string_lossy();
                if is_archive(&lossy) {
                    return Err(DomainError::InvalidFileName {
                        name: lossy.into_owned(),
                    }
                    .into());
                }
                log::warn!("{}: skipping non UTF-8 entry {lossy}", variant_dir.display());
            }
        }
    }

    let mut records = names
        .par_iter()
        .map(|name| FileRecord::extract(counts, variant_dir, name, clock_since))
        .collect::<Result<Vec<_>>>()?;

    records.sort_by(newest_first);
    Ok(records)
}

/// Descending by month; equal months fall back to descending name so the
/// output does not depend on directory iteration order.
fn newest_first(a: &FileRecord, b: &FileRecord) -> Ordering {
    b.date.cmp(&a.date).then_with(|| b.name.cmp(&a.name))
}
