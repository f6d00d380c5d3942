//! Per-archive metadata extraction.

use crate::counts::CountsTable;
use crate::error::{EngineError, Result};
use pgn_index_shared_kernel::{DomainError, DomainResult, FileSize, GameCount, YearMonth};
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Substring every archive file name carries.
pub const ARCHIVE_MARKER: &str = ".pgn.bz2";

fn month_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r".+(\d{4}-\d{2})\.pgn\.bz2").unwrap())
}

fn short_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^.+(\d{4}-\d{2}.+)$").unwrap())
}

/// One downloadable archive of a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub name: String,
    pub short_name: String,
    pub path: PathBuf,
    pub size: FileSize,
    pub date: YearMonth,
    pub has_clock: bool,
    pub games: GameCount,
}

/// Extracts the release month from `<prefix>YYYY-MM.pgn.bz2`.
pub fn parse_month(name: &str) -> DomainResult<YearMonth> {
    let invalid = || DomainError::InvalidFileName {
        name: name.to_string(),
    };
    let token = month_re()
        .captures(name)
        .and_then(|caps| caps.get(1))
        .ok_or_else(invalid)?;
    YearMonth::parse(token.as_str()).map_err(|_| invalid())
}

/// Display name: the tail of the file name from its last `YYYY-MM` token on.
/// Names without such a token are returned unchanged.
pub fn short_name(name: &str) -> &str {
    short_name_re()
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map_or(name, |m| m.as_str())
}

pub fn is_archive(name: &str) -> bool {
    name.contains(ARCHIVE_MARKER)
}

impl FileRecord {
    /// Builds the record for `<variant_dir>/<name>`, stating the file for its size.
    pub fn extract(
        counts: &CountsTable,
        variant_dir: &Path,
        name: &str,
        clock_since: YearMonth,
    ) -> Result<Self> {
        let path = variant_dir.join(name);
        let meta = std::fs::metadata(&path).map_err(|e| EngineError::Stat {
            path: path.clone(),
            source: e,
        })?;
        let date = parse_month(name)?;

        let record = Self {
            name: name.to_string(),
            short_name: short_name(name).to_string(),
            size: FileSize::new(meta.len()),
            date,
            has_clock: date >= clock_since,
            games: counts.games(name),
            path,
        };
        log::debug!(
            "{}: {} {} games={}",
            record.path.display(),
            record.date,
            record.size,
            record.games
        );
        Ok(record)
    }
}
