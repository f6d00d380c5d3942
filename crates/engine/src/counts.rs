//! Sidecar `counts.txt` loading.
//!
//! Each non-empty line reads `<archive file name> <game count>`.

use crate::error::{EngineError, Result};
use pgn_index_shared_kernel::GameCount;
use std::collections::HashMap;
use std::path::Path;

pub const COUNTS_FILE: &str = "counts.txt";

/// Archive file name to raw game count, as written in the counts file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountsTable {
    entries: HashMap<String, String>,
}

impl CountsTable {
    /// Parses counts file content. Later duplicates overwrite earlier ones.
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (name, count) = match line.split_once(char::is_whitespace) {
                Some((name, rest)) => (name, rest.trim_start()),
                None => (line, ""),
            };
            let count = count.split_whitespace().next().unwrap_or("");

            if let Some(previous) = entries.insert(name.to_string(), count.to_string()) {
                log::warn!("counts: duplicate entry for {name} ({previous} replaced by {count})");
            }
        }
        Self { entries }
    }

    /// Reads and parses `<variant_dir>/counts.txt`.
    pub fn load(variant_dir: &Path) -> Result<Self> {
        let path = variant_dir.join(COUNTS_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| EngineError::FileRead {
            path: path.clone(),
            source: e,
        })?;
        let table = Self::parse(&content);
        log::debug!("{}: {} count entries", path.display(), table.len());
        Ok(table)
    }

    /// Raw count string for an exact file name.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Game count for an exact file name; zero when missing or unparsable.
    pub fn games(&self, name: &str) -> GameCount {
        self.raw(name).map(GameCount::parse_lenient).unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
