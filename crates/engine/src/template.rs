//! Page and table templates.
//!
//! Templates are plain HTML files with comment markers; substitution is plain
//! text replacement.

use crate::error::{EngineError, Result};
use pgn_index_shared_kernel::Variant;
use std::path::Path;

pub const INDEX_TEMPLATE: &str = "index.html.tpl";
pub const TABLE_TEMPLATE: &str = "table.html.tpl";
pub const STYLESHEET: &str = "style.css";

pub const GAMES_MARKER: &str = "<!-- nbGames -->";
pub const FILES_MARKER: &str = "<!-- files -->";
pub const TOTAL_MARKER: &str = "<!-- total -->";
pub const VARIANT_MARKER: &str = "<!-- variant -->";
pub const STYLE_MARKER: &str = "<!-- style -->";

/// Marker a variant's table block replaces in the page template.
pub fn table_marker(variant: &Variant) -> String {
    format!("<!-- table-{variant} -->")
}

/// The three template inputs, read once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub index: String,
    pub table: String,
    pub style: String,
}

impl Templates {
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            index: read(dir, INDEX_TEMPLATE)?,
            table: read(dir, TABLE_TEMPLATE)?,
            style: read(dir, STYLESHEET)?,
        })
    }
}

fn read(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    std::fs::read_to_string(&path).map_err(|e| EngineError::FileRead { path, source: e })
}

/// Replaces the first occurrence of `marker`. Returns `None` when absent.
pub fn replace_first(haystack: &str, marker: &str, value: &str) -> Option<String> {
    let at = haystack.find(marker)?;
    let mut out = String::with_capacity(haystack.len() + value.len());
    out.push_str(&haystack[..at]);
    out.push_str(value);
    out.push_str(&haystack[at + marker.len()..]);
    Some(out)
}

/// Like [`replace_first`] but keeps the input, logging a warning, when the
/// marker is missing.
pub fn fill(haystack: String, marker: &str, value: &str) -> String {
    match replace_first(&haystack, marker, value) {
        Some(filled) => filled,
        None => {
            log::warn!("template marker {marker} not found; left unchanged");
            haystack
        }
    }
}

/// Figures substituted into the table template for one variant.
#[derive(Debug, Clone, Copy)]
pub struct TableFill<'a> {
    pub variant: &'a Variant,
    pub games: &'a str,
    pub rows: &'a str,
    pub total: &'a str,
}

/// Renders one variant block from the table template.
pub fn render_table_block(table_template: &str, fill_with: &TableFill<'_>) -> String {
    let block = fill(table_template.to_string(), GAMES_MARKER, fill_with.games);
    let block = fill(block, FILES_MARKER, fill_with.rows);
    let block = fill(block, TOTAL_MARKER, fill_with.total);
    block.replace(VARIANT_MARKER, fill_with.variant.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn replaces_only_first_occurrence() {
        assert_eq!(
            replace_first("a <!-- x --> b <!-- x -->", "<!-- x -->", "1").as_deref(),
            Some("a 1 b <!-- x -->")
        );
        assert_eq!(replace_first("nothing here", "<!-- x -->", "1"), None);
    }

    #[test]
    fn missing_marker_is_noop() {
        assert_eq!(fill("plain".to_string(), STYLE_MARKER, "css"), "plain");
    }

    #[test]
    fn value_markers_are_not_reexpanded() {
        let filled = fill("[<!-- files -->]".to_string(), FILES_MARKER, "<!-- files -->");
        assert_eq!(filled, "[<!-- files -->]");
    }

    #[test]
    fn table_block_fills_every_marker() {
        let variant = Variant::new("atomic").unwrap();
        let template = "<h2 id=\"<!-- variant -->\"><!-- variant --></h2>\
                        <p><!-- nbGames --> games</p>\
                        <table><!-- files --><!-- total --></table>";
        let block = render_table_block(
            template,
            &TableFill {
                variant: &variant,
                games: "1,000",
                rows: "<tr>row</tr>",
                total: "<tr>total</tr>",
            },
        );
        assert_eq!(
            block,
            "<h2 id=\"atomic\">atomic</h2><p>1,000 games</p>\
             <table><tr>row</tr><tr>total</tr></table>"
        );
    }

    #[test]
    fn table_marker_embeds_variant() {
        let variant = Variant::new("kingOfTheHill").unwrap();
        assert_eq!(table_marker(&variant), "<!-- table-kingOfTheHill -->");
    }

    #[test]
    fn load_reads_three_files() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(INDEX_TEMPLATE), "index").unwrap();
        std::fs::write(temp.path().join(TABLE_TEMPLATE), "table").unwrap();
        std::fs::write(temp.path().join(STYLESHEET), "style").unwrap();

        let templates = Templates::load(temp.path()).unwrap();
        assert_eq!(templates.index, "index");
        assert_eq!(templates.table, "table");
        assert_eq!(templates.style, "style");
    }

    #[test]
    fn load_reports_missing_template() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(INDEX_TEMPLATE), "index").unwrap();

        let err = Templates::load(temp.path()).unwrap_err();
        assert!(err.to_string().contains(TABLE_TEMPLATE));
    }
}
