//! Whole-page assembly.

use crate::config::Config;
use crate::counts::CountsTable;
use crate::error::{EngineError, Result};
use crate::listing::list_archives;
use crate::record::FileRecord;
use crate::render::{Totals, render_list, render_rows, render_total};
use crate::template::{self, STYLE_MARKER, TableFill, Templates};
use pgn_index_shared_kernel::Variant;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Per-variant download list written next to the archives.
pub const LIST_FILE: &str = "list.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantSummary {
    pub variant: Variant,
    #[serde(flatten)]
    pub totals: Totals,
    pub list_path: PathBuf,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub index_path: PathBuf,
    pub variants: Vec<VariantSummary>,
}

/// Result of processing one variant: its rendered block and summary.
struct VariantOutput {
    block: String,
    summary: VariantSummary,
}

/// Renders and writes the page for every configured variant.
///
/// Variants are processed one after another in configuration order; any
/// failure aborts the run before the page is written.
///
/// # Errors
///
/// Returns the first I/O or archive naming error encountered.
pub fn run(config: &Config) -> Result<RunReport> {
    if config.variants.is_empty() {
        return Err(EngineError::Config("no variants configured".into()));
    }

    let templates = Templates::load(&config.template_dir)?;
    let mut page = templates.index.clone();
    let mut variants = Vec::with_capacity(config.variants.len());

    for variant in &config.variants {
        let output = process_variant(config, variant, &templates.table)?;
        page = template::fill(page, &template::table_marker(variant), &output.block);
        variants.push(output.summary);
    }

    let page = template::fill(page, STYLE_MARKER, &templates.style);
    let index_path = config.index_path();
    write_file(&index_path, &page)?;
    log::info!("wrote {}", index_path.display());

    Ok(RunReport {
        index_path,
        variants,
    })
}

fn process_variant(config: &Config, variant: &Variant, table_template: &str) -> Result<VariantOutput> {
    let dir = config.variant_dir(variant);
    let counts = CountsTable::load(&dir)?;
    let records = list_archives(&counts, &dir, config.clock_since)?;
    let totals = Totals::of(&records);
    log::info!(
        "{variant}: {} files, {:#}, {:#} games",
        totals.files,
        totals.size,
        totals.games
    );

    let list_path = dir.join(LIST_FILE);
    write_file(&list_path, &render_list(&records, variant, config.download_root()))?;

    let block = render_block(table_template, variant, &records, &totals);
    Ok(VariantOutput {
        block,
        summary: VariantSummary {
            variant: variant.clone(),
            totals,
            list_path,
        },
    })
}

/// Fills the table template with one variant's rows and totals.
pub fn render_block(
    table_template: &str,
    variant: &Variant,
    records: &[FileRecord],
    totals: &Totals,
) -> String {
    let games = totals.games.to_grouped();
    let rows = render_rows(records, variant);
    let total = render_total(totals);
    template::render_table_block(
        table_template,
        &TableFill {
            variant,
            games: &games,
            rows: &rows,
            total: &total,
        },
    )
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| EngineError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
