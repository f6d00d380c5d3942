// src/presentation.rs
use crate::options::OutputFormat;
use pgn_index_engine::RunReport;

pub fn print_report(report: &RunReport, format: OutputFormat) {
    print!("{}", render_report(report, format));
}

pub fn render_report(report: &RunReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => render_table(report),
        OutputFormat::Json => render_json(report),
    }
}

fn render_table(report: &RunReport) -> String {
    let width = report
        .variants
        .iter()
        .map(|s| s.variant.as_str().len())
        .max()
        .unwrap_or(0)
        .max("VARIANT".len());

    let mut out = format!(
        "{:<width$}  {:>6}  {:>10}  {:>14}\n",
        "VARIANT", "FILES", "SIZE", "GAMES"
    );
    out.push_str(&"-".repeat(width + 38));
    out.push('\n');
    for s in &report.variants {
        out.push_str(&format!(
            "{:<width$}  {:>6}  {:>10}  {:>14}\n",
            s.variant.as_str(),
            s.totals.files,
            s.totals.size.to_human(),
            s.totals.games.to_grouped(),
        ));
    }

    let files: usize = report.variants.iter().map(|s| s.totals.files).sum();
    out.push_str("---\n");
    out.push_str(&format!(
        "[pgn_index] {files} files in {} variants -> {}\n",
        report.variants.len(),
        report.index_path.display()
    ));
    out
}

fn render_json(report: &RunReport) -> String {
    match serde_json::to_string_pretty(report) {
        Ok(json) => format!("{json}\n"),
        Err(e) => {
            log::error!("failed to serialize run report: {e}");
            String::new()
        }
    }
}
