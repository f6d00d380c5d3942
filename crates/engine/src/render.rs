//! HTML table fragments and download lists.

use crate::record::FileRecord;
use pgn_index_shared_kernel::{FileSize, GameCount, Variant};
use serde::Serialize;

const CLOCK_MARK: &str = "✔";

/// Aggregate figures of one variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub files: usize,
    pub size: FileSize,
    pub games: GameCount,
}

impl Totals {
    /// Sums over `records`; an empty slice gives zero totals.
    pub fn of(records: &[FileRecord]) -> Self {
        Self {
            files: records.len(),
            size: records.iter().map(|r| r.size).sum(),
            games: records.iter().map(|r| r.games).sum(),
        }
    }
}

/// One `<tr>` per record, joined by newlines.
pub fn render_rows(records: &[FileRecord], variant: &Variant) -> String {
    let variant = escape_html(variant.as_str());
    records
        .iter()
        .map(|record| render_row(record, &variant))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_row(record: &FileRecord, variant: &str) -> String {
    let games = if record.games.is_zero() {
        "?".to_string()
    } else {
        record.games.to_grouped()
    };
    let clock = if record.has_clock { CLOCK_MARK } else { "" };

    format!(
        "<tr>
    <td>{month}</td>
    <td class=\"right\">{size}</td>
    <td class=\"right\">{games}</td>
    <td class=\"center\">{clock}</td>
    <td><a href=\"{variant}/{href}\">{text}</a></td>
    </tr>",
        month = record.date.label(),
        size = record.size.to_human(),
        href = escape_html(&record.name),
        text = escape_html(&record.short_name),
    )
}

/// Closing row with file count, size and game sums.
pub fn render_total(totals: &Totals) -> String {
    format!(
        "<tr class=\"total\">
  <td>Total: {files} files</td>
  <td class=\"right\">{size}</td>
  <td class=\"right\">{games}</td>
  <td></td>
  <td></td>
  </tr>",
        files = totals.files,
        size = totals.size.to_human(),
        games = totals.games.to_grouped(),
    )
}

/// Absolute download URLs, newest first, one per line.
pub fn render_list(records: &[FileRecord], variant: &Variant, download_root: &str) -> String {
    records
        .iter()
        .map(|r| format!("{download_root}/{variant}/{}", r.name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgn_index_shared_kernel::YearMonth;
    use std::path::PathBuf;

    fn record(name: &str, size: u64, games: u64) -> FileRecord {
        let date = crate::record::parse_month(name).unwrap();
        FileRecord {
            name: name.to_string(),
            short_name: crate::record::short_name(name).to_string(),
            path: PathBuf::from("standard").join(name),
            size: FileSize::new(size),
            date,
            has_clock: date >= YearMonth::CLOCK_DATA_SINCE,
            games: GameCount::new(games),
        }
    }

    fn standard() -> Variant {
        Variant::new("standard").unwrap()
    }

    #[test]
    fn row_shows_month_size_games_clock_and_link() {
        let rows = render_rows(
            &[record("lichess_db_standard_rated_2017-04.pgn.bz2", 1_234_567, 1_500_000)],
            &standard(),
        );
        assert_eq!(
            rows,
            "<tr>
    <td>April 2017</td>
    <td class=\"right\">1.23 MB</td>
    <td class=\"right\">1,500,000</td>
    <td class=\"center\">✔</td>
    <td><a href=\"standard/lichess_db_standard_rated_2017-04.pgn.bz2\">2017-04.pgn.bz2</a></td>
    </tr>"
        );
    }

    #[test]
    fn unknown_games_and_no_clock() {
        let rows = render_rows(&[record("standard-2017-03.pgn.bz2", 10, 0)], &standard());
        assert!(rows.contains("<td>March 2017</td>"));
        assert!(rows.contains("<td class=\"right\">?</td>"));
        assert!(rows.contains("<td class=\"center\"></td>"));
    }

    #[test]
    fn rows_are_newline_separated() {
        let records = [
            record("standard-2017-04.pgn.bz2", 1, 1),
            record("standard-2017-03.pgn.bz2", 1, 1),
        ];
        let rows = render_rows(&records, &standard());
        assert_eq!(rows.matches("<tr>").count(), 2);
        assert!(rows.contains("</tr>\n<tr>"));
        assert!(!rows.ends_with('\n'));
    }

    #[test]
    fn totals_sum_records() {
        let records = [
            record("standard-2017-04.pgn.bz2", 600, 100),
            record("standard-2017-03.pgn.bz2", 400, 0),
        ];
        let totals = Totals::of(&records);
        assert_eq!(totals.files, 2);
        assert_eq!(totals.size, FileSize::new(1000));
        assert_eq!(totals.games, GameCount::new(100));

        let row = render_total(&totals);
        assert!(row.contains("<td>Total: 2 files</td>"));
        assert!(row.contains("<td class=\"right\">1 kB</td>"));
        assert!(row.contains("<td class=\"right\">100</td>"));
        assert_eq!(row.matches("<td></td>").count(), 2);
    }

    #[test]
    fn empty_totals_are_zero() {
        let totals = Totals::of(&[]);
        assert_eq!(totals, Totals::default());
        let row = render_total(&totals);
        assert!(row.contains("Total: 0 files"));
        assert!(row.contains("<td class=\"right\">0 B</td>"));
        assert!(row.contains("<td class=\"right\">0</td>"));
        assert_eq!(render_rows(&[], &standard()), "");
    }

    #[test]
    fn list_keeps_order() {
        let records = [
            record("standard-2017-04.pgn.bz2", 1, 1),
            record("standard-2017-03.pgn.bz2", 1, 1),
        ];
        assert_eq!(
            render_list(&records, &standard(), "https://database.lichess.org"),
            "https://database.lichess.org/standard/standard-2017-04.pgn.bz2\n\
             https://database.lichess.org/standard/standard-2017-03.pgn.bz2"
        );
        assert_eq!(render_list(&[], &standard(), "https://x"), "");
    }

    #[test]
    fn markup_in_names_is_escaped() {
        let rows = render_rows(&[record("a&b<c>-2017-04.pgn.bz2", 1, 1)], &standard());
        assert!(rows.contains("href=\"standard/a&amp;b&lt;c&gt;-2017-04.pgn.bz2\""));
    }
}
