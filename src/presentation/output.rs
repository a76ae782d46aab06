//! Output Rendering
//!
//! Renders a script summary and catalog report as text or JSON.

use unicode_width::UnicodeWidthStr;

use crate::application::{CatalogReport, ReaderSummary, ScriptSummary, WorkSummary};
use crate::config::OutputFormat;

/// Icons for output rendering
struct Icons {
    check: &'static str,
    warn: &'static str,
    bullet: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            warn: "⚠",
            bullet: "•",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            warn: "[!]",
            bullet: "-",
        }
    }
}

/// Trait for rendering catalog reports
pub trait ReportRenderer {
    /// Render the report, preceded by what applying the script did
    fn render(&self, summary: &ScriptSummary, report: &CatalogReport) -> String;
}

/// Text renderer for catalog reports
pub struct TextRenderer {
    /// Whether to use unicode icons
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { unicode: true }
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, summary: &ScriptSummary, report: &CatalogReport) -> String {
        let icons = if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        };
        let mut out = String::new();

        let status = if summary.is_clean() { icons.check } else { icons.warn };
        out.push_str(&format!(
            "{} Script applied: {} works, {} readers, {} readings\n",
            status, summary.works_created, summary.readers_registered, summary.readings_linked
        ));
        if summary.ratings_rejected > 0 {
            out.push_str(&format!(
                "  {} ratings outside 0-4 were not added to works\n",
                summary.ratings_rejected
            ));
        }
        for warning in &summary.warnings {
            out.push_str(&format!("  {} {}\n", icons.warn, warning));
        }

        out.push_str(&format!("\nCatalog ({} works)\n", report.works.len()));
        let rows: Vec<(String, String)> = report
            .works
            .iter()
            .map(|w| {
                (
                    w.description.clone(),
                    format!("reads {:>3}   avg {:.2}", w.reads, w.average_rating),
                )
            })
            .collect();
        push_table(&mut out, icons.bullet, &rows);

        out.push_str(&format!("\nReaders ({})\n", report.readers.len()));
        let rows: Vec<(String, String)> = report
            .readers
            .iter()
            .map(|r| {
                (
                    format!("{} <{}>", r.name, r.contact),
                    format!("works {:>3}   avg {:.2}", r.works_read, r.average_rating),
                )
            })
            .collect();
        push_table(&mut out, icons.bullet, &rows);

        out.push_str("\nRankings\n");
        let rows = vec![
            ("Most read".to_string(), optional(report.most_read.as_ref().map(work_line))),
            (
                format!("Top {} most read", report.top),
                listed(report.n_most_read.iter().map(work_line)),
            ),
            (
                "Highest rated".to_string(),
                optional(report.highest_rated.as_ref().map(|w| {
                    format!("{} ({:.2})", w.description, w.average_rating)
                })),
            ),
            (
                "Most positive reader".to_string(),
                optional(report.most_positive_reader.as_ref().map(|r| {
                    format!("{} ({:.2})", reader_line(r), r.average_rating)
                })),
            ),
            (
                format!("Top {} most prolific", report.top),
                listed(
                    report
                        .n_most_prolific
                        .iter()
                        .map(|r| format!("{} ({} works)", reader_line(r), r.works_read)),
                ),
            ),
        ];
        push_table(&mut out, icons.bullet, &rows);

        out
    }
}

fn work_line(work: &WorkSummary) -> String {
    format!("{} ({} reads)", work.description, work.reads)
}

fn reader_line(reader: &ReaderSummary) -> String {
    format!("{} <{}>", reader.name, reader.contact)
}

fn optional(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

fn listed(items: impl Iterator<Item = String>) -> String {
    let items: Vec<String> = items
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect();
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Two-column rows, left column padded to its widest cell
fn push_table(out: &mut String, bullet: &str, rows: &[(String, String)]) {
    if rows.is_empty() {
        out.push_str("  (none)\n");
        return;
    }
    let width = rows
        .iter()
        .map(|(left, _)| UnicodeWidthStr::width(left.as_str()))
        .max()
        .unwrap_or(0);
    for (left, right) in rows {
        let pad = width - UnicodeWidthStr::width(left.as_str());
        out.push_str(&format!(
            "  {} {}{}   {}\n",
            bullet,
            left,
            " ".repeat(pad),
            right
        ));
    }
}

/// JSON renderer for catalog reports
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, summary: &ScriptSummary, report: &CatalogReport) -> String {
        let json = serde_json::json!({
            "summary": summary,
            "report": report,
        });
        serde_json::to_string_pretty(&json).unwrap_or_default()
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, unicode: bool) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
