//! Turning already fetched data into downloadable reports.
//!
//! Spreadsheets carry every row. PDF tables are capped (see
//! [`pdf::DEFAULT_ROW_CAP`]) because every extra row costs page layout,
//! while a spreadsheet scrolls natively.

pub mod excel;
pub mod pdf;
mod tables;

pub use tables::{Tabular, dashboard_report, hospital_report, orders_report};

use jiff::civil::Date;
use std::fmt;

pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const PDF_MIME: &str = "application/pdf";

/// One table cell. Numbers stay numeric in spreadsheets.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Number(n) if n.fract() == 0.0 => write!(f, "{n:.0}"),
            Cell::Number(n) => write!(f, "{n:.2}"),
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<u64> for Cell {
    fn from(n: u64) -> Self {
        Cell::Number(n as f64)
    }
}

/// One sheet of a workbook, one section of a PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ReportTable {
    pub fn from_items<T: Tabular>(title: &str, items: &[T]) -> Self {
        Self {
            title: title.to_string(),
            headers: T::HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: items.iter().map(T::cells).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    /// Entity the report is about, if it is about a single one.
    pub subject: Option<String>,
    pub generated_on: Date,
    pub tables: Vec<ReportTable>,
}

/// `{kind}[-{subject}]-{date}.{ext}`, with the subject slugified.
pub fn report_filename(
    kind: &str,
    subject: Option<&str>,
    date: Date,
    ext: &str,
) -> String {
    match subject.map(slugify).filter(|s| !s.is_empty()) {
        Some(slug) => format!("{kind}-{slug}-{date}.{ext}"),
        None => format!("{kind}-{date}.{ext}"),
    }
}

fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn filename_embeds_iso_date() {
        let name = report_filename("orders-report", None, date(2026, 3, 9), "xlsx");
        assert_eq!(name, "orders-report-2026-03-09.xlsx");
    }

    #[test]
    fn filename_slugifies_subject() {
        let name = report_filename(
            "hospital-report",
            Some("St. Mary's  General"),
            date(2026, 3, 9),
            "pdf",
        );
        assert_eq!(name, "hospital-report-st-mary-s-general-2026-03-09.pdf");
    }

    #[test]
    fn blank_subject_is_omitted() {
        let name = report_filename("report", Some("!!"), date(2026, 1, 1), "pdf");
        assert_eq!(name, "report-2026-01-01.pdf");
    }

    #[test]
    fn whole_numbers_render_without_decimals() {
        assert_eq!(Cell::Number(12.0).to_string(), "12");
        assert_eq!(Cell::Number(450.5).to_string(), "450.50");
    }
}
