use rust_xlsxwriter::{Format, Workbook};
use std::collections::HashSet;

use super::{Cell, Report};
use crate::CoreError;

const SHEET_NAME_MAX_LEN: usize = 31;

/// Build an `.xlsx` workbook with one worksheet per table. Rows are never
/// capped.
pub fn render(report: &Report) -> Result<Vec<u8>, CoreError> {
    if report.tables.is_empty() {
        return Err(CoreError::EmptyReport);
    }

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let mut used_names = HashSet::new();

    for table in &report.tables {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_name(&table.title, &mut used_names))?;

        for (col, title) in table.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, title, &header)?;
        }
        for (row_idx, row) in table.rows.iter().enumerate() {
            let row_num = (row_idx + 1) as u32;
            for (col, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Text(text) => {
                        worksheet.write_string(row_num, col as u16, text)?;
                    }
                    Cell::Number(n) => {
                        worksheet.write_number(row_num, col as u16, *n)?;
                    }
                }
            }
        }
        worksheet.autofit();
    }

    tracing::debug!(
        title = %report.title,
        sheets = report.tables.len(),
        "rendered workbook"
    );
    Ok(workbook.save_to_buffer()?)
}

/// Excel sheet names are at most 31 characters, may not contain
/// `[]:*?/\`, and must be unique within a workbook ignoring case.
pub fn sheet_name(title: &str, used: &mut HashSet<String>) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| if "[]:*?/\\".contains(c) { ' ' } else { c })
        .collect();
    let cleaned = cleaned.trim().trim_matches('\'');
    let base: String = if cleaned.is_empty() {
        "Sheet".to_string()
    } else {
        cleaned.chars().take(SHEET_NAME_MAX_LEN).collect()
    };

    let mut candidate = base.clone();
    let mut n = 2;
    while used.contains(&candidate.to_lowercase()) {
        let suffix = format!(" ({n})");
        let keep = SHEET_NAME_MAX_LEN - suffix.chars().count();
        candidate = format!(
            "{}{suffix}",
            base.chars().take(keep).collect::<String>().trim_end()
        );
        n += 1;
    }
    used.insert(candidate.to_lowercase());
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{ReportTable, orders_report};
    use jiff::civil::date;
    use test_helpers::mock;

    #[test]
    fn sheet_names_are_sanitized_and_unique() {
        let mut used = HashSet::new();
        assert_eq!(sheet_name("Orders / Today", &mut used), "Orders   Today");
        assert_eq!(sheet_name("orders   today", &mut used), "orders   today (2)");
        assert_eq!(sheet_name("", &mut used), "Sheet");
        let long = sheet_name(&"x".repeat(40), &mut used);
        assert_eq!(long.chars().count(), 31);
    }

    #[test]
    fn workbook_is_a_zip_container() {
        let bytes = render(&orders_report(&mock::orders(), date(2026, 3, 9)))
            .unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn every_row_is_written() {
        let rows: Vec<_> = (0..500).map(|n| vec![Cell::Number(n as f64)]).collect();
        let report = Report {
            title: "Big".into(),
            subject: None,
            generated_on: date(2026, 3, 9),
            tables: vec![ReportTable {
                title: "Numbers".into(),
                headers: vec!["n".into()],
                rows,
            }],
        };
        assert!(render(&report).is_ok());
    }

    #[test]
    fn empty_report_is_refused() {
        let report = Report {
            title: "Nothing".into(),
            subject: None,
            generated_on: date(2026, 3, 9),
            tables: vec![],
        };
        assert!(matches!(render(&report), Err(CoreError::EmptyReport)));
    }
}
