//! Paginated PDF tables.
//!
//! Layout and serialization are separate: [`layout`] decides what text
//! goes where on which page, [`render`] writes it with pdf-writer using
//! the standard Helvetica fonts.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use super::Report;
use crate::CoreError;

/// Rows rendered per table before the rest is summarized.
pub const DEFAULT_ROW_CAP: usize = 25;

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 40.0;
const TITLE_SIZE: f32 = 16.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 8.0;
const LINE_HEIGHT: f32 = 14.0;
/// Rough Helvetica advance width relative to font size.
const AVG_CHAR_WIDTH: f32 = 0.5;

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

/// A run of text placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub bold: bool,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub runs: Vec<TextRun>,
    /// Horizontal rules under table headers, as `(x1, x2, y)`.
    pub rules: Vec<(f32, f32, f32)>,
}

struct Cursor {
    pages: Vec<PageLayout>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![PageLayout::default()],
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    /// Move down one line, starting a new page when out of room.
    fn advance(&mut self, height: f32) {
        self.y -= height;
        if self.y < MARGIN {
            self.pages.push(PageLayout::default());
            self.y = PAGE_HEIGHT - MARGIN - height;
        }
    }

    fn text(&mut self, x: f32, size: f32, bold: bool, text: String) {
        let y = self.y;
        if let Some(page) = self.pages.last_mut() {
            page.runs.push(TextRun {
                x,
                y,
                size,
                bold,
                text,
            });
        }
    }

    fn rule(&mut self, y: f32) {
        if let Some(page) = self.pages.last_mut() {
            page.rules.push((MARGIN, PAGE_WIDTH - MARGIN, y));
        }
    }
}

/// Fit `text` into roughly `width` points of Helvetica at `size`, keeping
/// to printable ASCII since the standard fonts carry nothing else.
fn fit(text: &str, width: f32, size: f32) -> String {
    let max_chars = ((width / (size * AVG_CHAR_WIDTH)) as usize).max(2);
    let ascii: String = text
        .chars()
        .map(|c| if c.is_ascii_graphic() || c == ' ' { c } else { '?' })
        .collect();
    if ascii.chars().count() <= max_chars {
        return ascii;
    }
    let mut truncated: String = ascii.chars().take(max_chars - 2).collect();
    truncated.push_str("..");
    truncated
}

/// Lay out every table of `report`, each capped at `row_cap` rows.
pub fn layout(report: &Report, row_cap: usize) -> Vec<PageLayout> {
    let mut cursor = Cursor::new();
    let usable = PAGE_WIDTH - 2.0 * MARGIN;

    cursor.advance(TITLE_SIZE);
    let title = match &report.subject {
        Some(subject) => format!("{} - {}", report.title, subject),
        None => report.title.clone(),
    };
    cursor.text(MARGIN, TITLE_SIZE, true, fit(&title, usable, TITLE_SIZE));
    cursor.advance(LINE_HEIGHT);
    cursor.text(
        MARGIN,
        BODY_SIZE,
        false,
        format!("Generated on {}", report.generated_on),
    );

    for table in &report.tables {
        cursor.advance(LINE_HEIGHT * 2.0);
        cursor.text(
            MARGIN,
            HEADING_SIZE,
            true,
            fit(&table.title, usable, HEADING_SIZE),
        );

        let columns = table.headers.len().max(1);
        let column_width = usable / columns as f32;
        let header_row = |cursor: &mut Cursor| {
            cursor.advance(LINE_HEIGHT);
            for (i, header) in table.headers.iter().enumerate() {
                let x = MARGIN + i as f32 * column_width;
                cursor.text(x, BODY_SIZE, true, fit(header, column_width, BODY_SIZE));
            }
            let y = cursor.y - 3.0;
            cursor.rule(y);
        };
        header_row(&mut cursor);

        for row in table.rows.iter().take(row_cap) {
            let pages_before = cursor.pages.len();
            cursor.advance(LINE_HEIGHT);
            if cursor.pages.len() != pages_before {
                // Repeat the header on continuation pages.
                cursor.y += LINE_HEIGHT;
                header_row(&mut cursor);
                cursor.advance(LINE_HEIGHT);
            }
            for (i, cell) in row.iter().enumerate() {
                let x = MARGIN + i as f32 * column_width;
                cursor.text(
                    x,
                    BODY_SIZE,
                    false,
                    fit(&cell.to_string(), column_width, BODY_SIZE),
                );
            }
        }

        if table.rows.is_empty() {
            cursor.advance(LINE_HEIGHT);
            cursor.text(MARGIN, BODY_SIZE, false, "No records".to_string());
        } else if table.rows.len() > row_cap {
            cursor.advance(LINE_HEIGHT);
            cursor.text(
                MARGIN,
                BODY_SIZE,
                false,
                format!(
                    "Showing first {} of {} rows. Export to Excel for the full list.",
                    row_cap,
                    table.rows.len()
                ),
            );
        }
    }

    cursor.pages
}

/// Render `report` as a PDF document.
pub fn render(report: &Report, row_cap: usize) -> Result<Vec<u8>, CoreError> {
    if report.tables.is_empty() {
        return Err(CoreError::EmptyReport);
    }
    let pages = layout(report, row_cap);

    let catalog_id = Ref::new(1);
    let tree_id = Ref::new(2);
    let regular_id = Ref::new(3);
    let bold_id = Ref::new(4);
    let page_ids: Vec<Ref> =
        (0..pages.len()).map(|i| Ref::new(5 + 2 * i as i32)).collect();
    let content_ids: Vec<Ref> =
        (0..pages.len()).map(|i| Ref::new(6 + 2 * i as i32)).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().copied())
        .count(pages.len() as i32);

    for (i, page_layout) in pages.iter().enumerate() {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page.parent(tree_id);
        page.contents(content_ids[i]);
        page.resources()
            .fonts()
            .pair(REGULAR, regular_id)
            .pair(BOLD, bold_id);
        page.finish();

        let mut content = Content::new();
        for &(x1, x2, y) in &page_layout.rules {
            content.set_line_width(0.5);
            content.move_to(x1, y);
            content.line_to(x2, y);
            content.stroke();
        }
        for run in &page_layout.runs {
            content.begin_text();
            content.set_font(if run.bold { BOLD } else { REGULAR }, run.size);
            content.next_line(run.x, run.y);
            content.show(Str(run.text.as_bytes()));
            content.end_text();
        }
        pdf.stream(content_ids[i], &content.finish());
    }

    pdf.type1_font(regular_id).base_font(Name(b"Helvetica"));
    pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));

    tracing::debug!(title = %report.title, pages = pages.len(), "rendered pdf");
    Ok(pdf.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{Cell, ReportTable};
    use jiff::civil::date;

    fn report_with_rows(rows: usize) -> Report {
        Report {
            title: "Orders Report".into(),
            subject: None,
            generated_on: date(2026, 3, 9),
            tables: vec![ReportTable {
                title: "Orders".into(),
                headers: vec!["Reference".into(), "Amount".into()],
                rows: (0..rows)
                    .map(|n| {
                        vec![Cell::Text(format!("ORD-{n:05}")), Cell::Number(n as f64)]
                    })
                    .collect(),
            }],
        }
    }

    fn all_text(pages: &[PageLayout]) -> Vec<String> {
        pages
            .iter()
            .flat_map(|p| p.runs.iter().map(|r| r.text.clone()))
            .collect()
    }

    #[test]
    fn rows_beyond_the_cap_are_summarized() {
        let pages = layout(&report_with_rows(40), DEFAULT_ROW_CAP);
        let text = all_text(&pages);
        assert!(text.contains(&"ORD-00024".to_string()));
        assert!(!text.contains(&"ORD-00025".to_string()));
        assert!(text.iter().any(|t| t.starts_with("Showing first 25 of 40 rows")));
    }

    #[test]
    fn short_tables_are_not_annotated() {
        let text = all_text(&layout(&report_with_rows(3), DEFAULT_ROW_CAP));
        assert!(!text.iter().any(|t| t.starts_with("Showing first")));
    }

    #[test]
    fn long_tables_continue_on_new_pages_with_headers() {
        let pages = layout(&report_with_rows(120), 120);
        assert!(pages.len() > 1);
        for page in &pages[1..] {
            assert!(page.runs.iter().any(|r| r.bold && r.text == "Reference"));
        }
        for page in &pages {
            assert!(page.runs.iter().all(|r| r.y >= MARGIN - LINE_HEIGHT));
        }
    }

    #[test]
    fn empty_table_says_so() {
        let text = all_text(&layout(&report_with_rows(0), DEFAULT_ROW_CAP));
        assert!(text.contains(&"No records".to_string()));
    }

    #[test]
    fn text_is_truncated_to_column_width() {
        let fitted = fit(&"x".repeat(200), 100.0, BODY_SIZE);
        assert!(fitted.ends_with(".."));
        assert_eq!(fitted.chars().count(), 25);
        assert_eq!(fit("Café", 100.0, BODY_SIZE), "Caf?");
    }

    #[test]
    fn rendered_document_is_a_pdf() {
        let bytes = render(&report_with_rows(60), DEFAULT_ROW_CAP).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(
            bytes.windows(b"ORD-00000".len()).any(|w| w == b"ORD-00000")
        );
    }
}
