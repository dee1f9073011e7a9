//! Low-level tabular PDF construction.
//!
//! Builds single-table documents: a bold title, optional subtitle
//! lines, then a gridded table with a shaded header row, paginated
//! onto US-letter pages. The output contains no timestamps, document
//! IDs, or other per-run metadata, so identical input produces
//! byte-identical files.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 72.0;

const TITLE_SIZE: f32 = 16.0;
const HEADER_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;

const LINE_HEIGHT: f32 = 16.0;
const TITLE_GAP: f32 = 30.0;
const TABLE_GAP: f32 = 20.0;
const HEADER_ROW_HEIGHT: f32 = 24.0;
const ROW_HEIGHT: f32 = 20.0;
const CELL_PAD: f32 = 4.0;

const FONT_REGULAR: Name = Name(b"F1");
const FONT_BOLD: Name = Name(b"F2");

/// A single-table document: title, subtitle lines, header row, data rows.
#[derive(Debug, Clone)]
pub struct TableDocument {
    title: String,
    lines: Vec<String>,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableDocument {
    pub fn new(title: impl Into<String>, header: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            header,
            rows: Vec::new(),
        }
    }

    /// Add a subtitle line under the title (e.g. the report period).
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// Append a data row. Cell count should match the header.
    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Render the document to PDF bytes.
    pub fn render(&self) -> Vec<u8> {
        let mut pdf = Pdf::new();
        let mut alloc = Ref::new(1);
        let catalog_id = alloc.bump();
        let page_tree_id = alloc.bump();
        let regular_id = alloc.bump();
        let bold_id = alloc.bump();

        let pages = self.paginate();
        let page_ids: Vec<Ref> = pages.iter().map(|_| alloc.bump()).collect();
        let content_ids: Vec<Ref> = pages.iter().map(|_| alloc.bump()).collect();

        pdf.catalog(catalog_id).pages(page_tree_id);

        let mut tree = pdf.pages(page_tree_id);
        tree.kids(page_ids.iter().copied());
        tree.count(page_ids.len() as i32);
        tree.finish();

        for (idx, page_rows) in pages.iter().enumerate() {
            let mut page = pdf.page(page_ids[idx]);
            page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
            page.parent(page_tree_id);
            page.contents(content_ids[idx]);
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(FONT_REGULAR, regular_id);
            fonts.pair(FONT_BOLD, bold_id);
            fonts.finish();
            resources.finish();
            page.finish();

            let content = self.page_content(idx == 0, page_rows);
            pdf.stream(content_ids[idx], &content.finish());
        }

        pdf.type1_font(regular_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));

        pdf.finish()
    }

    /// Vertical position of the table's top edge on a page.
    fn table_top(&self, first_page: bool) -> f32 {
        let mut y = PAGE_HEIGHT - MARGIN;
        if first_page {
            y -= TITLE_SIZE + TITLE_GAP;
            y -= self.lines.len() as f32 * LINE_HEIGHT;
            y -= TABLE_GAP;
        }
        y
    }

    /// Split rows into page-sized chunks. An empty row set still
    /// produces one page carrying the header row alone.
    fn paginate(&self) -> Vec<&[Vec<String>]> {
        let capacity = |first: bool| -> usize {
            let available = self.table_top(first) - HEADER_ROW_HEIGHT - MARGIN;
            (available / ROW_HEIGHT).floor().max(1.0) as usize
        };

        let mut pages = Vec::new();
        let mut rest = self.rows.as_slice();
        let mut first = true;
        loop {
            let take = capacity(first).min(rest.len());
            let (page, remainder) = rest.split_at(take);
            pages.push(page);
            rest = remainder;
            first = false;
            if rest.is_empty() {
                break;
            }
        }
        pages
    }

    fn page_content(&self, first_page: bool, rows: &[Vec<String>]) -> Content {
        let mut content = Content::new();
        let mut y = PAGE_HEIGHT - MARGIN;

        if first_page {
            y -= TITLE_SIZE;
            show_text(&mut content, FONT_BOLD, TITLE_SIZE, MARGIN, y, &self.title);
            y -= TITLE_GAP;
            for line in &self.lines {
                show_text(&mut content, FONT_REGULAR, BODY_SIZE, MARGIN, y, line);
                y -= LINE_HEIGHT;
            }
            y -= TABLE_GAP;
        }

        let table_top = y;
        let columns = self.header.len().max(1);
        let table_width = PAGE_WIDTH - 2.0 * MARGIN;
        let col_width = table_width / columns as f32;

        // Shaded header row
        content.set_fill_gray(0.85);
        content.rect(
            MARGIN,
            table_top - HEADER_ROW_HEIGHT,
            table_width,
            HEADER_ROW_HEIGHT,
        );
        content.fill_nonzero();
        content.set_fill_gray(0.0);

        for (col, text) in self.header.iter().enumerate() {
            show_text(
                &mut content,
                FONT_BOLD,
                HEADER_SIZE,
                MARGIN + col as f32 * col_width + CELL_PAD,
                table_top - HEADER_ROW_HEIGHT + 7.0,
                text,
            );
        }

        let mut row_top = table_top - HEADER_ROW_HEIGHT;
        for row in rows {
            for (col, cell) in row.iter().enumerate() {
                show_text(
                    &mut content,
                    FONT_REGULAR,
                    BODY_SIZE,
                    MARGIN + col as f32 * col_width + CELL_PAD,
                    row_top - ROW_HEIGHT + 6.0,
                    cell,
                );
            }
            row_top -= ROW_HEIGHT;
        }
        let table_bottom = row_top;

        // Grid
        content.set_line_width(1.0);
        let mut line_y = table_top;
        content.move_to(MARGIN, line_y);
        content.line_to(MARGIN + table_width, line_y);
        line_y -= HEADER_ROW_HEIGHT;
        content.move_to(MARGIN, line_y);
        content.line_to(MARGIN + table_width, line_y);
        for _ in rows {
            line_y -= ROW_HEIGHT;
            content.move_to(MARGIN, line_y);
            content.line_to(MARGIN + table_width, line_y);
        }
        for col in 0..=columns {
            let x = MARGIN + col as f32 * col_width;
            content.move_to(x, table_top);
            content.line_to(x, table_bottom);
        }
        content.stroke();

        content
    }
}

/// Draw one run of text at an absolute position.
fn show_text(content: &mut Content, font: Name, size: f32, x: f32, y: f32, text: &str) {
    content.begin_text();
    content.set_font(font, size);
    content.next_line(x, y);
    content.show(Str(&latin1(text)));
    content.end_text();
}

/// Helvetica here is unembedded, so only Latin-1 text renders; anything
/// outside that range becomes '?'.
fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(rows: usize) -> TableDocument {
        let mut doc = TableDocument::new(
            "Work Records Report",
            vec!["Employee".into(), "Date".into(), "Hours".into()],
        )
        .line("Period: 2024-01-01 to 2024-01-31");
        for i in 0..rows {
            doc.push_row(vec![
                format!("Employee {}", i),
                "2024-01-15".into(),
                "8.00".into(),
            ]);
        }
        doc
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = sample(5);
        assert_eq!(doc.render(), doc.render());
    }

    #[test]
    fn test_render_starts_with_pdf_magic() {
        let bytes = sample(3).render();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_empty_rows_render_header_only() {
        let bytes = sample(0).render();
        // Content streams are uncompressed, so drawn text is visible
        assert!(contains(&bytes, b"Work Records Report"));
        assert!(contains(&bytes, b"Employee"));
        assert!(!contains(&bytes, b"Employee 0"));
    }

    #[test]
    fn test_rows_spanning_multiple_pages_all_render() {
        let bytes = sample(100).render();
        assert!(contains(&bytes, b"Employee 0"));
        assert!(contains(&bytes, b"Employee 99"));
    }

    #[test]
    fn test_pagination_keeps_every_row() {
        let doc = sample(100);
        let pages = doc.paginate();
        assert!(pages.len() > 1);
        let total: usize = pages.iter().map(|p| p.len()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_latin1_replaces_unmapped_chars() {
        assert_eq!(latin1("Ana"), b"Ana".to_vec());
        assert_eq!(latin1("日本"), b"??".to_vec());
    }
}
