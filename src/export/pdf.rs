use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One block of a PDF document. Each section starts on a fresh page.
#[derive(Debug, Clone, Default)]
pub struct Section {
    pub title: String,
    /// Lines printed under the title on the first page of the section.
    pub preamble: Vec<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Lines printed after the table.
    pub footer: Vec<String>,
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    line_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id).base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            // A4
            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 18.0,
            line_h: 14.0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F1"), self.font_id);
        fonts.pair(Name(b"F2"), self.bold_font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, bold: bool, text: &str) {
        let font = if bold { Name(b"F2") } else { Name(b"F1") };
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&to_latin1(text)));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_row(&self, content: &mut Content, y: f32, width: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray + 0.03);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
        bold: bool,
    ) {
        let mut x = self.margin;

        for (i, w) in col_widths.iter().enumerate() {
            let text = row.get(i).map(String::as_str).unwrap_or("");
            let clipped = clip_to_width(text, *w - 8.0, font_size);
            self.draw_text(content, x + 4.0, y + 5.0, font_size, bold, &clipped);
            self.draw_cell_borders(content, x, y, *w, self.row_h);
            x += w;
        }
    }

    /// Column widths from header + content, scaled down to the printable width.
    fn compute_col_widths(&self, headers: &[String], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5 + 8.0).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = (cell.len() as f32 * 5.2 + 8.0).max(widths[i]);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            true,
            title,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            false,
            &pg,
        );
    }

    /// Write a section over as many pages as its table needs.
    pub fn write_section(&mut self, section: &Section) {
        let col_widths = self.compute_col_widths(&section.headers, &section.rows);
        let table_w: f32 = col_widths.iter().sum();

        let mut remaining: &[Vec<String>] = &section.rows;
        let mut page_idx = 1;
        let mut first = true;

        loop {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, &section.title, page_idx);

            let mut y = self.page_h - self.margin - 20.0;

            if first {
                for line in &section.preamble {
                    self.draw_text(&mut content, self.margin, y, self.font_size + 1.0, false, line);
                    y -= self.line_h;
                }
                y -= self.line_h / 2.0;
                first = false;
            }

            if !section.headers.is_empty() {
                y -= self.row_h;
                self.fill_row(&mut content, y, table_w, 0.85);
                self.draw_row(
                    &mut content,
                    y,
                    &col_widths,
                    &section.headers,
                    self.header_font_size,
                    true,
                );
            }

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y - self.row_h < self.margin {
                    break;
                }
                y -= self.row_h;

                if i % 2 == 0 {
                    self.fill_row(&mut content, y, table_w, 0.96);
                }

                self.draw_row(&mut content, y, &col_widths, row, self.font_size, false);
                consumed += 1;
            }
            remaining = &remaining[consumed..];

            if remaining.is_empty() {
                let needed = self.line_h * (section.footer.len() as f32 + 1.0);
                if y - needed < self.margin && !section.footer.is_empty() {
                    self.finalize_page(content);
                    page_idx += 1;
                    content = self.new_page();
                    self.draw_page_header_footer(&mut content, &section.title, page_idx);
                    y = self.page_h - self.margin - 20.0;
                }

                y -= self.line_h;
                for line in &section.footer {
                    y -= self.line_h;
                    self.draw_text(&mut content, self.margin, y, self.header_font_size, true, line);
                }

                self.finalize_page(content);
                break;
            }

            self.finalize_page(content);
            page_idx += 1;
        }
    }

    /// Plain table with a title, one section.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        self.write_section(&Section {
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows.to_vec(),
            ..Section::default()
        });
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// The standard Type1 fonts use a single-byte encoding; anything outside Latin-1 becomes '?'.
fn to_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u32 as u8 } else { b'?' })
        .collect()
}

/// Rough Helvetica width estimate; long cells are cut with "..".
fn clip_to_width(text: &str, width: f32, font_size: f32) -> String {
    let max_chars = ((width / (font_size * 0.5)).floor() as usize).max(1);
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut s: String = text.chars().take(max_chars.saturating_sub(2)).collect();
    s.push_str("..");
    s
}
