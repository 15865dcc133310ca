//! PDF species report renderer

use std::sync::Arc;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use tracing::debug;

use crate::config::ReportConfig;
use crate::domain::report::{
    LayoutLine, LineStyle, PageLayout, ReportDocument, ReportRenderer, ReportSection,
};
use crate::domain::{DomainError, SpeciesCatalog};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_LEFT_MM: f32 = 14.0;
const MARGIN_RIGHT_MM: f32 = 14.0;
const FIRST_BASELINE_MM: f32 = 282.0;
const MARGIN_BOTTOM_MM: f32 = 15.0;
const PT_PER_MM: f32 = 72.0 / 25.4;

/// Advance widths in 1/1000 em for ASCII `' '..='~'`, the larger of
/// Helvetica and Helvetica-Bold for each glyph
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 1015, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

/// Width assumed for Latin-1 glyphs outside ASCII
const WIDEST_GLYPH_EM: f32 = 1.0;

/// Renders catalog records as A4 PDF documents held in memory
#[derive(Debug, Clone)]
pub struct PdfReportRenderer {
    catalog: Arc<SpeciesCatalog>,
    font_size: f32,
    line_height_mm: f32,
}

impl PdfReportRenderer {
    pub fn new(catalog: Arc<SpeciesCatalog>, config: &ReportConfig) -> Self {
        Self {
            catalog,
            font_size: config.font_size,
            line_height_mm: config.line_height_mm,
        }
    }

    /// Page capacity for the configured leading; line width in points
    pub fn page_layout(&self) -> PageLayout {
        let usable_width_pt = (PAGE_WIDTH_MM - MARGIN_LEFT_MM - MARGIN_RIGHT_MM) * PT_PER_MM;
        let lines_per_page =
            ((FIRST_BASELINE_MM - MARGIN_BOTTOM_MM) / self.line_height_mm) as usize + 1;

        PageLayout::new(usable_width_pt, lines_per_page)
    }

    /// Transliterate and wrap a document by the drawn glyph widths
    pub fn paginate(&self, document: &ReportDocument) -> Vec<Vec<LayoutLine>> {
        self.page_layout()
            .paginate_measured(&for_builtin_fonts(document), |c, style| {
                glyph_width_em(c) * self.font_size_for(style)
            })
    }

    /// Lay out and draw an arbitrary document
    pub fn render_document(&self, document: &ReportDocument) -> Result<Vec<u8>, DomainError> {
        let pages = self.paginate(document);

        let (doc, first_page, first_layer) = PdfDocument::new(
            document.title.as_str(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Page 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| DomainError::report(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| DomainError::report(e.to_string()))?;

        for (index, lines) in pages.iter().enumerate() {
            let (page, layer) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(
                    Mm(PAGE_WIDTH_MM),
                    Mm(PAGE_HEIGHT_MM),
                    format!("Page {}", index + 1),
                )
            };
            let layer = doc.get_page(page).get_layer(layer);

            for (row, line) in lines.iter().enumerate() {
                if line.style == LineStyle::Blank {
                    continue;
                }

                let y = FIRST_BASELINE_MM - row as f32 * self.line_height_mm;
                layer.use_text(
                    line.text.as_str(),
                    self.font_size_for(line.style),
                    Mm(MARGIN_LEFT_MM),
                    Mm(y),
                    self.font_for(line, &regular, &bold),
                );
            }
        }

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| DomainError::report(e.to_string()))?;

        debug!(pages = pages.len(), bytes = bytes.len(), "Report rendered");

        Ok(bytes)
    }

    fn font_size_for(&self, style: LineStyle) -> f32 {
        match style {
            LineStyle::Title => self.font_size + 1.0,
            _ => self.font_size,
        }
    }

    fn font_for<'a>(
        &self,
        line: &LayoutLine,
        regular: &'a IndirectFontRef,
        bold: &'a IndirectFontRef,
    ) -> &'a IndirectFontRef {
        match line.style {
            LineStyle::Title | LineStyle::Heading => bold,
            LineStyle::Body | LineStyle::Blank => regular,
        }
    }
}

impl ReportRenderer for PdfReportRenderer {
    fn render(&self, key: &str) -> Result<Vec<u8>, DomainError> {
        let record = self
            .catalog
            .lookup(key)
            .ok_or_else(|| DomainError::species_not_found(key))?;

        self.render_document(&ReportDocument::from_record(record))
    }

    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn file_extension(&self) -> &'static str {
        "pdf"
    }
}

/// Advance width of a character in em, for the built-in Helvetica faces
fn glyph_width_em(c: char) -> f32 {
    match c {
        ' '..='~' => HELVETICA_WIDTHS[c as usize - ' ' as usize] as f32 / 1000.0,
        _ => WIDEST_GLYPH_EM,
    }
}

fn for_builtin_fonts(document: &ReportDocument) -> ReportDocument {
    ReportDocument {
        title: to_builtin_font_text(&document.title),
        sections: document
            .sections
            .iter()
            .map(|section| ReportSection {
                heading: to_builtin_font_text(&section.heading),
                entries: section
                    .entries
                    .iter()
                    .map(|(label, value)| {
                        (to_builtin_font_text(label), to_builtin_font_text(value))
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Replace characters the built-in PDF fonts cannot encode
pub fn to_builtin_font_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '→' => out.push_str("->"),
            '←' => out.push_str("<-"),
            '–' | '—' | '‑' => out.push('-'),
            '‘' | '’' => out.push('\''),
            '“' | '”' => out.push('"'),
            '≥' => out.push_str(">="),
            '≤' => out.push_str("<="),
            c if (c as u32) < 0x100 => out.push(c),
            _ => out.push('?'),
        }
    }

    out
}
