//! Report layout - logical lines, word wrapping and pagination

use crate::domain::species::SpeciesRecord;

/// Prefix of the report title line
pub const REPORT_TITLE_PREFIX: &str = "FishTantra – ";

/// Indent applied to wrapped continuation lines
pub const CONTINUATION_INDENT: &str = "    ";

/// Visual role of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Heading,
    Body,
    Blank,
}

/// A single line of laid out text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutLine {
    pub text: String,
    pub style: LineStyle,
}

impl LayoutLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn blank() -> Self {
        Self::new(String::new(), LineStyle::Blank)
    }
}

/// Section of a report: heading plus `(label, value)` entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub heading: String,
    pub entries: Vec<(String, String)>,
}

/// Document content prior to pagination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub title: String,
    pub sections: Vec<ReportSection>,
}

impl ReportDocument {
    /// Build the species profile document
    pub fn from_record(record: &SpeciesRecord) -> Self {
        let sections = record
            .sections()
            .into_iter()
            .map(|(kind, attributes)| ReportSection {
                heading: kind.heading(),
                entries: attributes
                    .into_iter()
                    .map(|a| (a.label.to_string(), a.value.to_string()))
                    .collect(),
            })
            .collect();

        Self {
            title: format!("{}{}", REPORT_TITLE_PREFIX, record.display_name()),
            sections,
        }
    }

    /// Logical lines before wrapping: title, blank, then each section's
    /// heading and `- key: value` lines followed by a blank separator
    pub fn lines(&self) -> Vec<LayoutLine> {
        let mut lines = vec![
            LayoutLine::new(self.title.clone(), LineStyle::Title),
            LayoutLine::blank(),
        ];

        for section in &self.sections {
            lines.push(LayoutLine::new(section.heading.clone(), LineStyle::Heading));
            for (label, value) in &section.entries {
                lines.push(LayoutLine::new(
                    format!("- {}: {}", label, value),
                    LineStyle::Body,
                ));
            }
            lines.push(LayoutLine::blank());
        }

        lines
    }

    /// Plain text rendition, one logical line per row
    pub fn to_text(&self) -> String {
        self.lines()
            .into_iter()
            .map(|line| line.text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Page capacity: usable line width and lines per page.
///
/// `line_width` is in whatever unit the glyph measure passed to
/// `paginate_measured` returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub line_width: f32,
    pub lines_per_page: usize,
}

impl PageLayout {
    pub fn new(line_width: f32, lines_per_page: usize) -> Self {
        Self {
            line_width: line_width.max(1.0),
            lines_per_page: lines_per_page.max(1),
        }
    }

    /// Wrap every line to the page width and split into pages.
    ///
    /// `glyph_width` gives the advance of a character drawn in a given line
    /// style. Text is never dropped; anything past the last line of a page
    /// moves to the next one.
    pub fn paginate_measured<F>(
        &self,
        document: &ReportDocument,
        glyph_width: F,
    ) -> Vec<Vec<LayoutLine>>
    where
        F: Fn(char, LineStyle) -> f32,
    {
        let wrapped: Vec<LayoutLine> = document
            .lines()
            .into_iter()
            .flat_map(|line| {
                let style = line.style;
                wrap_text_measured(&line.text, self.line_width, CONTINUATION_INDENT, |c| {
                    glyph_width(c, style)
                })
                .into_iter()
                .map(move |text| LayoutLine::new(text, style))
                .collect::<Vec<_>>()
            })
            .collect();

        wrapped
            .chunks(self.lines_per_page)
            .map(<[LayoutLine]>::to_vec)
            .collect()
    }
}

/// Greedy word wrap by measured width. Continuation lines start with
/// `indent`; words wider than a full line are split across lines, at least
/// one character per line.
pub fn wrap_text_measured<F>(text: &str, width: f32, indent: &str, measure: F) -> Vec<String>
where
    F: Fn(char) -> f32,
{
    let measure_str = |s: &str| s.chars().map(&measure).sum::<f32>();
    let indent_width = measure_str(indent);
    let space_width = measure(' ');

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0.0f32;
    let mut empty = true;

    for word in text.split_whitespace() {
        let mut rest = word;

        while !rest.is_empty() {
            let rest_width = measure_str(rest);
            let needed = if empty {
                rest_width
            } else {
                rest_width + space_width
            };

            if used + needed <= width {
                if !empty {
                    current.push(' ');
                    used += space_width;
                }
                current.push_str(rest);
                used += rest_width;
                empty = false;
                rest = "";
            } else if !empty {
                lines.push(std::mem::replace(&mut current, indent.to_string()));
                used = indent_width;
                empty = true;
            } else {
                let mut split = 0;
                let mut taken = 0.0f32;
                for (idx, ch) in rest.char_indices() {
                    let advance = measure(ch);
                    if split > 0 && used + taken + advance > width {
                        break;
                    }
                    taken += advance;
                    split = idx + ch.len_utf8();
                }
                current.push_str(&rest[..split]);
                lines.push(std::mem::replace(&mut current, indent.to_string()));
                used = indent_width;
                rest = &rest[split..];
            }
        }
    }

    if !empty || lines.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::species::SpeciesCatalog;

    fn fixed_pitch(layout: PageLayout, document: &ReportDocument) -> Vec<Vec<LayoutLine>> {
        layout.paginate_measured(document, |_, _| 1.0)
    }

    fn wrap_text(text: &str, width: usize, indent: &str) -> Vec<String> {
        wrap_text_measured(text, width as f32, indent, |_| 1.0)
    }

    fn words(lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .flat_map(|l| l.split_whitespace().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_catla_document_lines() {
        let catalog = SpeciesCatalog::builtin();
        let document = ReportDocument::from_record(catalog.lookup("catla").unwrap());
        let text = document.to_text();

        assert!(text.starts_with("FishTantra – Catla\n\nTAXONOMY\n"));
        assert!(text.contains("- Genus: Catla"));
        assert!(text.contains("- Species: Catla catla"));
        assert!(text.contains("\nAQUACULTURE\n"));
        assert!(text.contains("\nBREEDING_HATCHERY\n"));
        assert!(text.ends_with("- Incubation Period: 15–18 hours\n"));
    }

    #[test]
    fn test_section_order_and_separators() {
        let catalog = SpeciesCatalog::builtin();
        let document = ReportDocument::from_record(catalog.lookup("singhi").unwrap());
        let lines = document.lines();

        let headings: Vec<&str> = lines
            .iter()
            .filter(|l| l.style == LineStyle::Heading)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(headings, ["TAXONOMY", "AQUACULTURE", "BREEDING_HATCHERY"]);

        for (idx, line) in lines.iter().enumerate().skip(2) {
            if line.style == LineStyle::Heading {
                assert_eq!(lines[idx - 1].style, LineStyle::Blank);
            }
        }
        assert_eq!(lines.last().unwrap().style, LineStyle::Blank);
    }

    #[test]
    fn test_display_name_in_title() {
        let catalog = SpeciesCatalog::builtin();
        let document = ReportDocument::from_record(catalog.lookup("common carp").unwrap());

        assert_eq!(document.title, "FishTantra – Common Carp");
    }

    #[test]
    fn test_wrap_short_line_untouched() {
        assert_eq!(wrap_text("- Genus: Catla", 40, "  "), vec!["- Genus: Catla"]);
    }

    #[test]
    fn test_wrap_empty_line() {
        assert_eq!(wrap_text("", 40, "  "), vec![String::new()]);
    }

    #[test]
    fn test_wrap_preserves_every_word() {
        let text = "- Culture Systems: Earthen ponds, cages, tanks, biofloc and RAS with \
                    additional notes on stocking and feeding regimes for the grow-out phase";
        let lines = wrap_text(text, 30, "    ");

        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 30));
        assert!(lines.iter().skip(1).all(|l| l.starts_with("    ")));
        assert_eq!(
            words(&lines),
            text.split_whitespace().map(str::to_string).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_wrap_splits_oversized_word() {
        let long = "x".repeat(25);
        let lines = wrap_text(&long, 10, "  ");

        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.concat().replace(' ', ""), long);
    }

    #[test]
    fn test_wrap_measured_narrow_and_wide_glyphs() {
        // Capitals twice as wide as everything else
        let measure = |c: char| if c.is_ascii_uppercase() { 2.0 } else { 1.0 };

        let lines = wrap_text_measured("WWWWW WWWWW iiiii iiiii", 12.0, "  ", measure);
        assert_eq!(lines, vec!["WWWWW", "  WWWWW", "  iiiii", "  iiiii"]);

        let lines = wrap_text_measured("iiiii iiiii", 12.0, "  ", measure);
        assert_eq!(lines, vec!["iiiii iiiii"]);
    }

    #[test]
    fn test_wrap_measured_glyph_wider_than_line() {
        let lines = wrap_text_measured("MMM", 1.0, "", |_| 5.0);
        assert_eq!(lines, vec!["M", "M", "M"]);
    }

    #[test]
    fn test_paginate_measured_uses_line_style() {
        let document = ReportDocument {
            title: "FishTantra – Wide".to_string(),
            sections: vec![ReportSection {
                heading: "HEADING".to_string(),
                entries: vec![("a".to_string(), "b c d e f".to_string())],
            }],
        };

        let layout = PageLayout::new(20.0, 100);
        let pages = layout.paginate_measured(&document, |_, style| match style {
            LineStyle::Title => 2.0,
            _ => 1.0,
        });
        let lines = &pages[0];

        // Title glyphs are twice as wide, so the 17 character title wraps
        // while the 14 character body line does not
        assert_eq!(lines[0].text, "FishTantra");
        assert_eq!(lines[0].style, LineStyle::Title);
        assert_eq!(lines[1].text, "    – Wide");
        assert_eq!(lines[1].style, LineStyle::Title);
        assert_eq!(lines[4].text, "- a: b c d e f");
        assert_eq!(lines[4].style, LineStyle::Body);
    }

    #[test]
    fn test_paginate_overflows_to_new_page() {
        let document = ReportDocument {
            title: "FishTantra – Test".to_string(),
            sections: vec![ReportSection {
                heading: "AQUACULTURE".to_string(),
                entries: (0..30)
                    .map(|i| (format!("Field {}", i), "value ".repeat(20)))
                    .collect(),
            }],
        };

        let layout = PageLayout::new(60.0, 20);
        let pages = fixed_pitch(layout, &document);

        assert!(pages.len() > 1);
        assert!(pages.iter().all(|p| p.len() <= 20));
        assert_eq!(pages[0][0].text, "FishTantra – Test");

        let body_words: usize = pages
            .iter()
            .flatten()
            .filter(|l| l.style == LineStyle::Body)
            .map(|l| l.text.matches("value").count())
            .sum();
        assert_eq!(body_words, 30 * 20);
    }

    #[test]
    fn test_single_page_for_builtin_species() {
        let catalog = SpeciesCatalog::builtin();
        let layout = PageLayout::new(85.0, 54);

        for record in catalog.iter() {
            let pages = fixed_pitch(layout, &ReportDocument::from_record(record));
            assert_eq!(pages.len(), 1, "{} spilled onto a second page", record.key);
        }
    }
}
