//! Page layout for the story document — pure computation, no PDF backend.
//!
//! Works in PDF points on A4 geometry with a bottom-left origin. Body text is
//! split on the Story field's existing newline breaks only; there is no
//! automatic word-wrap, so an overlong line overflows the page width (an
//! accepted limitation). Vertically, a new page begins when the next baseline
//! would fall below the bottom margin.

use crate::models::story::StoryResult;

/// A4 page size in PDF points.
pub const PAGE_WIDTH_PT: f32 = 595.276;
pub const PAGE_HEIGHT_PT: f32 = 841.89;

/// Left edge of the text column.
pub const MARGIN_LEFT_PT: f32 = 40.0;
/// First baseline of each page, measured from the bottom edge.
pub const FIRST_BASELINE_PT: f32 = 800.0;
/// Baselines below this bound trigger a page break.
pub const MARGIN_BOTTOM_PT: f32 = 40.0;

pub const TITLE_SIZE_PT: f32 = 14.0;
pub const BODY_SIZE_PT: f32 = 11.0;
/// Baseline advance per line, as a multiple of the font size.
const LEADING_FACTOR: f32 = 1.2;

/// Font role of a laid-out line. The render module maps roles to fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    /// Helvetica-Bold — the title line.
    TitleBold,
    /// Helvetica — story body and moral.
    Body,
}

/// One positioned line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub font: FontRole,
    pub size_pt: f32,
    pub x_pt: f32,
    pub y_pt: f32,
}

/// One page of positioned lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<TextLine>,
}

/// Lays out a story onto one or more A4 pages.
///
/// Order: title (bold 14pt), blank gap, story lines (11pt), blank gap, a
/// literal "Moral:" label, then the moral text. The moral is always part of
/// the document — genre-based visibility applies to the UI only.
pub fn layout_story(story: &StoryResult) -> Vec<Page> {
    let mut cursor = Cursor::new();

    cursor.push_line(&story.topic, FontRole::TitleBold, TITLE_SIZE_PT);
    cursor.skip_line(TITLE_SIZE_PT);

    for line in story.story.split('\n') {
        cursor.push_line(line, FontRole::Body, BODY_SIZE_PT);
    }

    cursor.skip_line(BODY_SIZE_PT);
    cursor.push_line("Moral:", FontRole::Body, BODY_SIZE_PT);
    for line in story.moral.split('\n') {
        cursor.push_line(line, FontRole::Body, BODY_SIZE_PT);
    }

    cursor.finish()
}

/// Baseline cursor walking down the page, breaking to a new one on underflow.
struct Cursor {
    pages: Vec<Page>,
    current: Page,
    y_pt: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Page::default(),
            y_pt: FIRST_BASELINE_PT,
        }
    }

    fn push_line(&mut self, text: &str, font: FontRole, size_pt: f32) {
        if self.y_pt < MARGIN_BOTTOM_PT {
            self.break_page();
        }
        self.current.lines.push(TextLine {
            text: text.to_string(),
            font,
            size_pt,
            x_pt: MARGIN_LEFT_PT,
            y_pt: self.y_pt,
        });
        self.y_pt -= size_pt * LEADING_FACTOR;
    }

    /// Advances the baseline without emitting a line (a blank gap).
    fn skip_line(&mut self, size_pt: f32) {
        self.y_pt -= size_pt * LEADING_FACTOR;
    }

    fn break_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.y_pt = FIRST_BASELINE_PT;
    }

    fn finish(mut self) -> Vec<Page> {
        self.pages.push(self.current);
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(body: &str) -> StoryResult {
        StoryResult {
            topic: "The Brave Fox".to_string(),
            story: body.to_string(),
            moral: "Courage wins.".to_string(),
        }
    }

    #[test]
    fn test_title_is_the_first_line_in_the_bold_role() {
        let pages = layout_story(&story("Once upon a time."));
        let first = &pages[0].lines[0];
        assert_eq!(first.text, "The Brave Fox");
        assert_eq!(first.font, FontRole::TitleBold);
        assert_eq!(first.size_pt, TITLE_SIZE_PT);
        assert_eq!(first.y_pt, FIRST_BASELINE_PT);
    }

    #[test]
    fn test_story_lines_follow_existing_breaks_without_wrapping() {
        let long_line = "word ".repeat(100);
        let body = format!("First line.\n{long_line}\nLast line.");
        let pages = layout_story(&story(&body));

        let body_texts: Vec<&str> = pages[0]
            .lines
            .iter()
            .filter(|l| l.font == FontRole::Body)
            .map(|l| l.text.as_str())
            .collect();

        // The overlong line stays a single laid-out line (horizontal overflow
        // is accepted, never wrapped).
        assert_eq!(body_texts[0], "First line.");
        assert_eq!(body_texts[1], long_line);
        assert_eq!(body_texts[2], "Last line.");
    }

    #[test]
    fn test_moral_label_precedes_the_moral_text() {
        let pages = layout_story(&story("Once upon a time."));
        let texts: Vec<&str> = pages[0].lines.iter().map(|l| l.text.as_str()).collect();
        let label_idx = texts.iter().position(|t| *t == "Moral:").unwrap();
        assert_eq!(texts[label_idx + 1], "Courage wins.");
    }

    #[test]
    fn test_short_story_fits_a_single_page() {
        let pages = layout_story(&story("One line.\nTwo lines."));
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_long_story_paginates() {
        let body = vec!["A line of story text."; 200].join("\n");
        let pages = layout_story(&story(&body));
        assert!(pages.len() > 1, "200 lines cannot fit one A4 page");

        // Every emitted baseline stays inside the printable band.
        for page in &pages {
            assert!(!page.lines.is_empty());
            for line in &page.lines {
                assert!(line.y_pt >= MARGIN_BOTTOM_PT);
                assert!(line.y_pt <= FIRST_BASELINE_PT);
            }
        }
    }

    #[test]
    fn test_baselines_descend_within_a_page() {
        let pages = layout_story(&story("a\nb\nc\nd"));
        let ys: Vec<f32> = pages[0].lines.iter().map(|l| l.y_pt).collect();
        for pair in ys.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_all_lines_start_at_the_left_margin() {
        let pages = layout_story(&story("Once upon a time."));
        for line in &pages[0].lines {
            assert_eq!(line.x_pt, MARGIN_LEFT_PT);
        }
    }
}
