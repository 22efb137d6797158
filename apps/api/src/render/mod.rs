//! PDF serialization — realizes a computed layout with printpdf builtin
//! Helvetica fonts and writes the bytes to a fresh temp file.
//!
//! The returned file is kept on disk: the caller reads the bytes, and
//! eventual cleanup belongs to the platform temp directory, not this module.
//! The renderer never deletes its artifact.

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use thiserror::Error;
use tracing::debug;

use crate::layout::{layout_story, FontRole, PAGE_HEIGHT_PT, PAGE_WIDTH_PT};
use crate::models::story::StoryResult;

const PT_PER_MM: f32 = 72.0 / 25.4;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create temporary file: {0}")]
    TempFile(std::io::Error),

    #[error("failed to write PDF: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF backend error: {0}")]
    Pdf(String),
}

fn pt_to_mm(pt: f32) -> f32 {
    pt / PT_PER_MM
}

/// Renders a story to a single- or multi-page A4 PDF and returns the path of
/// the freshly created artifact.
pub fn render_story_pdf(story: &StoryResult) -> Result<PathBuf, RenderError> {
    let pages = layout_story(story);

    let page_w = Mm(pt_to_mm(PAGE_WIDTH_PT).into());
    let page_h = Mm(pt_to_mm(PAGE_HEIGHT_PT).into());

    let (doc, first_page, first_layer) =
        PdfDocument::new(story.topic.as_str(), page_w, page_h, "Layer 1");

    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    for (idx, page) in pages.iter().enumerate() {
        let layer = if idx == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) = doc.add_page(page_w, page_h, "Layer 1");
            doc.get_page(page_idx).get_layer(layer_idx)
        };

        for line in &page.lines {
            let font: &IndirectFontRef = match line.font {
                FontRole::TitleBold => &bold,
                FontRole::Body => &regular,
            };
            layer.use_text(
                line.text.as_str(),
                line.size_pt.into(),
                Mm(pt_to_mm(line.x_pt).into()),
                Mm(pt_to_mm(line.y_pt).into()),
                font,
            );
        }
    }

    let temp = tempfile::Builder::new()
        .prefix("story-")
        .suffix(".pdf")
        .tempfile()
        .map_err(RenderError::TempFile)?;
    // keep() detaches the delete-on-drop guard; the artifact outlives us.
    let (file, path) = temp.keep().map_err(|e| RenderError::TempFile(e.error))?;

    let mut writer = BufWriter::new(file);
    doc.save(&mut writer)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    writer.flush()?;

    debug!(
        "Rendered PDF ({} page(s)) to {}",
        pages.len(),
        path.display()
    );

    Ok(path)
}
