use super::{LoadError, LoadedDocument};
use html2text::render::text_renderer::TrivialDecorator;
use std::path::Path;

/// Load text from EPUB file using epub crate.
///
/// Chapters are visited in spine order; each chapter's markup is reduced to
/// plain text and the chapters are joined with a blank line.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    let mut doc =
        epub::doc::EpubDoc::new(path).map_err(|e| LoadError::EpubParse(e.to_string()))?;

    let num_chapters = doc.get_num_chapters();

    if num_chapters == 0 {
        return Err(LoadError::EpubParse(
            "No chapters found in EPUB".to_string(),
        ));
    }

    let mut content = String::new();

    for chapter_idx in 0..num_chapters {
        if !doc.set_current_chapter(chapter_idx) {
            continue;
        }

        if let Some((chapter_content, _mime)) = doc.get_current_str() {
            let plain_text = extract_plain_text(&chapter_content);
            if plain_text.is_empty() {
                continue;
            }
            if !content.is_empty() {
                content.push_str("\n\n");
            }
            content.push_str(&plain_text);
        }
    }

    LoadedDocument::new(content, format!("epub:{}", path.display()))
}

/// Wide enough that html2text never wraps inside a word.
const HTML_TEXT_WIDTH: usize = 1000;

/// Reduce a chapter's XHTML to plain text.
///
/// Inline markup leaves words intact, block elements become line breaks and
/// entities are decoded. Blank lines are dropped.
fn extract_plain_text(html: &str) -> String {
    let text = html2text::from_read_with_decorator(
        html.as_bytes(),
        HTML_TEXT_WIDTH,
        TrivialDecorator::new(),
    );

    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
