//! Turning whatever the provider sent back into plain, displayable text.
//!
//! Generated text tends to carry markdown emphasis and heading markers.
//! They are stripped before anything is stored or shown, so every item in
//! the persisted list is plain text.

use quill_model::GenerationResponse;

/// Content used when the reply carried no body at all.
pub const NO_CONTENT: &str = "No content received from AI.";

/// Number of characters shown in list excerpts.
pub const EXCERPT_CHARS: usize = 180;

const MAX_HEADING_CHARS: usize = 80;
const MAX_HEADING_WORDS: usize = 10;

/// Removes emphasis (`*`, `**`) and heading (`##`, `###`, ...) markers and
/// trims the result.
///
/// Every `*` goes first, then every run of two or more `#`. A lone `#` is
/// left alone. Applying this twice gives the same result as applying it
/// once.
pub fn normalize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut hashes = 0usize;
    for ch in raw.chars().filter(|&ch| ch != '*') {
        if ch == '#' {
            hashes += 1;
            continue;
        }
        if hashes == 1 {
            out.push('#');
        }
        hashes = 0;
        out.push(ch);
    }
    if hashes == 1 {
        out.push('#');
    }
    out.trim().to_owned()
}

/// Picks the article title: the reply's own title when it has one, a
/// title made from the topic otherwise.
pub fn derive_title(response_title: Option<&str>, topic: &str) -> String {
    if let Some(title) = response_title.map(normalize_text) {
        if !title.is_empty() {
            return title;
        }
    }
    normalize_text(&format!("Insightful Article on {topic}"))
}

/// Picks the article body from the first non-empty candidate field, in
/// `blog`, `response`, `content` order.
pub fn derive_content(response: &GenerationResponse) -> String {
    response
        .body_candidates()
        .into_iter()
        .flatten()
        .map(normalize_text)
        .find(|content| !content.is_empty())
        .unwrap_or_else(|| NO_CONTENT.to_owned())
}

/// A piece of an article in the read view.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Block {
    /// A short line that introduces a section.
    Heading(String),
    /// Regular body text.
    Paragraph(String),
}

impl Block {
    /// Returns the text of the block.
    #[inline]
    pub fn text(&self) -> &str {
        match self {
            Block::Heading(text) | Block::Paragraph(text) => text,
        }
    }
}

/// Splits content into blocks at blank lines for the read view.
///
/// A fragment counts as a heading when it is short, has few words, does
/// not end a sentence and is not the first fragment.
pub fn paragraphize(content: &str) -> Vec<Block> {
    normalize_text(content)
        .split("\n\n")
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .enumerate()
        .map(|(idx, fragment)| {
            let is_heading = idx > 0
                && fragment.chars().count() < MAX_HEADING_CHARS
                && fragment.split(' ').count() < MAX_HEADING_WORDS
                && !fragment.ends_with('.');
            if is_heading {
                Block::Heading(fragment.to_owned())
            } else {
                Block::Paragraph(fragment.to_owned())
            }
        })
        .collect()
}

/// Returns the beginning of the content for list previews.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let content = normalize_text(content);
    let mut excerpt: String = content.chars().take(max_chars).collect();
    excerpt.push_str("...");
    excerpt
}
