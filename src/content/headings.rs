//! Heading extraction for table-of-contents navigation

use lazy_static::lazy_static;
use regex::Regex;

use super::post::Heading;
use crate::helpers::slug::slugify;

lazy_static! {
    // Level 1 headings are the page title, not TOC entries; level 4+ are
    // too deep. Whitespace must stay on the line, so no \s here.
    static ref HEADING_LINE: Regex = Regex::new(r"(?m)^(#{2,3})[ \t]+(.+?)[ \t\r]*$").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref BOLD_UNDERSCORE: Regex = Regex::new(r"__(.+?)__").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\*(.+?)\*").unwrap();
    static ref ITALIC_UNDERSCORE: Regex = Regex::new(r"_(.+?)_").unwrap();
}

/// Extract level 2 and 3 headings from a markdown body, in document order.
///
/// Anchor ids are slugified from the cleaned display text. Two headings
/// with the same text produce the same id; duplicates are kept as-is.
pub fn extract_headings(body: &str) -> Vec<Heading> {
    HEADING_LINE
        .captures_iter(body)
        .map(|caps| {
            let level = caps[1].len() as u8;
            let text = strip_emphasis(&caps[2]);
            let id = slugify(&text);
            Heading { level, text, id }
        })
        .collect()
}

/// Remove inline emphasis markers, keeping the inner text.
fn strip_emphasis(text: &str) -> String {
    let text = BOLD.replace_all(text, "$1");
    let text = BOLD_UNDERSCORE.replace_all(&text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = ITALIC_UNDERSCORE.replace_all(&text, "$1");
    text.into_owned()
}
