//! Slug generation for URLs and heading anchors
//!
//! Content is authored in English and Portuguese, so accented characters
//! ("é", "ç", "ã") must fold to their base Latin letters for slugs to stay
//! ASCII and stable.

use deunicode::deunicode;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s-]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref HYPHEN_RUN: Regex = Regex::new(r"-{2,}").unwrap();
}

/// Convert arbitrary text into a URL-safe slug.
///
/// Deterministic: the table of contents links against anchor ids produced
/// by this same function, so equal input must always yield equal output.
///
/// # Examples
/// ```
/// use tinta::helpers::slug::slugify;
/// assert_eq!(slugify("Configuração de Ambiente"), "configuracao-de-ambiente");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let folded = deunicode(&lowered);
    let cleaned = NON_WORD.replace_all(&folded, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&cleaned, "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}
