//! Pre-render parameter enumeration for static-site generation
//!
//! The build layer pre-renders one page per `(slug, language)` pair. Only
//! the most recent posts are enumerated, bounded by the configured limit;
//! older posts render on first request instead of at build time.

use serde::Serialize;

use crate::content::ContentStore;

/// One pre-rendered route: a post in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrerenderParam {
    pub slug: String,
    pub lang: String,
}

/// Enumerate `(slug, language)` pairs for the `limit` most recent posts,
/// newest first, each post once per configured language.
pub fn prerender_params(
    store: &mut ContentStore,
    languages: &[String],
    limit: usize,
) -> Vec<PrerenderParam> {
    let posts = store.all_posts();

    posts
        .iter()
        .take(limit)
        .flat_map(|post| {
            languages.iter().map(move |lang| PrerenderParam {
                slug: post.slug.clone(),
                lang: lang.clone(),
            })
        })
        .collect()
}
