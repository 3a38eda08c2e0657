//! Content store - enumerates, parses, and serves blog posts
//!
//! One [`ContentStore`] instance is one unit of work: a single request or a
//! single static-generation pass. Parsed results are memoized inside the
//! instance and die with it, so edited files are picked up by the next
//! request. A process-lifetime cache would defeat content hot-reloading
//! during local development.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use walkdir::WalkDir;

use super::frontmatter::{FrontMatter, FrontMatterError};
use super::post::{Post, PostMetadata};

/// Why a post failed to load. Contained here: the public operations only
/// ever surface `None` or an empty collection.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    FrontMatter(#[from] FrontMatterError),
}

/// One page of the post catalog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedPosts {
    pub posts: Vec<PostMetadata>,
    pub total_pages: usize,
    pub current_page: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Read-side projection over a directory of markdown posts.
pub struct ContentStore {
    content_dir: PathBuf,
    /// Per-slug memo, misses included; keyed lookups within the unit of
    /// work must not re-read the file.
    posts: HashMap<String, Option<Arc<Post>>>,
    /// Memo for the sorted full listing
    listing: Option<Arc<Vec<PostMetadata>>>,
}

impl ContentStore {
    /// Create a store over a content directory.
    ///
    /// The directory may not exist yet; a freshly scaffolded site simply
    /// has zero posts.
    pub fn new<P: Into<PathBuf>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.into(),
            posts: HashMap::new(),
            listing: None,
        }
    }

    /// All post slugs: the base name of every markdown file in the content
    /// directory. Missing directory yields an empty list.
    pub fn list_slugs(&self) -> Vec<String> {
        if !self.content_dir.exists() {
            return Vec::new();
        }

        let mut slugs = Vec::new();

        for entry in WalkDir::new(&self.content_dir)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    slugs.push(stem.to_string());
                }
            }
        }

        slugs
    }

    /// Load a single post by slug, or `None` if it does not exist or
    /// cannot be parsed. Parse failures are logged and contained; a bad
    /// post must never break the caller.
    pub fn post_by_slug(&mut self, slug: &str) -> Option<Arc<Post>> {
        if let Some(cached) = self.posts.get(slug) {
            return cached.clone();
        }

        let loaded = match self.load_post(slug) {
            Ok(post) => post.map(Arc::new),
            Err(e) => {
                tracing::warn!("Failed to load post '{}': {}", slug, e);
                None
            }
        };

        self.posts.insert(slug.to_string(), loaded.clone());
        loaded
    }

    /// Metadata for every loadable post, sorted by date descending.
    /// Posts that fail to load are skipped, not surfaced as errors.
    pub fn all_posts(&mut self) -> Arc<Vec<PostMetadata>> {
        if let Some(listing) = &self.listing {
            return Arc::clone(listing);
        }

        let mut metas = Vec::new();
        for slug in self.list_slugs() {
            if let Some(post) = self.post_by_slug(&slug) {
                metas.push(post.metadata());
            }
        }

        // Stable sort: equal dates keep file-enumeration order
        metas.sort_by(|a, b| b.date.cmp(&a.date));

        let listing = Arc::new(metas);
        self.listing = Some(Arc::clone(&listing));
        listing
    }

    /// Slice one page out of the sorted catalog.
    ///
    /// Out-of-range pages clamp to the nearest valid page instead of
    /// erroring; with zero posts, `total_pages` is 0 and the page is empty.
    pub fn paginated_posts(&mut self, page: usize, page_size: usize) -> PaginatedPosts {
        let page_size = page_size.max(1);
        let all = self.all_posts();

        let total_pages = (all.len() + page_size - 1) / page_size;
        let current_page = page.clamp(1, total_pages.max(1));

        let start = (current_page - 1) * page_size;
        let posts = all.iter().skip(start).take(page_size).cloned().collect();

        PaginatedPosts {
            posts,
            total_pages,
            current_page,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
        }
    }

    /// Posts carrying a tag, case-insensitive exact match, in the global
    /// date-descending order.
    pub fn posts_by_tag(&mut self, tag: &str) -> Vec<PostMetadata> {
        let needle = tag.to_lowercase();
        self.all_posts()
            .iter()
            .filter(|post| post.tags.iter().any(|t| t.to_lowercase() == needle))
            .cloned()
            .collect()
    }

    /// Unique tags across the catalog, alphabetically sorted.
    pub fn all_tags(&mut self) -> Vec<String> {
        let tags: BTreeSet<String> = self
            .all_posts()
            .iter()
            .flat_map(|post| post.tags.iter().cloned())
            .collect();
        tags.into_iter().collect()
    }

    /// Resolve `{slug}.md`, falling back to `{slug}.mdx`, then parse.
    /// `Ok(None)` means not found, a normal outcome.
    fn load_post(&self, slug: &str) -> Result<Option<Post>, ContentError> {
        let md_path = self.content_dir.join(format!("{}.md", slug));
        let mdx_path = self.content_dir.join(format!("{}.mdx", slug));

        let path = if md_path.exists() {
            md_path
        } else if mdx_path.exists() {
            mdx_path
        } else {
            return Ok(None);
        };

        let raw = fs::read_to_string(&path)?;
        let (fm, body) = FrontMatter::parse(&raw)?;
        tracing::debug!("Parsed post '{}' from {:?}", slug, path);

        Ok(Some(Post::from_parts(slug, fm, body)))
    }
}

/// Check if a file is a markdown source
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "mdx")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_post(dir: &Path, slug: &str, date: &str, title: &str, tags: &[&str]) {
        let tag_lines: String = tags.iter().map(|t| format!("  - {}\n", t)).collect();
        let content = format!(
            "---\ntitle: {}\ndate: {}\nexcerpt: About {}\ntags:\n{}---\n\n## Intro\n\nSome body text for {}.\n",
            title, date, title, tag_lines, slug
        );
        fs::write(dir.join(format!("{}.md", slug)), content).unwrap();
    }

    #[test]
    fn test_slug_round_trip() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "hello-world", "2024-01-15", "Hello", &["intro"]);

        let mut store = ContentStore::new(tmp.path());
        let slugs = store.list_slugs();
        assert_eq!(slugs, vec!["hello-world"]);

        let post = store.post_by_slug("hello-world").unwrap();
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.title, "Hello");
    }

    #[test]
    fn test_mdx_fallback() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("notes.mdx"),
            "---\ntitle: Notes\n---\n\nbody\n",
        )
        .unwrap();

        let mut store = ContentStore::new(tmp.path());
        assert_eq!(store.list_slugs(), vec!["notes"]);
        let post = store.post_by_slug("notes").unwrap();
        assert_eq!(post.title, "Notes");
    }

    #[test]
    fn test_missing_slug_is_none() {
        let tmp = TempDir::new().unwrap();
        let mut store = ContentStore::new(tmp.path());
        assert!(store.post_by_slug("does-not-exist").is_none());
    }

    #[test]
    fn test_missing_directory_is_empty_catalog() {
        let mut store = ContentStore::new("/nonexistent/content/dir");
        assert!(store.list_slugs().is_empty());
        assert!(store.all_posts().is_empty());
    }

    #[test]
    fn test_listing_sorted_date_descending() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "oldest", "2023-01-01", "Oldest", &[]);
        write_post(tmp.path(), "newest", "2025-06-01", "Newest", &[]);
        write_post(tmp.path(), "middle", "2024-03-10", "Middle", &[]);

        let mut store = ContentStore::new(tmp.path());
        let posts = store.all_posts();

        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest", "middle", "oldest"]);
        for pair in posts.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_partial_failure_isolation() {
        let tmp = TempDir::new().unwrap();
        for i in 0..5 {
            write_post(tmp.path(), &format!("good-{}", i), "2024-01-15", "Good", &[]);
        }
        fs::write(
            tmp.path().join("broken.md"),
            "---\ntitle: [unclosed sequence\n---\n\nbody\n",
        )
        .unwrap();

        let mut store = ContentStore::new(tmp.path());
        assert_eq!(store.all_posts().len(), 5);
        assert!(store.post_by_slug("broken").is_none());
    }

    #[test]
    fn test_pagination_boundaries() {
        let tmp = TempDir::new().unwrap();
        for i in 0..13 {
            write_post(
                tmp.path(),
                &format!("post-{:02}", i),
                &format!("2024-01-{:02}", i + 1),
                "Post",
                &[],
            );
        }

        let mut store = ContentStore::new(tmp.path());

        let first = store.paginated_posts(1, 6);
        assert_eq!(first.posts.len(), 6);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next_page);
        assert!(!first.has_prev_page);

        let last = store.paginated_posts(3, 6);
        assert_eq!(last.posts.len(), 1);
        assert!(!last.has_next_page);
        assert!(last.has_prev_page);

        // Out-of-range pages clamp instead of returning empty
        let clamped = store.paginated_posts(99, 6);
        assert_eq!(clamped.current_page, 3);
        assert_eq!(clamped.posts.len(), 1);

        let clamped_low = store.paginated_posts(0, 6);
        assert_eq!(clamped_low.current_page, 1);
    }

    #[test]
    fn test_pagination_empty_catalog() {
        let tmp = TempDir::new().unwrap();
        let mut store = ContentStore::new(tmp.path());

        let page = store.paginated_posts(1, 6);
        assert_eq!(page.total_pages, 0);
        assert!(page.posts.is_empty());
        assert!(!page.has_next_page);
        assert!(!page.has_prev_page);
    }

    #[test]
    fn test_posts_by_tag_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "a", "2024-01-02", "A", &["Rust", "DevOps"]);
        write_post(tmp.path(), "b", "2024-01-03", "B", &["rust"]);
        write_post(tmp.path(), "c", "2024-01-01", "C", &["other"]);

        let mut store = ContentStore::new(tmp.path());
        let tagged = store.posts_by_tag("RUST");

        let slugs: Vec<_> = tagged.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a"]);
    }

    #[test]
    fn test_all_tags_unique_and_sorted() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "a", "2024-01-02", "A", &["rust", "devops"]);
        write_post(tmp.path(), "b", "2024-01-03", "B", &["rust", "backend"]);

        let mut store = ContentStore::new(tmp.path());
        assert_eq!(store.all_tags(), vec!["backend", "devops", "rust"]);
    }

    #[test]
    fn test_memoized_within_unit_of_work() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "memo", "2024-01-15", "Memo", &[]);

        let mut store = ContentStore::new(tmp.path());
        let first = store.post_by_slug("memo").unwrap();

        // Edits after the first read are invisible to this store instance
        fs::write(
            tmp.path().join("memo.md"),
            "---\ntitle: Edited\n---\n\nnew body\n",
        )
        .unwrap();

        let second = store.post_by_slug("memo").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.title, "Memo");

        let listing_a = store.all_posts();
        let listing_b = store.all_posts();
        assert!(Arc::ptr_eq(&listing_a, &listing_b));

        // ...but a fresh instance (next request) sees the new content
        let mut next_request = ContentStore::new(tmp.path());
        let reloaded = next_request.post_by_slug("memo").unwrap();
        assert_eq!(reloaded.title, "Edited");
    }

    #[test]
    fn test_headings_and_reading_time_derived() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "derived", "2024-01-15", "Derived", &[]);

        let mut store = ContentStore::new(tmp.path());
        let post = store.post_by_slug("derived").unwrap();
        assert_eq!(post.headings.len(), 1);
        assert_eq!(post.headings[0].text, "Intro");
        assert!(post.reading_time >= 1);

        let listing = store.all_posts();
        assert!(listing[0].reading_time >= 1);
    }
}
