//! tinta: content engine for a bilingual portfolio and technical blog
//!
//! This crate loads and indexes markdown blog posts from a content
//! directory, computing derived fields (slug, reading time, table-of-
//! contents headings) and serving listings, pagination, and tag queries.
//! Rendering and routing belong to the host web framework; this crate is
//! the read side underneath them.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;

use anyhow::Result;
use std::path::Path;

/// The site application: configuration plus resolved directories
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Blog content directory
    pub content_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Create a content store for one unit of work (one request or one
    /// generation pass). Memoized results live and die with the store;
    /// take a fresh one per request so content edits are picked up.
    pub fn store(&self) -> content::ContentStore {
        content::ContentStore::new(self.content_dir.clone())
    }
}
