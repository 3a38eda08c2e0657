//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub url: String,

    /// Languages the site is published in, English first
    pub languages: Vec<String>,

    // Content
    pub content_dir: String,
    pub per_page: usize,

    /// Most-recent posts pre-rendered at build time; the rest render on
    /// first request
    pub prerender_limit: usize,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            subtitle: String::new(),
            description: String::new(),
            author: String::new(),
            url: "http://example.com".to_string(),
            languages: vec!["en".to_string(), "pt".to_string()],
            content_dir: "content/blog".to_string(),
            per_page: 6,
            prerender_limit: 20,
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
