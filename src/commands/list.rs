//! List site content

use anyhow::Result;

use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let mut store = site.store();

    match content_type {
        "post" | "posts" => {
            let posts = store.all_posts();
            println!("Posts ({}):", posts.len());
            for post in posts.iter() {
                println!(
                    "  {} - {} ({} min) [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.reading_time,
                    post.tags.join(", ")
                );
            }
        }
        "tag" | "tags" => {
            let posts = store.all_posts();
            let mut tags: std::collections::HashMap<String, usize> =
                std::collections::HashMap::new();
            for post in posts.iter() {
                for tag in &post.tags {
                    *tags.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            println!("Unknown type: {} (expected post or tag)", content_type);
        }
    }

    Ok(())
}
