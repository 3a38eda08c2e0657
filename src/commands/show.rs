//! Show a single post

use anyhow::Result;

use crate::Site;

/// Print one post's metadata, table of contents, and body
pub fn run(site: &Site, slug: &str) -> Result<()> {
    let mut store = site.store();

    let Some(post) = store.post_by_slug(slug) else {
        println!("Post not found: {}", slug);
        return Ok(());
    };

    println!("{}", post.title);
    println!("  date:         {}", post.date.format("%Y-%m-%d %H:%M"));
    println!("  reading time: {} min", post.reading_time);
    if !post.tags.is_empty() {
        println!("  tags:         {}", post.tags.join(", "));
    }
    if !post.excerpt.is_empty() {
        println!("  excerpt:      {}", post.excerpt);
    }

    if !post.headings.is_empty() {
        println!("\nContents:");
        for heading in &post.headings {
            let indent = if heading.level == 2 { "  " } else { "    " };
            println!("{}{} (#{})", indent, heading.text, heading.id);
        }
    }

    println!("\n{}", post.content);

    Ok(())
}
