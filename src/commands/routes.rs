//! List pre-render routes

use anyhow::Result;

use crate::generator::prerender_params;
use crate::Site;

/// Print the `(slug, language)` routes that would be pre-rendered at
/// build time
pub fn run(site: &Site) -> Result<()> {
    let mut store = site.store();
    let params = prerender_params(
        &mut store,
        &site.config.languages,
        site.config.prerender_limit,
    );

    println!("Pre-render routes ({}):", params.len());
    for param in params {
        println!("  /{}/blog/{}", param.lang, param.slug);
    }

    Ok(())
}
