//! links command - List a document's links

use crate::cli::Context;
use anyhow::{Context as _, Result};

/// Print `rel<TAB>target` for each link, in document order.
pub fn links(ctx: &Context, source: &str, rel: Option<&str>, resolve: bool) -> Result<()> {
    let loader = ctx.loader()?;
    let thing = loader
        .open(source)
        .with_context(|| format!("Failed to open '{}'", source))?;

    for link in thing.links(rel) {
        let target = if resolve {
            thing.resolve_href(&link.href)?.to_string()
        } else {
            link.href.clone()
        };
        println!("{}\t{}", link.rel, target);
    }

    Ok(())
}
