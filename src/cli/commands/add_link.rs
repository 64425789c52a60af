//! add-link command - Append a link and save

use std::path::Path;

use crate::cli::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Arguments for [`add_link`].
#[derive(Debug, Clone, Copy)]
pub struct AddLinkArgs<'a> {
    pub source: &'a str,
    pub rel: &'a str,
    pub href: &'a str,
    pub media_type: Option<&'a str>,
    pub title: Option<&'a str>,
    /// Remove existing links with the same relation first
    pub replace: bool,
    /// Save here instead of in place
    pub out: Option<&'a Path>,
}

/// Append a link to a document and save it.
pub fn add_link(ctx: &Context, args: AddLinkArgs<'_>) -> Result<()> {
    let loader = ctx.loader()?;
    let mut thing = loader
        .open(args.source)
        .with_context(|| format!("Failed to open '{}'", args.source))?;

    if args.replace {
        let removed = thing.remove_links(args.rel);
        if removed > 0 {
            loader
                .diagnostics()
                .debug(&format!("removed {} existing '{}' links", removed, args.rel));
        }
    }

    thing.add_link(args.rel, args.href, args.media_type, args.title)?;

    let path = thing
        .save_with(args.out, &ctx.save_options())
        .context("Failed to save document")?;

    output::print(
        format!("Added '{}' link to {}", args.rel, path.display()),
        ctx.verbosity,
    );
    Ok(())
}
