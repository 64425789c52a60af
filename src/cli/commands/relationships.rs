//! parent and root commands - Single-hop hierarchy queries

use crate::cli::Context;
use crate::core::loader::Loader;
use crate::core::thing::Thing;
use anyhow::{Context as _, Result};

/// Print the document behind the `parent` link.
///
/// Outputs nothing (exit 0) if there is no parent link.
pub fn parent(ctx: &Context, source: &str) -> Result<()> {
    let loader = ctx.loader()?;
    let thing = open(&loader, source)?;
    let resolved = thing
        .parent(&loader)
        .with_context(|| format!("Failed to resolve parent of {}", thing))?;
    show(resolved);
    Ok(())
}

/// Print the document behind the `root` link.
///
/// Outputs nothing (exit 0) if there is no root link.
pub fn root(ctx: &Context, source: &str) -> Result<()> {
    let loader = ctx.loader()?;
    let thing = open(&loader, source)?;
    let resolved = thing
        .root(&loader)
        .with_context(|| format!("Failed to resolve root of {}", thing))?;
    show(resolved);
    Ok(())
}

fn open(loader: &Loader, source: &str) -> Result<Thing> {
    loader
        .open(source)
        .with_context(|| format!("Failed to open '{}'", source))
}

fn show(resolved: Option<Thing>) {
    if let Some(thing) = resolved {
        println!("{}", thing);
    }
}
