//! clean command - Strip location-dependent links and save

use std::path::Path;

use crate::cli::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Remove `self`, `parent`, `root` and `child` links and save.
///
/// Saves to `out` when given, which is how a move is done: clean, write to
/// the new place, then add the links the new hierarchy needs.
pub fn clean(ctx: &Context, source: &str, out: Option<&Path>) -> Result<()> {
    let loader = ctx.loader()?;
    let mut thing = loader
        .open(source)
        .with_context(|| format!("Failed to open '{}'", source))?;

    let removed = thing.clean_hierarchy();
    let path = thing
        .save_with(out, &ctx.save_options())
        .context("Failed to save document")?;

    output::print(
        format!(
            "Removed {} hierarchy link{} from {}",
            removed,
            if removed == 1 { "" } else { "s" },
            path.display()
        ),
        ctx.verbosity,
    );
    Ok(())
}
