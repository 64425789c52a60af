//! get command - Two-tier property lookup

use crate::cli::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Print the value of `key`, looked up in `properties` first and then at
/// the top level of the document.
pub fn get(ctx: &Context, source: &str, key: &str) -> Result<()> {
    let loader = ctx.loader()?;
    let thing = loader
        .open(source)
        .with_context(|| format!("Failed to open '{}'", source))?;

    let value = thing.get(key)?;
    println!("{}", output::format_value(value));
    Ok(())
}
