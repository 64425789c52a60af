//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Opens the document through the context's loader
//! 2. Calls the catalog model
//! 3. Formats and displays output
//!
//! Read-only commands never save. Editing commands (`add-link`, `clean`)
//! save once, at the end, through the configured save options.

mod add_link;
mod clean;
mod completion;
mod get;
mod info;
mod links;
mod relationships;

// Re-export command functions for testing and direct invocation
pub use add_link::{add_link, AddLinkArgs};
pub use clean::clean;
pub use completion::completion;
pub use get::get;
pub use info::info;
pub use links::links;
pub use relationships::{parent, root};

use crate::cli::args::Command;
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Info { source } => info(ctx, &source),
        Command::Links {
            source,
            rel,
            resolve,
        } => links(ctx, &source, rel.as_deref(), resolve),
        Command::Get { source, key } => get(ctx, &source, &key),
        Command::Parent { source } => parent(ctx, &source),
        Command::Root { source } => root(ctx, &source),
        Command::AddLink {
            source,
            rel,
            href,
            media_type,
            title,
            replace,
            out,
        } => add_link(
            ctx,
            AddLinkArgs {
                source: &source,
                rel: &rel,
                href: &href,
                media_type: media_type.as_deref(),
                title: title.as_deref(),
                replace,
                out: out.as_deref(),
            },
        ),
        Command::Clean { source, out } => clean(ctx, &source, out.as_deref()),
        Command::Completion { shell } => completion(shell),
    }
}
