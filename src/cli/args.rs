//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--header` / `-H NAME=VALUE`: Extra header for remote reads (repeatable)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// stg - Inspect and re-link spatiotemporal asset catalogs
#[derive(Parser, Debug)]
#[command(name = "stg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Header sent with remote reads, as NAME=VALUE
    #[arg(short = 'H', long = "header", global = true, value_name = "NAME=VALUE")]
    pub headers: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a document's id, location, links and place in the hierarchy
    #[command(
        name = "info",
        long_about = "Show a summary of one catalog document.\n\n\
            Prints the document id, where it was loaded from, how many links it \
            carries per relation, and the ids of its parent and root when those \
            links resolve.",
        after_help = "\
EXAMPLES:
    # Local catalog
    stg info catalog/catalog.json

    # Hosted catalog with an API key
    stg info https://example.com/stac/catalog.json -H X-Api-Key=secret"
    )]
    Info {
        /// Path or URL of the document
        source: String,
    },

    /// List a document's links
    #[command(
        name = "links",
        long_about = "List the links of a document, one per line, in document order.\n\n\
            Each line is the relation and the target separated by a tab. With \
            --resolve, relative targets are resolved against the document's \
            location.",
        after_help = "\
EXAMPLES:
    # All links
    stg links catalog.json

    # Only children, as absolute locations
    stg links catalog.json --rel child --resolve"
    )]
    Links {
        /// Path or URL of the document
        source: String,

        /// Only links with this relation
        #[arg(long)]
        rel: Option<String>,

        /// Print resolved targets instead of raw hrefs
        #[arg(long)]
        resolve: bool,
    },

    /// Look up a property (in `properties` first, then top level)
    #[command(name = "get")]
    Get {
        /// Path or URL of the document
        source: String,

        /// Property name
        key: String,
    },

    /// Print the document behind the `parent` link
    #[command(
        name = "parent",
        long_about = "Load the document behind the first 'parent' link and print its id \
            and location.\n\n\
            Prints nothing if the document has no parent link. This is a single \
            hop; run it again on the output to keep climbing.",
        after_help = "\
EXAMPLES:
    stg parent catalog/sentinel/item.json"
    )]
    Parent {
        /// Path or URL of the document
        source: String,
    },

    /// Print the document behind the `root` link
    #[command(name = "root")]
    Root {
        /// Path or URL of the document
        source: String,
    },

    /// Append a link to a document and save it
    #[command(
        name = "add-link",
        long_about = "Append a link to a document and save it.\n\n\
            Links are never de-duplicated. Use --replace for relations that should \
            appear once, such as 'self': existing links with the same relation are \
            removed first.",
        after_help = "\
EXAMPLES:
    # Add a child
    stg add-link catalog.json child sentinel/catalog.json --type application/json

    # Point self at the published location
    stg add-link catalog.json self https://example.com/stac/catalog.json --replace"
    )]
    AddLink {
        /// Document to edit (path, or URL together with --out)
        source: String,

        /// Link relation
        rel: String,

        /// Link target
        href: String,

        /// Media type of the target
        #[arg(long = "type", value_name = "MEDIA_TYPE")]
        media_type: Option<String>,

        /// Link title
        #[arg(long)]
        title: Option<String>,

        /// Remove existing links with the same relation first
        #[arg(long)]
        replace: bool,

        /// Save to this path instead of in place
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Strip self, parent, root and child links and save
    #[command(
        name = "clean",
        long_about = "Remove every 'self', 'parent', 'root' and 'child' link from a \
            document and save it.\n\n\
            These links depend on where the document lives and must be regenerated \
            after a move. All other links are kept in order. Running clean twice is \
            the same as running it once.",
        after_help = "\
EXAMPLES:
    # Clean in place
    stg clean catalog/item.json

    # Move: clean and write to the new location
    stg clean catalog/item.json --out moved/item.json"
    )]
    Clean {
        /// Document to clean (path, or URL together with --out)
        source: String,

        /// Save to this path instead of in place
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    # Bash
    stg completion bash > ~/.local/share/bash-completion/completions/stg

    # Zsh
    stg completion zsh > ~/.zfunc/_stg"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_add_link() {
        let cli = Cli::try_parse_from([
            "stg",
            "add-link",
            "a.json",
            "self",
            "/cat/a.json",
            "--replace",
            "--type",
            "application/json",
        ])
        .unwrap();

        match cli.command {
            Command::AddLink {
                rel,
                href,
                media_type,
                replace,
                out,
                ..
            } => {
                assert_eq!(rel, "self");
                assert_eq!(href, "/cat/a.json");
                assert_eq!(media_type.as_deref(), Some("application/json"));
                assert!(replace);
                assert!(out.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_headers_repeat() {
        let cli = Cli::try_parse_from([
            "stg",
            "info",
            "https://example.com/c.json",
            "-H",
            "A=1",
            "--header",
            "B=2",
        ])
        .unwrap();
        assert_eq!(cli.headers, vec!["A=1", "B=2"]);
    }
}
