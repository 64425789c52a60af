//! info command - Summarize one catalog document

use crate::cli::Context;
use crate::core::error::CatalogError;
use crate::core::thing::Thing;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Show id, location, link counts and resolved parent/root.
///
/// Parent and root failures are reported in the output instead of failing
/// the command, so a broken link does not hide the rest of the summary.
pub fn info(ctx: &Context, source: &str) -> Result<()> {
    let loader = ctx.loader()?;
    let thing = loader
        .open(source)
        .with_context(|| format!("Failed to open '{}'", source))?;

    let id = match thing.id() {
        Ok(id) => id.to_string(),
        Err(_) => "<no id>".to_string(),
    };

    let location = match (thing.path(), thing.origin()) {
        (Some(p), _) => p.display().to_string(),
        (None, Some(u)) => u.to_string(),
        (None, None) => "<in memory>".to_string(),
    };

    let rows = vec![
        ("id", id),
        ("location", location),
        ("links", link_summary(&thing)),
        ("parent", describe(thing.parent(&loader))),
        ("root", describe(thing.root(&loader))),
    ];
    println!("{}", output::format_rows(&rows));

    Ok(())
}

/// `rel=count` pairs in order of first appearance.
fn link_summary(thing: &Thing) -> String {
    let mut seen: Vec<(&str, usize)> = Vec::new();
    for link in thing.links(None) {
        match seen.iter_mut().find(|(rel, _)| *rel == link.rel) {
            Some((_, n)) => *n += 1,
            None => seen.push((link.rel.as_str(), 1)),
        }
    }

    if seen.is_empty() {
        return "none".to_string();
    }
    seen.iter()
        .map(|(rel, n)| format!("{}={}", rel, n))
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe(resolved: Result<Option<Thing>, CatalogError>) -> String {
    match resolved {
        Ok(Some(thing)) => thing.to_string(),
        Ok(None) => "none".to_string(),
        Err(e) => format!("unresolved ({})", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_counts_in_order() {
        let thing = Thing::new(
            json!({"id": "a", "links": [
                {"rel": "self", "href": "a.json"},
                {"rel": "child", "href": "b.json"},
                {"rel": "item", "href": "i.json"},
                {"rel": "child", "href": "c.json"}
            ]}),
            None,
        )
        .unwrap();
        assert_eq!(link_summary(&thing), "self=1 child=2 item=1");
    }

    #[test]
    fn summary_without_links() {
        let thing = Thing::new(json!({"id": "a"}), None).unwrap();
        assert_eq!(link_summary(&thing), "none");
    }

    #[test]
    fn describe_outcomes() {
        assert_eq!(describe(Ok(None)), "none");
        assert!(describe(Err(CatalogError::MissingId)).starts_with("unresolved"));
    }
}
