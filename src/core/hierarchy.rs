//! core::hierarchy
//!
//! Single-hop resolution of `root` and `parent` links.
//!
//! # Design
//!
//! [`Thing::root`] and [`Thing::parent`] follow the first link of their
//! relation and load the document it points to. They do not walk to the
//! top of the tree: callers wanting the ultimate ancestor call `parent()`
//! repeatedly, which keeps each step cheap and cannot loop forever on a
//! cyclic catalog.
//!
//! Resolved entities are never cached or stored on the link. Every call
//! re-reads the target, so edits to the link store are always honored.
//!
//! # Example
//!
//! ```no_run
//! use stacgraph::core::loader::Loader;
//! use stacgraph::remote::HttpTransport;
//!
//! let loader = Loader::new(HttpTransport::new().unwrap());
//! let item = loader.open("catalog/collection/item.json").unwrap();
//!
//! let mut current = item.parent(&loader).unwrap();
//! while let Some(thing) = current {
//!     println!("ancestor: {}", thing);
//!     current = thing.parent(&loader).unwrap();
//! }
//! ```

use super::error::CatalogError;
use super::link::rel;
use super::loader::Loader;
use super::target::Target;
use super::thing::Thing;

impl Thing {
    /// Resolve `href` against this thing's location.
    pub fn resolve_href(&self, href: &str) -> Result<Target, CatalogError> {
        Target::resolve(href, self.path(), self.origin())
    }

    /// Resolved targets of all links, or of one relation, in store order.
    ///
    /// # Errors
    ///
    /// Fails on the first relative target that has no base to resolve against.
    pub fn link_targets(&self, relation: Option<&str>) -> Result<Vec<Target>, CatalogError> {
        self.links(relation)
            .into_iter()
            .map(|l| self.resolve_href(&l.href))
            .collect()
    }

    /// Load the document behind this thing's `root` link.
    ///
    /// Returns `Ok(None)` if there is no `root` link.
    ///
    /// # Errors
    ///
    /// Fails if the target cannot be resolved or loaded.
    pub fn root(&self, loader: &Loader) -> Result<Option<Thing>, CatalogError> {
        self.follow(rel::ROOT, loader)
    }

    /// Load the document behind this thing's `parent` link.
    ///
    /// Returns `Ok(None)` if there is no `parent` link.
    pub fn parent(&self, loader: &Loader) -> Result<Option<Thing>, CatalogError> {
        self.follow(rel::PARENT, loader)
    }

    fn follow(&self, relation: &str, loader: &Loader) -> Result<Option<Thing>, CatalogError> {
        let Some(first) = self.first_link(relation) else {
            return Ok(None);
        };

        let count = self.link_store().count(relation);
        if count > 1 {
            loader.diagnostics().warn(&format!(
                "{} has {} '{}' links, following the first",
                self, count, relation
            ));
        }

        let target = self.resolve_href(&first.href)?;
        loader.diagnostics().debug(&format!(
            "following '{}' link {} -> {}",
            relation, first.href, target
        ));

        loader.open_target(&target).map(Some)
    }
}
