//! core::link
//!
//! Link records and the ordered link store attached to every entity.
//!
//! # Relations
//!
//! A relation is a plain string from an open vocabulary. The constants in
//! [`rel`] are the values the hierarchy resolver and editor give special
//! meaning to; any other value is kept as data and never rejected.
//!
//! # Ordering
//!
//! Insertion order is preserved and meaningful: lookups by relation return
//! matches in store order, and the first match wins where a caller wants a
//! single link. Nothing is de-duplicated, since `child` and `item` are
//! expected to carry many links.
//!
//! # Example
//!
//! ```
//! use stacgraph::core::link::{rel, Link, LinkStore};
//!
//! let mut store = LinkStore::new();
//! store.push(Link::new(rel::SELF, "/cat/a.json").unwrap());
//! store.push(Link::new(rel::CHILD, "b/b.json").unwrap());
//! store.push(Link::new("license", "https://example.com/license").unwrap());
//!
//! assert_eq!(store.links(Some(rel::CHILD)).len(), 1);
//! assert_eq!(store.clean_hierarchy(), 2);
//! assert_eq!(store.links(None)[0].rel, "license");
//! ```

use serde_json::{Map, Value};
use thiserror::Error;

/// Relation names with special meaning in the hierarchy.
pub mod rel {
    pub const ROOT: &str = "root";
    pub const PARENT: &str = "parent";
    pub const CHILD: &str = "child";
    pub const ITEM: &str = "item";
    pub const SELF: &str = "self";
    pub const COLLECTION: &str = "collection";
}

const REL_KEY: &str = "rel";
const HREF_KEY: &str = "href";
const TYPE_KEY: &str = "type";
const TITLE_KEY: &str = "title";

/// Relations removed by [`LinkStore::clean_hierarchy`].
///
/// These depend on where the entity lives (`self`, `parent`, `root`) or on
/// the shape of the tree below it (`child`), and have to be regenerated
/// after a move.
pub const HIERARCHY_RELATIONS: [&str; 4] = [rel::SELF, rel::PARENT, rel::ROOT, rel::CHILD];

/// Errors from link construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("link {0} cannot be empty")]
    Empty(&'static str),

    #[error("malformed link object: {0}")]
    Malformed(String),
}

/// One directed edge in the catalog graph.
///
/// The target is always stored as the raw `href` string. Resolving it to a
/// live entity happens on demand in the hierarchy resolver and is never
/// cached here.
///
/// `type` and `title` are lifted into their fields only when they hold
/// strings. Any other value under those keys, `null` included, stays in
/// `extra` so the document is written back as it was read.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Relation tag (never empty)
    pub rel: String,

    /// Target URL or path (never empty)
    pub href: String,

    /// Media type hint for the target
    pub media_type: Option<String>,

    /// Human-readable label
    pub title: Option<String>,

    /// Any other keys found on the link object, kept for the round trip
    pub extra: Map<String, Value>,
}

impl Link {
    /// Create a link with a relation and target.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Empty`] if either argument is empty.
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Result<Self, LinkError> {
        let link = Self {
            rel: rel.into(),
            href: href.into(),
            media_type: None,
            title: None,
            extra: Map::new(),
        };
        link.validate()?;
        Ok(link)
    }

    /// Set the media type.
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.extra.shift_remove(TYPE_KEY);
        self.media_type = Some(media_type.into());
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.extra.shift_remove(TITLE_KEY);
        self.title = Some(title.into());
        self
    }

    /// Parse a link from a JSON object.
    ///
    /// # Errors
    ///
    /// - [`LinkError::Malformed`] if `value` is not an object, or `rel` or
    ///   `href` is missing or not a string
    /// - [`LinkError::Empty`] if `rel` or `href` is empty
    pub fn from_value(value: Value) -> Result<Self, LinkError> {
        let mut obj = match value {
            Value::Object(obj) => obj,
            other => {
                return Err(LinkError::Malformed(format!(
                    "expected a link object, got {}",
                    other
                )))
            }
        };

        let rel = take_required(&mut obj, REL_KEY)?;
        let href = take_required(&mut obj, HREF_KEY)?;
        let media_type = take_if_string(&mut obj, TYPE_KEY);
        let title = take_if_string(&mut obj, TITLE_KEY);

        let link = Self {
            rel,
            href,
            media_type,
            title,
            extra: obj,
        };
        link.validate()?;
        Ok(link)
    }

    /// Materialize the link as a JSON object.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert(REL_KEY.into(), Value::String(self.rel.clone()));
        obj.insert(HREF_KEY.into(), Value::String(self.href.clone()));
        if let Some(t) = &self.media_type {
            obj.insert(TYPE_KEY.into(), Value::String(t.clone()));
        }
        if let Some(t) = &self.title {
            obj.insert(TITLE_KEY.into(), Value::String(t.clone()));
        }
        for (k, v) in &self.extra {
            obj.insert(k.clone(), v.clone());
        }
        Value::Object(obj)
    }

    /// Whether this link is one of [`HIERARCHY_RELATIONS`].
    pub fn is_hierarchy(&self) -> bool {
        HIERARCHY_RELATIONS.contains(&self.rel.as_str())
    }

    fn validate(&self) -> Result<(), LinkError> {
        if self.rel.is_empty() {
            return Err(LinkError::Empty("rel"));
        }
        if self.href.is_empty() {
            return Err(LinkError::Empty("href"));
        }
        Ok(())
    }
}

fn take_required(obj: &mut Map<String, Value>, key: &'static str) -> Result<String, LinkError> {
    match obj.shift_remove(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(LinkError::Malformed(format!(
            "'{}' must be a string, got {}",
            key, other
        ))),
        None => Err(LinkError::Malformed(format!("missing '{}'", key))),
    }
}

/// Remove `key` only if it holds a string; other values are left in place.
fn take_if_string(obj: &mut Map<String, Value>, key: &str) -> Option<String> {
    if !obj.get(key).is_some_and(Value::is_string) {
        return None;
    }
    match obj.shift_remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

/// Ordered sequence of links owned by one entity.
///
/// Not synchronized; an entity and its store are used from one thread at a
/// time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkStore {
    links: Vec<Link>,
}

impl LinkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from the `links` array of a document.
    ///
    /// # Errors
    ///
    /// Fails on the first element that is not a valid link object.
    pub fn from_values(values: Vec<Value>) -> Result<Self, LinkError> {
        let links = values
            .into_iter()
            .map(Link::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { links })
    }

    /// All links, or only those whose relation equals `relation`.
    pub fn links(&self, relation: Option<&str>) -> Vec<&Link> {
        match relation {
            Some(r) => self.links.iter().filter(|l| l.rel == r).collect(),
            None => self.links.iter().collect(),
        }
    }

    /// First link with the given relation.
    pub fn first(&self, relation: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.rel == relation)
    }

    /// Number of links with the given relation.
    pub fn count(&self, relation: &str) -> usize {
        self.links.iter().filter(|l| l.rel == relation).count()
    }

    /// Append a link.
    pub fn push(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Remove every link with the given relation, returning how many went.
    pub fn remove_relation(&mut self, relation: &str) -> usize {
        let before = self.links.len();
        self.links.retain(|l| l.rel != relation);
        before - self.links.len()
    }

    /// Remove every `self`, `parent`, `root` and `child` link.
    ///
    /// Returns how many links were removed. All other relations are kept in
    /// their original order.
    pub fn clean_hierarchy(&mut self) -> usize {
        let before = self.links.len();
        self.links.retain(|l| !l.is_hierarchy());
        before - self.links.len()
    }

    /// Iterate over links in order.
    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Materialize the store as a JSON array.
    pub fn to_value(&self) -> Value {
        Value::Array(self.links.iter().map(Link::to_value).collect())
    }
}
