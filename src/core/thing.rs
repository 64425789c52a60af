//! core::thing
//!
//! The in-memory form of one catalog document.
//!
//! # Representation
//!
//! A [`Thing`] holds the parsed document body as a JSON object. The `links`
//! array is lifted out into a [`LinkStore`] at construction (an absent
//! array becomes an empty store) and put back whenever the document is
//! materialized with [`Thing::to_value`]. Everything else stays in the map
//! exactly as parsed.
//!
//! The store is the only source of truth for `links`. A JSON mirror of it is
//! refreshed on every link edit so that top-level lookups of `links` answer
//! from the store, the same as `to_value` does.
//!
//! # Location
//!
//! A thing remembers the local file it was read from or saved to, and the
//! URL it was fetched from if it came from a remote endpoint. Both feed the
//! relative link resolution in [`crate::core::hierarchy`].
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use stacgraph::core::thing::Thing;
//!
//! let mut thing = Thing::new(
//!     json!({"id": "scene-1", "properties": {"datetime": "2020-01-01T00:00:00Z"}}),
//!     None,
//! )
//! .unwrap();
//!
//! assert_eq!(thing.id().unwrap(), "scene-1");
//! assert_eq!(thing.get("datetime").unwrap(), "2020-01-01T00:00:00Z");
//! assert_eq!(thing.get("id").unwrap(), "scene-1");
//!
//! thing.add_link("self", "/cat/scene-1.json", None, None).unwrap();
//! assert_eq!(thing.links(Some("self")).len(), 1);
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::Url;
use serde_json::{Map, Value};

use super::error::{CatalogError, KeyError};
use super::link::{Link, LinkError, LinkStore};

const LINKS_KEY: &str = "links";
const PROPERTIES_KEY: &str = "properties";

/// One catalog document.
#[derive(Debug, Clone)]
pub struct Thing {
    /// Document body without `links`
    data: Map<String, Value>,
    /// Links lifted out of the body, in document order
    links: LinkStore,
    /// `links` materialized as JSON, kept in step with the store
    links_json: Value,
    /// Local file this document was read from or last saved to
    path: Option<PathBuf>,
    /// URL this document was fetched from
    origin: Option<Url>,
}

impl Thing {
    /// Create a thing from a parsed JSON value.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotAnObject`] if `data` is not a JSON object
    /// - [`CatalogError::InvalidLink`] if `links` is present but malformed
    pub fn new(data: Value, filename: Option<PathBuf>) -> Result<Self, CatalogError> {
        match data {
            Value::Object(map) => Self::from_map(map, filename),
            _ => Err(CatalogError::NotAnObject(describe(filename.as_deref()))),
        }
    }

    /// Create a thing from a JSON object map.
    pub fn from_map(
        mut data: Map<String, Value>,
        filename: Option<PathBuf>,
    ) -> Result<Self, CatalogError> {
        let links = match data.shift_remove(LINKS_KEY) {
            None | Some(Value::Null) => LinkStore::new(),
            Some(Value::Array(values)) => LinkStore::from_values(values)?,
            Some(_) => {
                return Err(LinkError::Malformed("'links' must be an array".into()).into());
            }
        };

        Ok(Self {
            data,
            links_json: links.to_value(),
            links,
            path: filename,
            origin: None,
        })
    }

    /// Record the URL this thing was fetched from.
    pub(crate) fn with_origin(mut self, origin: Url) -> Self {
        self.origin = Some(origin);
        self
    }

    /// The document's `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingId`] if `id` is absent or not a string.
    pub fn id(&self) -> Result<&str, CatalogError> {
        self.data
            .get("id")
            .and_then(Value::as_str)
            .ok_or(CatalogError::MissingId)
    }

    /// Look up `key` in `properties` first, then at the top level.
    ///
    /// A top-level `links` lookup returns the current link store as a JSON
    /// array.
    pub fn get(&self, key: &str) -> Result<&Value, KeyError> {
        self.properties()
            .and_then(|props| props.get(key))
            .or_else(|| self.top_level(key))
            .ok_or_else(|| KeyError(key.to_string()))
    }

    fn top_level(&self, key: &str) -> Option<&Value> {
        if key == LINKS_KEY {
            Some(&self.links_json)
        } else {
            self.data.get(key)
        }
    }

    /// The nested `properties` object, if the document has one.
    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.data.get(PROPERTIES_KEY).and_then(Value::as_object)
    }

    pub fn properties_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.data
            .get_mut(PROPERTIES_KEY)
            .and_then(Value::as_object_mut)
    }

    /// The top-level document body, without `links`.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Mutable access to the body.
    ///
    /// A `links` key inserted here is shadowed by the link store: neither
    /// [`Thing::get`] nor [`Thing::to_value`] reads it.
    pub fn data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.data
    }

    /// Local file path, if this thing has ever been associated with one.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub(crate) fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    /// URL this thing was fetched from, if it was loaded remotely.
    pub fn origin(&self) -> Option<&Url> {
        self.origin.as_ref()
    }

    /// All links, or only those with the given relation, in store order.
    pub fn links(&self, relation: Option<&str>) -> Vec<&Link> {
        self.links.links(relation)
    }

    /// First link with the given relation.
    pub fn first_link(&self, relation: &str) -> Option<&Link> {
        self.links.first(relation)
    }

    pub fn link_store(&self) -> &LinkStore {
        &self.links
    }

    /// Append a link. Nothing is de-duplicated.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidLink`] if `rel` or `href` is empty.
    pub fn add_link(
        &mut self,
        rel: &str,
        href: &str,
        media_type: Option<&str>,
        title: Option<&str>,
    ) -> Result<(), CatalogError> {
        let mut link = Link::new(rel, href)?;
        if let Some(t) = media_type {
            link = link.with_media_type(t);
        }
        if let Some(t) = title {
            link = link.with_title(t);
        }
        self.links.push(link);
        self.sync_links();
        Ok(())
    }

    /// Remove all links with the given relation; returns how many went.
    pub fn remove_links(&mut self, rel: &str) -> usize {
        let removed = self.links.remove_relation(rel);
        self.sync_links();
        removed
    }

    /// Strip `self`, `parent`, `root` and `child` links before a move or
    /// republish. Returns how many links were removed.
    pub fn clean_hierarchy(&mut self) -> usize {
        let removed = self.links.clean_hierarchy();
        self.sync_links();
        removed
    }

    fn sync_links(&mut self) {
        self.links_json = self.links.to_value();
    }

    /// Materialize the full document, `links` included.
    pub fn to_value(&self) -> Value {
        let mut map = self.data.clone();
        map.insert(LINKS_KEY.into(), self.links_json.clone());
        Value::Object(map)
    }
}

impl fmt::Display for Thing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id().unwrap_or("<no id>");
        match (&self.path, &self.origin) {
            (Some(p), _) => write!(f, "{} ({})", id, p.display()),
            (None, Some(u)) => write!(f, "{} ({})", id, u),
            (None, None) => write!(f, "{}", id),
        }
    }
}

/// Things are the same document when their ids match.
impl PartialEq for Thing {
    fn eq(&self, other: &Self) -> bool {
        match (self.id(), other.id()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

fn describe(path: Option<&Path>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "in-memory document".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn thing(value: Value) -> Thing {
        Thing::new(value, None).unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn non_object_rejected() {
            let err = Thing::new(json!([1, 2, 3]), None).unwrap_err();
            assert!(matches!(err, CatalogError::NotAnObject(_)));
        }

        #[test]
        fn missing_links_normalized() {
            let t = thing(json!({"id": "a"}));
            assert!(t.links(None).is_empty());
            assert_eq!(t.to_value()["links"], json!([]));
        }

        #[test]
        fn null_links_normalized() {
            let t = thing(json!({"id": "a", "links": null}));
            assert!(t.link_store().is_empty());
        }

        #[test]
        fn links_not_array_rejected() {
            let err = Thing::new(json!({"id": "a", "links": {"rel": "self"}}), None).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidLink(_)));
        }

        #[test]
        fn malformed_link_rejected() {
            let err = Thing::new(json!({"id": "a", "links": [{"href": "x"}]}), None).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidLink(_)));
        }

        #[test]
        fn filename_recorded() {
            let t = Thing::new(json!({"id": "a"}), Some(PathBuf::from("cat/a.json"))).unwrap();
            assert_eq!(t.path(), Some(Path::new("cat/a.json")));
            assert!(t.origin().is_none());
        }

        #[test]
        fn in_memory_has_no_path() {
            assert!(thing(json!({"id": "a"})).path().is_none());
        }
    }

    mod identity {
        use super::*;

        #[test]
        fn id_present() {
            assert_eq!(thing(json!({"id": "X"})).id().unwrap(), "X");
        }

        #[test]
        fn id_absent() {
            assert!(matches!(
                thing(json!({"type": "Catalog"})).id(),
                Err(CatalogError::MissingId)
            ));
        }

        #[test]
        fn id_not_a_string() {
            assert!(matches!(
                thing(json!({"id": 7})).id(),
                Err(CatalogError::MissingId)
            ));
        }

        #[test]
        fn equality_by_id() {
            let a = thing(json!({"id": "a", "title": "one"}));
            let b = thing(json!({"id": "a", "title": "two"}));
            let c = thing(json!({"id": "c"}));
            let anon = thing(json!({}));
            assert_eq!(a, b);
            assert_ne!(a, c);
            assert_ne!(anon.clone(), anon);
        }

        #[test]
        fn display_forms() {
            let t = Thing::new(json!({"id": "a"}), Some(PathBuf::from("cat/a.json"))).unwrap();
            assert_eq!(t.to_string(), "a (cat/a.json)");

            let remote = thing(json!({"id": "r"}))
                .with_origin(Url::parse("https://example.com/r.json").unwrap());
            assert_eq!(remote.to_string(), "r (https://example.com/r.json)");

            assert_eq!(thing(json!({"id": "m"})).to_string(), "m");
            assert_eq!(thing(json!({})).to_string(), "<no id>");
        }
    }

    mod lookup {
        use super::*;

        #[test]
        fn properties_first() {
            let t = thing(json!({
                "id": "a",
                "datetime": "top",
                "properties": {"datetime": "nested"}
            }));
            assert_eq!(t.get("datetime").unwrap(), "nested");
        }

        #[test]
        fn falls_back_to_top_level() {
            let t = thing(json!({"id": "a", "properties": {"eo:bands": []}}));
            assert_eq!(t.get("id").unwrap(), "a");
        }

        #[test]
        fn without_properties_object() {
            let t = thing(json!({"id": "a", "properties": "odd"}));
            assert_eq!(t.get("properties").unwrap(), "odd");
            assert!(t.properties().is_none());
        }

        #[test]
        fn miss_is_key_error() {
            let t = thing(json!({"id": "a", "properties": {}}));
            assert_eq!(t.get("gsd"), Err(KeyError("gsd".into())));
        }

        #[test]
        fn links_reachable_by_key() {
            let t = thing(json!({"id": "a", "links": [{"rel": "self", "href": "a.json"}]}));
            assert_eq!(
                t.get("links").unwrap(),
                &json!([{"rel": "self", "href": "a.json"}])
            );
        }

        #[test]
        fn links_by_key_follow_edits() {
            let mut t = thing(json!({"id": "a"}));
            assert_eq!(t.get("links").unwrap(), &json!([]));

            t.add_link("child", "b.json", None, None).unwrap();
            assert_eq!(
                t.get("links").unwrap(),
                &json!([{"rel": "child", "href": "b.json"}])
            );

            t.clean_hierarchy();
            assert_eq!(t.get("links").unwrap(), &json!([]));
        }

        #[test]
        fn links_in_properties_win() {
            let t = thing(json!({"id": "a", "properties": {"links": "nested"}}));
            assert_eq!(t.get("links").unwrap(), "nested");
        }

        #[test]
        fn links_written_through_data_mut_are_shadowed() {
            let mut t = thing(json!({"id": "a", "links": [{"rel": "item", "href": "i.json"}]}));
            t.data_mut().insert("links".into(), json!("bogus"));

            let expected = json!([{"rel": "item", "href": "i.json"}]);
            assert_eq!(t.get("links").unwrap(), &expected);
            assert_eq!(t.to_value()["links"], expected);
        }

        #[test]
        fn edit_properties() {
            let mut t = thing(json!({"id": "a", "properties": {}}));
            t.properties_mut()
                .unwrap()
                .insert("gsd".into(), json!(10));
            assert_eq!(t.get("gsd").unwrap(), 10);
            assert_eq!(t.to_value()["properties"]["gsd"], json!(10));
        }
    }

    mod links {
        use super::*;

        #[test]
        fn first_link_in_store_order() {
            let t = thing(json!({"id": "a", "links": [
                {"rel": "parent", "href": "one.json"},
                {"rel": "parent", "href": "two.json"}
            ]}));
            assert_eq!(t.first_link("parent").unwrap().href, "one.json");
            assert!(t.first_link("root").is_none());
        }

        #[test]
        fn add_link_appends_in_order() {
            let mut t = thing(json!({"id": "a"}));
            t.add_link("child", "b.json", None, None).unwrap();
            t.add_link("item", "c.json", Some("application/geo+json"), Some("C"))
                .unwrap();
            let links = t.links(None);
            assert_eq!(links[0].rel, "child");
            assert_eq!(links[1].rel, "item");
            assert_eq!(links[1].media_type.as_deref(), Some("application/geo+json"));
            assert_eq!(links[1].title.as_deref(), Some("C"));
        }

        #[test]
        fn add_link_rejects_empty() {
            let mut t = thing(json!({"id": "a"}));
            assert!(t.add_link("", "b.json", None, None).is_err());
            assert!(t.add_link("child", "", None, None).is_err());
            assert!(t.links(None).is_empty());
        }

        #[test]
        fn replace_singular_relation() {
            let mut t = thing(json!({"id": "a"}));
            t.add_link("self", "/old/a.json", None, None).unwrap();
            assert_eq!(t.remove_links("self"), 1);
            t.add_link("self", "/new/a.json", None, None).unwrap();
            assert_eq!(t.links(Some("self"))[0].href, "/new/a.json");
        }

        #[test]
        fn clean_then_materialize() {
            let mut t = thing(json!({
                "id": "a",
                "links": [
                    {"rel": "self", "href": "/cat/a.json"},
                    {"rel": "item", "href": "i.json"},
                    {"rel": "parent", "href": "/cat/root.json"}
                ]
            }));
            assert_eq!(t.clean_hierarchy(), 2);
            assert_eq!(
                t.to_value()["links"],
                json!([{"rel": "item", "href": "i.json"}])
            );
        }

        #[test]
        fn data_mut_links_key_ignored() {
            let mut t = thing(json!({"id": "a"}));
            t.data_mut().insert("links".into(), json!([{"rel": "x", "href": "y"}]));
            assert_eq!(t.to_value()["links"], json!([]));
        }
    }
}
