//! core::target
//!
//! Where a link points, once its `href` has been resolved.
//!
//! # Resolution Policy
//!
//! - `http`/`https` URLs and absolute filesystem paths are used as-is.
//! - `file://` URLs become local paths.
//! - Relative targets are joined against the directory of the entity's
//!   local path when it has one, otherwise against its remote origin URL.
//! - A relative target on an entity with neither is unresolvable.
//! - Scheme-relative targets (`//host/x.json`) take the origin's scheme when
//!   the entity has an origin.
//! - A join against the origin must land on `http`/`https`; anything else
//!   is unresolvable.
//!
//! Catalogs move between a local layout and a hosted one, so the same
//! relative `href` must work in both places.

use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::Url;

use super::error::CatalogError;

/// A resolved location for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A local file.
    Path(PathBuf),
    /// A remote `http`/`https` URL.
    Url(Url),
}

impl Target {
    /// Interpret a user-supplied source (a CLI argument, say).
    ///
    /// Same as [`Target::absolute`], except relative strings are taken as
    /// paths relative to the working directory.
    pub fn from_source(source: &str) -> Result<Self, CatalogError> {
        match Self::absolute(source)? {
            Some(t) => Ok(t),
            None => Ok(Target::Path(PathBuf::from(source))),
        }
    }

    /// Parse `href` if it is absolute; `Ok(None)` if it is relative.
    pub fn absolute(href: &str) -> Result<Option<Self>, CatalogError> {
        if let Ok(url) = Url::parse(href) {
            match url.scheme() {
                "http" | "https" => return Ok(Some(Target::Url(url))),
                "file" => {
                    let path = url.to_file_path().map_err(|_| CatalogError::UnresolvedLink {
                        href: href.to_string(),
                        reason: "file URL does not name a local path".into(),
                    })?;
                    return Ok(Some(Target::Path(path)));
                }
                // Windows drive letters parse as one-letter schemes.
                _ => {}
            }
        }

        let path = Path::new(href);
        if path.is_absolute() {
            return Ok(Some(Target::Path(path.to_path_buf())));
        }
        Ok(None)
    }

    /// Resolve `href` against an entity's location.
    ///
    /// `path` is the entity's local file, `origin` the URL it was fetched
    /// from. The local path takes precedence when both are present.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnresolvedLink`] if `href` is relative and
    /// there is no base to join it against, or the URL join fails or leaves
    /// `http`/`https`.
    pub fn resolve(
        href: &str,
        path: Option<&Path>,
        origin: Option<&Url>,
    ) -> Result<Self, CatalogError> {
        if let Some(origin) = origin.filter(|_| href.starts_with("//")) {
            return join_origin(origin, href);
        }

        if let Some(t) = Self::absolute(href)? {
            return Ok(t);
        }

        if let Some(path) = path {
            let dir = path.parent().unwrap_or_else(|| Path::new(""));
            return Ok(Target::Path(dir.join(href)));
        }

        if let Some(origin) = origin {
            return join_origin(origin, href);
        }

        Err(CatalogError::UnresolvedLink {
            href: href.to_string(),
            reason: "relative target on an entity with no location".into(),
        })
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Target::Url(_))
    }
}

fn join_origin(origin: &Url, href: &str) -> Result<Target, CatalogError> {
    let unresolved = |reason: String| CatalogError::UnresolvedLink {
        href: href.to_string(),
        reason,
    };

    let url = origin.join(href).map_err(|e| unresolved(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(Target::Url(url)),
        other => Err(unresolved(format!(
            "joined target has unsupported scheme '{}'",
            other
        ))),
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Path(p) => write!(f, "{}", p.display()),
            Target::Url(u) => write!(f, "{}", u),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn http_url_is_absolute() {
        let t = Target::resolve("https://example.com/cat/root.json", None, None).unwrap();
        assert_eq!(t, Target::Url(url("https://example.com/cat/root.json")));
        assert!(t.is_remote());
    }

    #[cfg(unix)]
    #[test]
    fn absolute_path_used_as_is() {
        let t = Target::resolve(
            "/cat/root.json",
            Some(Path::new("/elsewhere/a.json")),
            None,
        )
        .unwrap();
        assert_eq!(t, Target::Path(PathBuf::from("/cat/root.json")));
    }

    #[cfg(unix)]
    #[test]
    fn file_url_becomes_path() {
        let t = Target::resolve("file:///cat/root.json", None, None).unwrap();
        assert_eq!(t, Target::Path(PathBuf::from("/cat/root.json")));
    }

    #[test]
    fn relative_joined_to_path_dir() {
        let t = Target::resolve("../root.json", Some(Path::new("cat/sub/a.json")), None).unwrap();
        assert_eq!(t, Target::Path(PathBuf::from("cat/sub/../root.json")));
    }

    #[test]
    fn relative_to_bare_filename() {
        let t = Target::resolve("b.json", Some(Path::new("a.json")), None).unwrap();
        assert_eq!(t, Target::Path(PathBuf::from("b.json")));
    }

    #[test]
    fn relative_joined_to_origin() {
        let origin = url("https://example.com/cat/sub/a.json");
        let t = Target::resolve("../root.json", None, Some(&origin)).unwrap();
        assert_eq!(t, Target::Url(url("https://example.com/cat/root.json")));
    }

    #[test]
    fn path_wins_over_origin() {
        let origin = url("https://example.com/cat/a.json");
        let t = Target::resolve("b.json", Some(Path::new("local/a.json")), Some(&origin)).unwrap();
        assert_eq!(t, Target::Path(PathBuf::from("local/b.json")));
    }

    #[test]
    fn scheme_relative_takes_origin_scheme() {
        let origin = url("https://example.com/cat/a.json");
        let t = Target::resolve("//mirror.example.org/cat/root.json", None, Some(&origin))
            .unwrap();
        assert_eq!(
            t,
            Target::Url(url("https://mirror.example.org/cat/root.json"))
        );
    }

    #[test]
    fn scheme_relative_uses_origin_even_with_path() {
        let origin = url("http://example.com/cat/a.json");
        let t = Target::resolve(
            "//cdn.example.com/b.json",
            Some(Path::new("local/a.json")),
            Some(&origin),
        )
        .unwrap();
        assert_eq!(t, Target::Url(url("http://cdn.example.com/b.json")));
    }

    #[test]
    fn join_to_foreign_scheme_rejected() {
        let origin = url("https://example.com/cat/a.json");
        let err = Target::resolve("s2a:2020.json", None, Some(&origin)).unwrap_err();
        assert!(matches!(err, CatalogError::UnresolvedLink { .. }));
    }

    #[test]
    fn relative_without_base_fails() {
        let err = Target::resolve("b.json", None, None).unwrap_err();
        assert!(matches!(err, CatalogError::UnresolvedLink { .. }));
    }

    #[test]
    fn from_source_relative_is_path() {
        assert_eq!(
            Target::from_source("cat/a.json").unwrap(),
            Target::Path(PathBuf::from("cat/a.json"))
        );
        assert!(Target::from_source("http://example.com/a.json")
            .unwrap()
            .is_remote());
    }

    #[test]
    fn display() {
        let t = Target::Url(url("https://example.com/a.json"));
        assert_eq!(t.to_string(), "https://example.com/a.json");
    }
}
