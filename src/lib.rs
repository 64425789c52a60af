//! stacgraph - Link-graph object model for spatiotemporal asset catalogs
//!
//! A catalog is a tree of JSON documents joined by typed links (`root`,
//! `parent`, `child`, `item`, `self`, ...). This crate loads documents from
//! disk or a remote endpoint, exposes their properties and links, resolves
//! their place in the hierarchy one hop at a time, strips and rebuilds
//! hierarchy links when a document moves, and writes documents back out.
//!
//! # Architecture
//!
//! - [`core`] - Documents, links, hierarchy resolution, persistence, config
//! - [`remote`] - Transport for remote reads (HTTP and mock)
//! - [`ui`] - Output helpers for the command line
//! - [`cli`] - The `stg` command-line tool
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use stacgraph::core::Loader;
//! use stacgraph::remote::HttpTransport;
//!
//! let loader = Loader::new(HttpTransport::new().unwrap());
//! let mut item = loader.open("cat/a.json").unwrap();
//!
//! if let Some(parent) = item.parent(&loader).unwrap() {
//!     println!("parent: {}", parent);
//! }
//!
//! item.clean_hierarchy();
//! item.save(Some(Path::new("cat2/a.json"))).unwrap();
//! ```

pub mod cli;
pub mod core;
pub mod remote;
pub mod ui;
