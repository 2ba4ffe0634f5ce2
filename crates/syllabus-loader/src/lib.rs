//! Syllabus Catalog Loader
//!
//! Reads a tree of numbered topic folders into a [`Catalog`]:
//!
//! ```text
//! concepts/
//! ├── README.md                 table of contents (not a topic)
//! ├── 01-routing/
//! │   ├── README.md             title, header labels, overview, links
//! │   ├── dynamic-routes.md     guide
//! │   └── examples/
//! │       ├── README.md         optional descriptions
//! │       └── page.md           example bundle
//! └── 13-middleware/ ...
//! ```
//!
//! The loader is tolerant: a bad folder name or a missing README costs one
//! node and one issue. Only an unreadable root or two folders sharing an id
//! abort the load.
//!
//! # Example
//!
//! ```no_run
//! use syllabus_loader::{load_dir, LoaderOptions};
//!
//! let loaded = load_dir("./docs", &LoaderOptions::default())?;
//! for issue in &loaded.issues {
//!     eprintln!("{}", issue);
//! }
//! println!("{} topics", loaded.catalog.topics.len());
//! # Ok::<(), syllabus_loader::LoadError>(())
//! ```

mod error;
mod examples;
mod folder;
mod header;
mod links;
mod loader;
mod provider;

pub use error::{LoadError, Result};
pub use folder::{FolderNames, FOLDER_PATTERN};
pub use header::{scan_readme, HeaderScan};
pub use links::{DocumentLinks, LinkScanner, LinkTarget};
pub use loader::{CatalogLoader, Loaded, LoaderOptions};
pub use provider::{DirEntry, FileProvider, FsProvider, MemoryProvider};

use std::path::Path;
use syllabus_model::Catalog;

/// Load a catalog from a directory on disk.
pub fn load_dir<P: AsRef<Path>>(root: P, options: &LoaderOptions) -> Result<Loaded> {
    CatalogLoader::new(FsProvider::new(root), options.clone())?.load()
}

/// Load a catalog from any provider.
pub fn load_with<F: FileProvider>(provider: F, options: &LoaderOptions) -> Result<Loaded> {
    CatalogLoader::new(provider, options.clone())?.load()
}

/// Convenience for callers that only want the catalog and accept losing the issues.
pub fn load_catalog<P: AsRef<Path>>(root: P) -> Result<Catalog> {
    load_dir(root, &LoaderOptions::default()).map(|loaded| loaded.catalog)
}
