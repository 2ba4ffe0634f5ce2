//! File providers: where catalog text comes from.
//!
//! Paths are relative, `/`-separated strings. The empty string is the root.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_dir: false }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_dir: true }
    }
}

/// Read-only access to a tree of text files.
pub trait FileProvider {
    /// List a directory. Entries come back sorted by name.
    fn list_dir(&self, dir: &str) -> io::Result<Vec<DirEntry>>;

    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &str) -> io::Result<String>;

    /// Human-readable description of the root, for logs and errors.
    fn describe(&self) -> String;
}

/// Join two relative paths.
pub fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir.trim_end_matches('/'), name)
    }
}

/// Provider backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct FsProvider {
    root: PathBuf,
}

impl FsProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, rel: &str) -> PathBuf {
        rel.split('/')
            .filter(|s| !s.is_empty())
            .fold(self.root.clone(), |acc, seg| acc.join(seg))
    }
}

impl FileProvider for FsProvider {
    fn list_dir(&self, dir: &str) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(self.resolve(dir))? {
            let entry = entry?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                // Non-UTF-8 names can't be topic folders or documents
                Err(_) => continue,
            };
            let is_dir = entry.file_type()?.is_dir();
            entries.push(DirEntry { name, is_dir });
        }
        entries.sort();
        Ok(entries)
    }

    fn read_to_string(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(self.resolve(path))
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Provider backed by an in-memory map of path → contents.
///
/// Directories are implied by file paths; [`MemoryProvider::with_dir`] adds
/// empty ones.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    files: BTreeMap<String, String>,
    dirs: BTreeSet<String>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn with_dir(mut self, path: impl Into<String>) -> Self {
        self.dirs.insert(path.into().trim_end_matches('/').to_string());
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    fn all_paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().chain(self.dirs.iter()).map(String::as_str)
    }
}

impl FileProvider for MemoryProvider {
    fn list_dir(&self, dir: &str) -> io::Result<Vec<DirEntry>> {
        let dir = dir.trim_end_matches('/');
        let prefix = if dir.is_empty() { String::new() } else { format!("{}/", dir) };

        let mut found = dir.is_empty() || self.dirs.contains(dir);
        let mut entries = BTreeSet::new();
        for path in self.all_paths() {
            let Some(rest) = path.strip_prefix(&prefix) else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }
            found = true;
            match rest.split_once('/') {
                Some((head, _)) => entries.insert(DirEntry::dir(head)),
                None if self.dirs.contains(path) => entries.insert(DirEntry::dir(rest)),
                None => entries.insert(DirEntry::file(rest)),
            };
        }

        if !found {
            return Err(io::Error::new(io::ErrorKind::NotFound, format!("no such directory: {}", dir)));
        }
        Ok(entries.into_iter().collect())
    }

    fn read_to_string(&self, path: &str) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no such file: {}", path)))
    }

    fn describe(&self) -> String {
        format!("<memory: {} files>", self.files.len())
    }
}
