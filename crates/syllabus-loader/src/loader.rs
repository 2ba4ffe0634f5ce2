//! The catalog loader.
//!
//! Loading is a single read-only pass:
//!
//! 1. List the concepts directory and parse folder names. Malformed names are
//!    reported and skipped.
//! 2. Reject the whole load if two folders share an id.
//! 3. For each folder read the README (missing → node skipped), its guides
//!    and its example bundles.
//!
//! Nothing is validated across nodes here; that is the checker's job.

use crate::error::{LoadError, Result};
use crate::examples::{display_language, fallback_description, index_descriptions, is_example_file};
use crate::folder::FolderNames;
use crate::header::{first_heading, scan_readme};
use crate::links::LinkScanner;
use crate::provider::{join, DirEntry, FileProvider};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use syllabus_model::{
    Catalog, ExampleBundle, GuideDocument, IssueKind, Subject, TopicId, TopicNode, TopicRef,
    ValidationIssue, README,
};
use tracing::{debug, info, warn};

/// Where the loader looks for things.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Directory holding the topic folders, relative to the root.
    /// When absent the root itself is scanned.
    pub concepts_dir: String,

    /// Name of each topic's index document
    pub readme_name: String,

    /// Name of each topic's snippet folder
    pub examples_dir: String,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            concepts_dir: "concepts".to_string(),
            readme_name: README.to_string(),
            examples_dir: "examples".to_string(),
        }
    }
}

/// A loaded catalog plus everything that was skipped or defaulted on the way.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    pub catalog: Catalog,
    pub issues: Vec<ValidationIssue>,
}

impl Loaded {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ValidationIssue::is_error)
    }
}

/// Loads a [`Catalog`] from a [`FileProvider`].
pub struct CatalogLoader<P> {
    provider: P,
    options: LoaderOptions,
    folders: FolderNames,
    links: LinkScanner,
}

impl<P: FileProvider> CatalogLoader<P> {
    pub fn new(provider: P, options: LoaderOptions) -> Result<Self> {
        let folders = FolderNames::new()?;
        let links = LinkScanner::new(folders.clone())?;
        Ok(Self {
            provider,
            options,
            folders,
            links,
        })
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Read the whole tree.
    pub fn load(&self) -> Result<Loaded> {
        let (base, entries) = self.list_concepts()?;
        let mut loaded = Loaded::default();

        let topics = self.collect_folders(&base, &entries, &mut loaded.issues)?;
        for (topic, folder) in &topics {
            self.load_topic(topic, folder, &mut loaded);
        }

        loaded.catalog.sort();
        info!(
            root = %self.provider.describe(),
            topics = loaded.catalog.topics.len(),
            guides = loaded.catalog.guides.len(),
            examples = loaded.catalog.examples.len(),
            issues = loaded.issues.len(),
            "Catalog loaded"
        );
        Ok(loaded)
    }

    fn list_concepts(&self) -> Result<(String, Vec<DirEntry>)> {
        let dir = self.options.concepts_dir.trim_matches('/');
        if !dir.is_empty() {
            match self.provider.list_dir(dir) {
                Ok(entries) => return Ok((dir.to_string(), entries)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!("No {} directory, scanning root", dir);
                }
                Err(source) => {
                    return Err(LoadError::RootUnreadable {
                        path: join(&self.provider.describe(), dir),
                        source,
                    })
                }
            }
        }
        let entries = self.provider.list_dir("").map_err(|source| LoadError::RootUnreadable {
            path: self.provider.describe(),
            source,
        })?;
        Ok((String::new(), entries))
    }

    /// Parse folder names, report malformed ones, reject duplicate ids.
    fn collect_folders(
        &self,
        base: &str,
        entries: &[DirEntry],
        issues: &mut Vec<ValidationIssue>,
    ) -> Result<Vec<(TopicRef, String)>> {
        let mut by_id: BTreeMap<TopicId, String> = BTreeMap::new();
        let mut topics = Vec::new();

        for entry in entries.iter().filter(|e| e.is_dir && !e.name.starts_with('.')) {
            let folder = join(base, &entry.name);
            let Some(topic) = self.folders.parse(&entry.name) else {
                warn!("Skipping {}: not a NN-slug folder name", folder);
                issues.push(ValidationIssue::warning(
                    IssueKind::MalformedFolderName,
                    Subject::path(folder),
                    format!("folder name {:?} does not match NN-slug", entry.name),
                ));
                continue;
            };

            if let Some(first) = by_id.get(&topic.id) {
                return Err(LoadError::DuplicateId {
                    id: topic.id,
                    first: first.clone(),
                    second: folder,
                });
            }
            by_id.insert(topic.id, folder.clone());
            topics.push((topic, folder));
        }

        Ok(topics)
    }

    fn load_topic(&self, topic: &TopicRef, folder: &str, loaded: &mut Loaded) {
        let readme_path = join(folder, &self.options.readme_name);
        let text = match self.provider.read_to_string(&readme_path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Skipping {}: no {}", folder, self.options.readme_name);
                loaded.issues.push(ValidationIssue::error(
                    IssueKind::MissingReadme,
                    Subject::topic(topic.id),
                    format!("{} has no {}", folder, self.options.readme_name),
                ));
                return;
            }
            Err(e) => {
                warn!("Skipping {}: {}", folder, e);
                loaded.issues.push(ValidationIssue::error(
                    IssueKind::UnreadableEntry,
                    Subject::topic(topic.id),
                    format!("cannot read {}: {}", readme_path, e),
                ));
                return;
            }
        };

        let node = self.build_topic(topic, &readme_path, &text, &mut loaded.issues);
        debug!(topic = %node.id, slug = %node.slug, "Loaded topic");
        loaded.catalog.topics.push(node);

        let entries = match self.provider.list_dir(folder) {
            Ok(entries) => entries,
            Err(e) => {
                loaded.issues.push(ValidationIssue::error(
                    IssueKind::UnreadableEntry,
                    Subject::topic(topic.id),
                    format!("cannot list {}: {}", folder, e),
                ));
                return;
            }
        };

        for entry in entries.iter().filter(|e| !e.is_dir) {
            if entry.name.eq_ignore_ascii_case(&self.options.readme_name) || !entry.name.ends_with(".md") {
                continue;
            }
            self.load_guide(topic.id, folder, &entry.name, loaded);
        }

        if entries.iter().any(|e| e.is_dir && e.name == self.options.examples_dir) {
            self.load_examples(topic.id, &join(folder, &self.options.examples_dir), loaded);
        }
    }

    fn build_topic(
        &self,
        topic: &TopicRef,
        readme_path: &str,
        text: &str,
        issues: &mut Vec<ValidationIssue>,
    ) -> TopicNode {
        let scan = scan_readme(text);
        for note in scan.notes {
            issues.push(ValidationIssue::warning(IssueKind::MetadataParse, Subject::topic(topic.id), note));
        }

        let title = match scan.title {
            Some(title) => title,
            None => {
                issues.push(ValidationIssue::warning(
                    IssueKind::MissingTitle,
                    Subject::topic(topic.id),
                    format!("{} has no `# ` title; using the slug", readme_path),
                ));
                title_from_slug(&topic.slug)
            }
        };

        let links = self.links.scan(topic.id, text);
        let mut node = TopicNode::new(topic.id, topic.slug.clone(), title)
            .with_classification(scan.classification)
            .with_overview(scan.overview);
        node.related_topics = links.topics;
        node.related_guides = links.guides;
        node.authored_nav = links.nav;
        node.source = Some(readme_path.to_string());
        node
    }

    fn load_guide(&self, topic: TopicId, folder: &str, file: &str, loaded: &mut Loaded) {
        let path = join(folder, file);
        let slug = file.trim_end_matches(".md");
        let text = match self.provider.read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping guide {}: {}", path, e);
                loaded.issues.push(ValidationIssue::error(
                    IssueKind::UnreadableEntry,
                    Subject::path(path),
                    format!("cannot read guide: {}", e),
                ));
                return;
            }
        };

        let links = self.links.scan(topic, &text);
        let title = first_heading(&text).unwrap_or_else(|| title_from_slug(slug));
        let mut guide = GuideDocument::new(topic, slug, title);
        guide.related_topics = links.topics;
        guide.related_guides = links.guides;
        guide.body = text;
        debug!(topic = %topic, guide = %slug, "Loaded guide");
        loaded.catalog.guides.push(guide);
    }

    fn load_examples(&self, topic: TopicId, dir: &str, loaded: &mut Loaded) {
        let entries = match self.provider.list_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                loaded.issues.push(ValidationIssue::error(
                    IssueKind::UnreadableEntry,
                    Subject::path(dir.to_string()),
                    format!("cannot list examples: {}", e),
                ));
                return;
            }
        };

        let files: Vec<&str> = entries
            .iter()
            .filter(|e| !e.is_dir && is_example_file(&e.name) && !e.name.eq_ignore_ascii_case(&self.options.readme_name))
            .map(|e| e.name.as_str())
            .collect();

        let descriptions = match self.provider.read_to_string(&join(dir, &self.options.readme_name)) {
            Ok(index) => index_descriptions(&index, files.iter().copied()),
            Err(_) => BTreeMap::new(),
        };

        for file in files {
            let path = join(dir, file);
            let body = match self.provider.read_to_string(&path) {
                Ok(body) => body,
                Err(e) => {
                    warn!("Skipping example {}: {}", path, e);
                    loaded.issues.push(ValidationIssue::error(
                        IssueKind::UnreadableEntry,
                        Subject::Example { topic, filename: file.to_string() },
                        format!("cannot read example: {}", e),
                    ));
                    continue;
                }
            };
            let description = descriptions
                .get(file)
                .cloned()
                .unwrap_or_else(|| fallback_description(&body));
            let language = display_language(file, &body);
            loaded.catalog.examples.push(
                ExampleBundle::new(topic, file)
                    .with_description(description)
                    .with_body(language, body),
            );
        }
    }
}

/// `app-router` → `App Router`.
fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
