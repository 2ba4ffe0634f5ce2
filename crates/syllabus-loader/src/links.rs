//! Relative Markdown links turned into typed references.
//!
//! Documents link to each other with paths like `../13-middleware/README.md`
//! or `./caching.md`. Those strings are resolved here, once, into
//! [`TopicRef`]s and [`GuideRef`]s. Links sitting on a "Previous" / "Next"
//! line are collected separately as hand-authored navigation.

use crate::folder::FolderNames;
use regex::Regex;
use std::collections::BTreeSet;
use syllabus_model::{GuideRef, NavLinks, TopicId, TopicRef, README};

const LINK_PATTERN: &str = r#"\[([^\]]*)\]\(\s*<?([^)\s>]+)>?(?:\s+"[^"]*")?\s*\)"#;
/// `Previous:`, `Prev:` or `Next:` as a whole word, once emphasis markers are stripped.
const NAV_LABEL_PATTERN: &str = r"(?i)\b(prev|previous|next)\s*:";

/// What a single link target resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Topic(TopicRef),
    Guide(GuideRef),
    /// External URL, anchor, example file, asset or anything outside the catalog
    Other,
}

/// All catalog references found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentLinks {
    pub topics: BTreeSet<TopicRef>,
    pub guides: BTreeSet<GuideRef>,
    pub nav: NavLinks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavSide {
    Previous,
    Next,
}

/// Link extractor and resolver.
#[derive(Debug, Clone)]
pub struct LinkScanner {
    link: Regex,
    nav_label: Regex,
    folders: FolderNames,
}

impl LinkScanner {
    pub fn new(folders: FolderNames) -> Result<Self, regex::Error> {
        Ok(Self {
            link: Regex::new(LINK_PATTERN)?,
            nav_label: Regex::new(NAV_LABEL_PATTERN)?,
            folders,
        })
    }

    /// Resolve `target` as seen from a document inside topic `owner`'s folder.
    pub fn resolve(&self, owner: TopicId, target: &str) -> LinkTarget {
        let target = target.split(['#', '?']).next().unwrap_or_default();
        if target.is_empty() || target.contains("://") || target.starts_with("mailto:") || target.starts_with('/') {
            return LinkTarget::Other;
        }

        let segments: Vec<&str> = target.split('/').filter(|s| !s.is_empty() && *s != ".").collect();
        match segments.as_slice() {
            // Sibling document in the same topic folder
            [file] => match guide_slug(file) {
                Some(slug) => LinkTarget::Guide(GuideRef::new(owner, slug)),
                None => LinkTarget::Other,
            },
            // Another topic folder, or its README
            ["..", folder] => self.topic(folder),
            ["..", folder, file] if file.eq_ignore_ascii_case(README) => self.topic(folder),
            // A guide in another topic folder
            ["..", folder, file] => match (self.folders.parse(folder), guide_slug(file)) {
                (Some(topic), Some(slug)) => LinkTarget::Guide(GuideRef::new(topic.id, slug)),
                _ => LinkTarget::Other,
            },
            _ => LinkTarget::Other,
        }
    }

    fn topic(&self, folder: &str) -> LinkTarget {
        match self.folders.parse(folder) {
            Some(topic) => LinkTarget::Topic(topic),
            None => LinkTarget::Other,
        }
    }

    /// Scan a whole document.
    pub fn scan(&self, owner: TopicId, text: &str) -> DocumentLinks {
        let mut links = DocumentLinks::default();
        let mut in_fence = false;

        for line in text.lines() {
            if line.trim_start().starts_with("```") {
                in_fence = !in_fence;
                continue;
            }
            if in_fence {
                continue;
            }

            let nav_line = self.is_nav_line(line);
            let mut last_end = 0;
            let matches: Vec<_> = self.link.captures_iter(line).collect();
            for (i, caps) in matches.iter().enumerate() {
                let (Some(whole), Some(target)) = (caps.get(0), caps.get(2)) else {
                    continue;
                };
                let resolved = self.resolve(owner, target.as_str());
                let before = &line[last_end..whole.start()];
                last_end = whole.end();

                if nav_line {
                    let next_start = matches
                        .get(i + 1)
                        .and_then(|c| c.get(0))
                        .map_or(line.len(), |m| m.start());
                    let after = &line[whole.end()..next_start];
                    // A link with no side on a nav line is still a plain reference
                    if let (Some(side), LinkTarget::Topic(topic)) = (self.nav_side(before, after), &resolved) {
                        match side {
                            NavSide::Previous => links.nav.previous = Some(topic.clone()),
                            NavSide::Next => links.nav.next = Some(topic.clone()),
                        }
                        continue;
                    }
                }

                match resolved {
                    LinkTarget::Topic(topic) => {
                        links.topics.insert(topic);
                    }
                    LinkTarget::Guide(guide) => {
                        links.guides.insert(guide);
                    }
                    LinkTarget::Other => {}
                }
            }
        }

        links
    }
}

/// Guide slug for a Markdown file name, `None` for READMEs and non-Markdown.
fn guide_slug(file: &str) -> Option<&str> {
    if file.eq_ignore_ascii_case(README) {
        return None;
    }
    file.strip_suffix(".md")
}

fn strip_emphasis(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '*' | '_')).collect()
}

impl LinkScanner {
    /// A nav line carries a `Previous:`/`Next:` label, or starts with `←`
    /// or ends with `→`. Arrows in the middle of prose do not count.
    fn is_nav_line(&self, line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.starts_with('←') || trimmed.ends_with('→') || self.nav_label.is_match(&strip_emphasis(line))
    }

    /// Decide which side a nav link is on from the text between it and its
    /// neighbours: the closest label before it, else an arrow right next to it.
    fn nav_side(&self, before: &str, after: &str) -> Option<NavSide> {
        let label = self
            .nav_label
            .captures_iter(&strip_emphasis(before))
            .last()
            .and_then(|caps| caps.get(1))
            .map(|word| word.as_str().to_lowercase());
        match label.as_deref() {
            Some("next") => Some(NavSide::Next),
            Some(_) => Some(NavSide::Previous),
            None if before.trim_end().ends_with('←') => Some(NavSide::Previous),
            None if after.trim_start().starts_with('→') => Some(NavSide::Next),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> LinkScanner {
        LinkScanner::new(FolderNames::new().unwrap()).unwrap()
    }

    #[test]
    fn resolves_topic_links() {
        let s = scanner();
        let owner = TopicId(13);
        assert_eq!(s.resolve(owner, "../01-routing/README.md"), LinkTarget::Topic(TopicRef::new(1, "routing")));
        assert_eq!(s.resolve(owner, "../02-rendering/"), LinkTarget::Topic(TopicRef::new(2, "rendering")));
        assert_eq!(s.resolve(owner, "../02-rendering#streaming"), LinkTarget::Topic(TopicRef::new(2, "rendering")));
    }

    #[test]
    fn resolves_guide_links() {
        let s = scanner();
        let owner = TopicId(13);
        assert_eq!(s.resolve(owner, "./edge-runtime.md"), LinkTarget::Guide(GuideRef::new(13, "edge-runtime")));
        assert_eq!(s.resolve(owner, "matchers.md"), LinkTarget::Guide(GuideRef::new(13, "matchers")));
        assert_eq!(s.resolve(owner, "../04-caching/revalidation.md"), LinkTarget::Guide(GuideRef::new(4, "revalidation")));
    }

    #[test]
    fn ignores_non_catalog_links() {
        let s = scanner();
        let owner = TopicId(1);
        for target in [
            "https://nextjs.org/docs",
            "#overview",
            "README.md",
            "../README.md",
            "examples/page.md",
            "../7-image/README.md",
            "diagram.png",
            "mailto:docs@example.com",
        ] {
            assert_eq!(s.resolve(owner, target), LinkTarget::Other, "{}", target);
        }
    }

    #[test]
    fn nav_lines_are_kept_apart() {
        let text = "\
# Middleware

See [routing](../01-routing/README.md) and [matchers](./matchers.md).

---

← Previous: [Rendering](../02-rendering/README.md) | Next: [Caching](../14-caching/README.md) →
";
        let links = scanner().scan(TopicId(13), text);
        assert_eq!(links.topics.iter().cloned().collect::<Vec<_>>(), vec![TopicRef::new(1, "routing")]);
        assert_eq!(links.guides.len(), 1);
        assert_eq!(links.nav.previous, Some(TopicRef::new(2, "rendering")));
        assert_eq!(links.nav.next, Some(TopicRef::new(14, "caching")));
    }

    #[test]
    fn nav_on_separate_lines() {
        let text = "**Previous**: [Routing](../01-routing/README.md)\n**Next**: [Caching](../14-caching/)\n";
        let links = scanner().scan(TopicId(2), text);
        assert_eq!(links.nav.previous, Some(TopicRef::new(1, "routing")));
        assert_eq!(links.nav.next, Some(TopicRef::new(14, "caching")));
        assert!(links.topics.is_empty());
    }

    #[test]
    fn prose_arrows_are_not_navigation() {
        let text = "In Next.js a request → [Middleware](../13-middleware/README.md) → your page.";
        let links = scanner().scan(TopicId(1), text);
        assert_eq!(links.topics.iter().cloned().collect::<Vec<_>>(), vec![TopicRef::new(13, "middleware")]);
        assert!(links.nav.is_empty());
    }

    #[test]
    fn next_js_is_not_a_next_label() {
        let text = "Next: [Rendering](../02-rendering/README.md), built on [Routing](../01-routing/) in Next.js";
        let links = scanner().scan(TopicId(3), text);
        assert_eq!(links.nav.next, Some(TopicRef::new(2, "rendering")));
        assert_eq!(links.topics.iter().cloned().collect::<Vec<_>>(), vec![TopicRef::new(1, "routing")]);
    }

    #[test]
    fn bare_arrows_at_line_edges() {
        let text = "← [Routing](../01-routing/README.md) | [Caching](../14-caching/README.md) →";
        let links = scanner().scan(TopicId(2), text);
        assert_eq!(links.nav.previous, Some(TopicRef::new(1, "routing")));
        assert_eq!(links.nav.next, Some(TopicRef::new(14, "caching")));
        assert!(links.topics.is_empty());
    }

    #[test]
    fn links_inside_code_fences_are_ignored() {
        let text = "```md\n[x](../05-fonts/README.md)\n```\n";
        let links = scanner().scan(TopicId(1), text);
        assert!(links.topics.is_empty());
    }
}
