//! The validation rules.

use crate::options::CheckOptions;
use crate::report::Report;
use std::collections::{BTreeMap, BTreeSet};
use syllabus_model::{
    Catalog, GuideRef, IssueKind, Subject, TopicId, TopicNode, TopicRef, ValidationIssue,
};
use syllabus_nav::{check_authored_links, NavigationIndex};
use tracing::debug;

/// Lookup tables built once per run.
struct Lookup<'a> {
    topics: BTreeMap<TopicId, &'a TopicNode>,
    guides: BTreeSet<(TopicId, &'a str)>,
}

impl<'a> Lookup<'a> {
    fn new(catalog: &'a Catalog) -> Self {
        let mut topics = BTreeMap::new();
        for topic in &catalog.topics {
            topics.entry(topic.id).or_insert(topic);
        }
        let guides = catalog
            .guides
            .iter()
            .map(|g| (g.topic_id, g.slug.as_str()))
            .collect();
        Self { topics, guides }
    }

    fn has_guide(&self, target: &GuideRef) -> bool {
        self.guides.contains(&(target.topic, target.guide.as_str()))
    }
}

/// Check every invariant of `catalog`. Never fails.
pub fn validate(catalog: &Catalog, options: &CheckOptions) -> Report {
    let lookup = Lookup::new(catalog);
    let mut report = Report::new();

    check_topic_ids(catalog, options, &mut report);
    check_slugs(catalog, &mut report);

    let (index, nav_issues) = NavigationIndex::build(catalog);
    report.extend(nav_issues);
    if options.check_navigation {
        report.extend(check_authored_links(catalog, &index));
    }

    check_ownership(catalog, &lookup, &mut report);

    for topic in &catalog.topics {
        let subject = Subject::topic(topic.id);
        check_topic_refs(&lookup, topic.id, &subject, &topic.related_topics, &mut report);
        check_guide_refs(&lookup, &subject, &topic.related_guides, &mut report);
    }
    for guide in &catalog.guides {
        let subject = Subject::Guide { guide: guide.to_ref() };
        check_topic_refs(&lookup, guide.topic_id, &subject, &guide.related_topics, &mut report);
        check_guide_refs(&lookup, &subject, &guide.related_guides, &mut report);
    }

    debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "Catalog checked"
    );
    report
}

fn check_topic_ids(catalog: &Catalog, options: &CheckOptions, report: &mut Report) {
    let mut seen: BTreeMap<TopicId, &str> = BTreeMap::new();
    for topic in &catalog.topics {
        if topic.id.0 == 0 || topic.id.0 > options.max_topic_id {
            report.push(ValidationIssue::error(
                IssueKind::TopicIdOutOfRange,
                Subject::topic(topic.id),
                format!("topic id {} is outside 1..={}", topic.id.0, options.max_topic_id),
            ));
        }
        match seen.get(&topic.id) {
            Some(first) => report.push(ValidationIssue::error(
                IssueKind::DuplicateId,
                Subject::topic(topic.id),
                format!("id {} is used by both {} and {}", topic.id, first, topic.slug),
            )),
            None => {
                seen.insert(topic.id, topic.slug.as_str());
            }
        }
    }
}

fn check_slugs(catalog: &Catalog, report: &mut Report) {
    let mut seen: BTreeMap<&str, TopicId> = BTreeMap::new();
    for topic in &catalog.topics {
        match seen.get(topic.slug.as_str()) {
            Some(first) if *first != topic.id => report.push(ValidationIssue::error(
                IssueKind::DuplicateSlug,
                Subject::topic(topic.id),
                format!("slug {:?} is already used by topic {}", topic.slug, first),
            )),
            Some(_) => {}
            None => {
                seen.insert(topic.slug.as_str(), topic.id);
            }
        }
    }
}

/// Every guide and example must hang off an existing topic, once.
fn check_ownership(catalog: &Catalog, lookup: &Lookup<'_>, report: &mut Report) {
    let mut guides = BTreeSet::new();
    for guide in &catalog.guides {
        let subject = Subject::Guide { guide: guide.to_ref() };
        if !lookup.topics.contains_key(&guide.topic_id) {
            report.push(ValidationIssue::error(
                IssueKind::OrphanedGuide,
                subject.clone(),
                format!("guide {:?} belongs to topic {}, which does not exist", guide.slug, guide.topic_id),
            ));
        }
        if !guides.insert((guide.topic_id, guide.slug.as_str())) {
            report.push(ValidationIssue::error(
                IssueKind::DuplicateGuide,
                subject,
                format!("topic {} has more than one guide named {:?}", guide.topic_id, guide.slug),
            ));
        }
    }

    let mut examples = BTreeSet::new();
    for example in &catalog.examples {
        let subject = Subject::Example {
            topic: example.topic_id,
            filename: example.filename.clone(),
        };
        if !lookup.topics.contains_key(&example.topic_id) {
            report.push(ValidationIssue::error(
                IssueKind::OrphanedExample,
                subject.clone(),
                format!("example {:?} belongs to topic {}, which does not exist", example.filename, example.topic_id),
            ));
        }
        if !examples.insert((example.topic_id, example.filename.as_str())) {
            report.push(ValidationIssue::error(
                IssueKind::DuplicateExample,
                subject,
                format!("topic {} has more than one example named {:?}", example.topic_id, example.filename),
            ));
        }
    }
}

/// One warning per dangling, self-pointing or misnamed topic reference.
fn check_topic_refs(
    lookup: &Lookup<'_>,
    owner: TopicId,
    subject: &Subject,
    refs: &BTreeSet<TopicRef>,
    report: &mut Report,
) {
    for target in refs {
        let issue = match lookup.topics.get(&target.id) {
            _ if target.id == owner && matches!(subject, Subject::Topic { .. }) => {
                ValidationIssue::warning(IssueKind::SelfReference, subject.clone(), format!("links to itself ({})", target))
            }
            None => ValidationIssue::warning(
                IssueKind::DanglingTopicRef,
                subject.clone(),
                format!("links to {}, which is not in the catalog", target),
            ),
            Some(actual) if actual.slug != target.slug => ValidationIssue::warning(
                IssueKind::SlugMismatch,
                subject.clone(),
                format!("links to {}, but topic {} is {}", target, target.id, actual.folder_name()),
            ),
            Some(_) => continue,
        };
        report.push(issue);
    }
}

fn check_guide_refs(lookup: &Lookup<'_>, subject: &Subject, refs: &BTreeSet<GuideRef>, report: &mut Report) {
    for target in refs {
        if lookup.has_guide(target) {
            continue;
        }
        let message = if lookup.topics.contains_key(&target.topic) {
            format!("links to guide {}, which topic {} does not have", target, target.topic)
        } else {
            format!("links to guide {} under topic {}, which does not exist", target, target.topic)
        };
        report.push(ValidationIssue::warning(IssueKind::DanglingGuideRef, subject.clone(), message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllabus_model::{Category, Classification, ExampleBundle, GuideDocument, IssueClass, Priority, Severity};

    fn base() -> Catalog {
        Catalog::new()
            .with_topic(
                TopicNode::new(1, "routing", "Routing")
                    .with_classification(Classification::new(Category::Core, Priority::High))
                    .with_related(TopicRef::new(2, "rendering")),
            )
            .with_topic(
                TopicNode::new(2, "rendering", "Rendering")
                    .with_classification(Classification::new(Category::Core, Priority::High)),
            )
            .with_topic(TopicNode::new(3, "middleware", "Middleware"))
            .with_guide(GuideDocument::new(1, "dynamic-routes", "Dynamic Routes"))
            .with_example(ExampleBundle::new(1, "page.md"))
    }

    fn check(catalog: &Catalog) -> Report {
        validate(catalog, &CheckOptions::default())
    }

    #[test]
    fn clean_catalog_has_no_issues() {
        let report = check(&base());
        assert!(report.is_empty(), "{:?}", report.issues);
    }

    #[test]
    fn one_warning_per_dangling_reference() {
        let mut catalog = base();
        catalog.topics[0].related_topics.insert(TopicRef::new(7, "image"));
        catalog.topics[0].related_topics.insert(TopicRef::new(8, "fonts"));

        let report = check(&catalog);
        assert_eq!(report.of_kind(IssueKind::DanglingTopicRef).count(), 2);
        assert!(report.of_kind(IssueKind::DanglingTopicRef).all(|i| i.severity == Severity::Warning));
        assert!(!report.has_errors());

        // fixing the reference removes exactly its warning
        catalog.topics[0].related_topics.remove(&TopicRef::new(7, "image"));
        let report = check(&catalog);
        assert_eq!(report.of_kind(IssueKind::DanglingTopicRef).count(), 1);
    }

    #[test]
    fn orphaned_example_is_a_structural_error() {
        let catalog = base().with_example(ExampleBundle::new(99, "ghost.md"));
        let report = check(&catalog);
        let orphans: Vec<_> = report.of_kind(IssueKind::OrphanedExample).collect();
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].severity, Severity::Error);
        assert_eq!(orphans[0].class(), IssueClass::Structural);
        assert_eq!(report.of_class(IssueClass::Referential).count(), 0);
    }

    #[test]
    fn orphaned_guide_is_an_error() {
        let catalog = base().with_guide(GuideDocument::new(42, "lost", "Lost"));
        let report = check(&catalog);
        assert_eq!(report.of_kind(IssueKind::OrphanedGuide).count(), 1);
        assert!(report.has_errors());
    }

    #[test]
    fn duplicate_ids_and_slugs() {
        let catalog = base()
            .with_topic(TopicNode::new(2, "streaming", "Streaming"))
            .with_topic(TopicNode::new(4, "routing", "Routing again"));
        let report = check(&catalog);
        assert_eq!(report.of_kind(IssueKind::DuplicateId).count(), 1);
        assert_eq!(report.of_kind(IssueKind::DuplicateSlug).count(), 1);
    }

    #[test]
    fn id_range() {
        let catalog = base().with_topic(TopicNode::new(0, "intro", "Intro"));
        let report = check(&catalog);
        assert_eq!(report.of_kind(IssueKind::TopicIdOutOfRange).count(), 1);

        let catalog = base().with_topic(TopicNode::new(41, "extra", "Extra"));
        let strict = validate(&catalog, &CheckOptions::default());
        let relaxed = validate(&catalog, &CheckOptions { max_topic_id: 60, ..CheckOptions::default() });
        assert_eq!(strict.of_kind(IssueKind::TopicIdOutOfRange).count(), 1);
        assert_eq!(relaxed.of_kind(IssueKind::TopicIdOutOfRange).count(), 0);
        // 4..=40 missing either way
        assert_eq!(relaxed.of_kind(IssueKind::NonContiguous).count(), 1);
    }

    #[test]
    fn gaps_are_warnings() {
        let catalog = base().with_topic(TopicNode::new(13, "caching", "Caching"));
        let report = check(&catalog);
        assert_eq!(report.of_kind(IssueKind::NonContiguous).count(), 1);
        assert!(!report.has_errors());
    }

    #[test]
    fn slug_mismatch_and_self_reference() {
        let mut catalog = base();
        catalog.topics[1].related_topics.insert(TopicRef::new(1, "router"));
        catalog.topics[2].related_topics.insert(TopicRef::new(3, "middleware"));
        let report = check(&catalog);
        assert_eq!(report.of_kind(IssueKind::SlugMismatch).count(), 1);
        assert_eq!(report.of_kind(IssueKind::SelfReference).count(), 1);
    }

    #[test]
    fn cycles_are_allowed() {
        let mut catalog = base();
        catalog.topics[1].related_topics.insert(TopicRef::new(1, "routing"));
        assert!(check(&catalog).is_empty());
    }

    #[test]
    fn guide_references() {
        let catalog = base()
            .with_guide(
                GuideDocument::new(2, "streaming", "Streaming")
                    .with_guide_ref(GuideRef::new(1, "dynamic-routes"))
                    .with_guide_ref(GuideRef::new(1, "parallel-routes"))
                    .with_guide_ref(GuideRef::new(9, "nowhere"))
                    .with_topic_ref(TopicRef::new(2, "rendering")),
            );
        let report = check(&catalog);
        assert_eq!(report.of_kind(IssueKind::DanglingGuideRef).count(), 2);
        // a guide linking to its own topic is normal
        assert_eq!(report.of_kind(IssueKind::SelfReference).count(), 0);
    }

    #[test]
    fn duplicate_children() {
        let catalog = base()
            .with_guide(GuideDocument::new(1, "dynamic-routes", "Again"))
            .with_example(ExampleBundle::new(1, "page.md"));
        let report = check(&catalog);
        assert_eq!(report.of_kind(IssueKind::DuplicateGuide).count(), 1);
        assert_eq!(report.of_kind(IssueKind::DuplicateExample).count(), 1);
    }

    #[test]
    fn navigation_check_can_be_disabled() {
        let mut catalog = base();
        catalog.topics[0].authored_nav.next = Some(TopicRef::new(3, "middleware"));
        let on = check(&catalog);
        let off = validate(&catalog, &CheckOptions { check_navigation: false, ..CheckOptions::default() });
        assert_eq!(on.of_kind(IssueKind::NavigationMismatch).count(), 1);
        assert_eq!(off.of_kind(IssueKind::NavigationMismatch).count(), 0);
    }
}
