//! Load, validate and index one or more catalog roots.
//!
//! Each root is an independent pipeline. Roots run side by side on the
//! blocking pool; inside a pipeline the stages run strictly in order.

use crate::config::SyllabusConfig;
use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use syllabus_check::{check_status_transitions, validate, Report};
use syllabus_loader::load_dir;
use syllabus_model::Catalog;
use syllabus_nav::NavigationIndex;
use tracing::{debug, info, warn};

/// One root to process.
#[derive(Debug, Clone)]
pub struct Job {
    pub root: PathBuf,
    pub config: SyllabusConfig,
}

/// Everything a pipeline produced for one root.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub root: PathBuf,
    pub config: SyllabusConfig,
    pub catalog: Catalog,
    pub index: NavigationIndex,
    pub report: Report,
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        self.report.is_failure(self.config.mode)
    }
}

/// Read a catalog previously written by `syllabus dump`.
pub fn read_baseline(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Baseline {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Run the pipeline for one root on the current thread.
pub fn run(job: &Job, baseline: Option<&Catalog>) -> Result<Outcome> {
    let loaded = load_dir(&job.root, &job.config.loader).map_err(|source| CliError::Load {
        root: job.root.clone(),
        source,
    })?;

    let mut report = Report::from(loaded.issues);
    report.merge(validate(&loaded.catalog, &job.config.check));
    if let Some(baseline) = baseline {
        report.extend(check_status_transitions(baseline, &loaded.catalog));
    }
    report.sort();

    let (index, _) = NavigationIndex::build(&loaded.catalog);

    if report.has_errors() {
        warn!(
            root = %job.root.display(),
            errors = report.error_count(),
            warnings = report.warning_count(),
            "Catalog has errors"
        );
    } else {
        info!(
            root = %job.root.display(),
            topics = loaded.catalog.topics.len(),
            warnings = report.warning_count(),
            "Catalog checked"
        );
    }

    Ok(Outcome {
        root: job.root.clone(),
        config: job.config.clone(),
        catalog: loaded.catalog,
        index,
        report,
    })
}

/// Run every job concurrently. Results come back in job order, one per
/// root: a root whose load aborts is an `Err` in its own slot and does not
/// touch the others.
///
/// Ctrl-C abandons the whole run; pipelines already on the blocking pool
/// finish in the background and their results are dropped.
pub async fn run_all(jobs: Vec<Job>, baseline: Option<Catalog>) -> Result<Vec<Result<Outcome>>> {
    let baseline = Arc::new(baseline);
    let handles: Vec<_> = jobs
        .into_iter()
        .map(|job| {
            let baseline = Arc::clone(&baseline);
            tokio::task::spawn_blocking(move || run(&job, Option::as_ref(&baseline)))
        })
        .collect();
    debug!(pipelines = handles.len(), "Pipelines started");

    interruptible(async {
        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            let result = handle.await.map_err(CliError::from).and_then(|outcome| outcome);
            if let Err(e) = &result {
                warn!(error = %e, "Pipeline aborted");
            }
            results.push(result);
        }
        Ok(results)
    })
    .await
}

/// Run a single job off the async runtime. Its failure is the command's failure.
pub async fn run_one(job: Job) -> Result<Outcome> {
    interruptible(async move { tokio::task::spawn_blocking(move || run(&job, None)).await? }).await
}

async fn interruptible<T>(work: impl std::future::Future<Output = Result<T>>) -> Result<T> {
    tokio::select! {
        result = work => result,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted, abandoning run");
            Err(CliError::Interrupted)
        }
    }
}
