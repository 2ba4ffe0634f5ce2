//! Subcommand implementations.
//!
//! Commands return what they would print so they can be tested without a
//! terminal. `main` does the printing.

use crate::cli::{Cli, Command};
use crate::config::SyllabusConfig;
use crate::error::{CliError, Result};
use crate::pipeline::{read_baseline, run_all, run_one, Job, Outcome};
use std::path::{Path, PathBuf};
use syllabus_model::TopicId;
use syllabus_nav::TableOfContents;
use syllabus_render::{render_issues, render_json, render_nav_footer, render_order, render_summary, render_toc};
use tracing::info;

/// Text for stdout plus whether the run failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub text: String,
    pub failed: bool,
}

impl Output {
    fn ok(text: String) -> Self {
        Self { text, failed: false }
    }
}

fn job(cli: &Cli, root: &Path) -> Result<Job> {
    let config = SyllabusConfig::discover(root, cli.options.config.as_deref())?
        .with_overrides(&cli.options.overrides())?;
    Ok(Job { root: root.to_path_buf(), config })
}

fn jobs(cli: &Cli, roots: &[PathBuf]) -> Result<Vec<Job>> {
    roots.iter().map(|root| job(cli, root)).collect()
}

async fn single(cli: &Cli, root: &Path) -> Result<Outcome> {
    run_one(job(cli, root)?).await
}

pub async fn execute(cli: &Cli) -> Result<Output> {
    match &cli.command {
        Command::Check { roots, baseline } => {
            let baseline = baseline.as_deref().map(read_baseline).transpose()?;
            let results = run_all(jobs(cli, roots)?, baseline).await?;
            Ok(check_output(roots, &results))
        }
        Command::Toc { root } => {
            let outcome = single(cli, root).await?;
            let toc = TableOfContents::build(&outcome.catalog);
            Ok(Output::ok(render_toc(&outcome.catalog, &toc)))
        }
        Command::Nav { root, topic } => {
            let outcome = single(cli, root).await?;
            match topic.map(TopicId) {
                None => Ok(Output::ok(render_order(&outcome.catalog, &outcome.index))),
                Some(id) if !outcome.index.contains(id) => Err(CliError::UnknownTopic(id)),
                Some(id) => {
                    let footer = render_nav_footer(&outcome.catalog, &outcome.index, id).unwrap_or_default();
                    Ok(Output::ok(format!("{}\n", footer)))
                }
            }
        }
        Command::Dump { root } => {
            let outcome = single(cli, root).await?;
            Ok(Output::ok(format!("{}\n", render_json(&outcome.catalog)?)))
        }
        Command::Fingerprint { roots } => {
            let results = run_all(jobs(cli, roots)?, None).await?;
            let mut output = Output::default();
            for (root, result) in roots.iter().zip(results) {
                match result {
                    Ok(outcome) => output
                        .text
                        .push_str(&format!("{}  {}\n", outcome.catalog.fingerprint()?, root.display())),
                    Err(e) => {
                        output.text.push_str(&format!("error: {}\n", e));
                        output.failed = true;
                    }
                }
            }
            Ok(output)
        }
    }
}

/// A root whose load aborted gets an `error:` line and a FAILED summary;
/// the other roots are reported as usual.
fn check_output(roots: &[PathBuf], results: &[Result<Outcome>]) -> Output {
    let mut text = String::new();
    let mut failed = false;
    for (root, result) in roots.iter().zip(results) {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                text.push_str(&format!("error: {}\n{}: not checked FAILED\n", e, root.display()));
                failed = true;
                info!(root = %root.display(), failed = true, "Check aborted");
                continue;
            }
        };
        let verdict = if outcome.is_failure() { "FAILED" } else { "ok" };
        failed |= outcome.is_failure();

        text.push_str(&render_issues(&outcome.report.issues));
        text.push_str(&format!(
            "{}: {} topics, {} ({} mode) {}\n",
            outcome.root.display(),
            outcome.catalog.topics.len(),
            render_summary(&outcome.report.issues),
            outcome.config.mode,
            verdict,
        ));
        info!(root = %outcome.root.display(), failed = outcome.is_failure(), "Check finished");
    }
    Output { text, failed }
}
