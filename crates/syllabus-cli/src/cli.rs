//! Command-line arguments.

use crate::config::Overrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use syllabus_check::CheckMode;

#[derive(Debug, Parser)]
#[command(name = "syllabus")]
#[command(about = "Check, index and render numbered documentation catalogs")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOptions {
    /// Config file (default: syllabus.json at each root, if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the NN-slug topic folders, relative to the root
    #[arg(long, global = true, env = "SYLLABUS_CONCEPTS_DIR")]
    pub concepts_dir: Option<String>,

    /// Largest valid topic id
    #[arg(long, global = true, env = "SYLLABUS_MAX_TOPIC_ID")]
    pub max_topic_id: Option<u16>,

    /// advisory, strict or deny-warnings
    #[arg(long, global = true, env = "SYLLABUS_MODE")]
    pub mode: Option<CheckMode>,

    /// Do not compare hand-written Previous/Next links with the derived order
    #[arg(long, global = true)]
    pub skip_navigation: bool,
}

impl GlobalOptions {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            concepts_dir: self.concepts_dir.clone(),
            max_topic_id: self.max_topic_id,
            mode: self.mode,
            skip_navigation: self.skip_navigation,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load, validate and index one or more catalogs
    Check {
        /// Catalog roots
        #[arg(required = true)]
        roots: Vec<PathBuf>,

        /// Earlier `dump` output; topics whose status moved backwards are flagged
        #[arg(long)]
        baseline: Option<PathBuf>,
    },

    /// Print the table of contents page
    Toc {
        root: PathBuf,
    },

    /// Print the reading order, or one topic's Previous/Next footer
    Nav {
        root: PathBuf,

        #[arg(long)]
        topic: Option<u16>,
    },

    /// Print the catalog as JSON
    Dump {
        root: PathBuf,
    },

    /// Print a content hash per catalog
    Fingerprint {
        #[arg(required = true)]
        roots: Vec<PathBuf>,
    },
}
