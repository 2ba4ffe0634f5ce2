//! Syllabus command line
//!
//! Library half of the `syllabus` binary: argument definitions, config
//! resolution and the pipeline runner.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod pipeline;

pub use cli::{Cli, Command, GlobalOptions};
pub use commands::{execute, Output};
pub use config::{Overrides, SyllabusConfig, CONFIG_FILE};
pub use error::{CliError, ConfigError, Result};
pub use pipeline::{read_baseline, run, run_all, run_one, Job, Outcome};
