//! Command-line interface for resume-matcher.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **analyze**: Score a résumé PDF against a job description
//! - **skills**: List the known skills found in a text or document
//! - **vocabulary**: List or export the skill vocabulary
//! - **serve**: Start the JSON HTTP API
//!
//! ## Usage
//!
//! ```text
//! # Score a résumé against a job description
//! resume-matcher analyze resume.pdf --job "Python developer with SQL and Docker"
//!
//! # Read the job description from a file, JSON output for scripting
//! resume-matcher analyze resume.pdf --job-file posting.txt --format json
//!
//! # Pipe the résumé in
//! cat resume.pdf | resume-matcher analyze - --job-file posting.txt
//!
//! # Stricter matching ("r" no longer matches inside "research")
//! resume-matcher analyze resume.pdf --job-file posting.txt --match-mode whole-word
//!
//! # Start the API server
//! resume-matcher serve --port 8080
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::types::MatchMode;
use crate::vocabulary::store::SkillVocabulary;

pub mod analyze;
pub mod skills;
pub mod vocabulary;

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(version)]
#[command(about = "Score résumés against job descriptions by skill overlap")]
#[command(
    long_about = "resume-matcher extracts text from a résumé PDF and compares it with a job description.\n\nBoth texts are scanned for a fixed vocabulary of technical skills and the report shows:\n- The share of the job's skills that the résumé covers\n- Which skills matched\n- Which skills the résumé is missing"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a résumé PDF against a job description
    Analyze(analyze::AnalyzeArgs),

    /// List vocabulary skills found in a text or document
    Skills(skills::SkillsArgs),

    /// Inspect the skill vocabulary
    Vocabulary(vocabulary::VocabularyArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    /// Path to a custom vocabulary file
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,

    /// Default match mode for requests that do not pick one
    #[arg(long, value_enum, default_value = "substring")]
    pub match_mode: MatchMode,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a vocabulary from `path`, or the embedded default
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_vocabulary(path: Option<&Path>) -> anyhow::Result<SkillVocabulary> {
    let vocabulary = match path {
        Some(path) => SkillVocabulary::load_from_file(path)?,
        None => SkillVocabulary::load_embedded()?,
    };
    Ok(vocabulary)
}

/// Whether a path argument means stdin
pub(crate) fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Render a skill list for humans, `(none)` when empty
pub(crate) fn display_list(skills: &crate::core::skills::SkillSet) -> String {
    if skills.is_empty() {
        "(none)".to_string()
    } else {
        skills.join(", ")
    }
}
