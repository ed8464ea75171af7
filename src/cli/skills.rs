use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::{is_stdin, load_vocabulary, OutputFormat};
use crate::core::types::MatchMode;
use crate::extraction::{PdfTextExtractor, TextExtractor};
use crate::matching::engine::{MatchingConfig, MatchingEngine};
use crate::utils::validation::has_pdf_extension;

#[derive(Args)]
pub struct SkillsArgs {
    /// Text to scan
    #[arg(long, required_unless_present = "file", conflicts_with = "file")]
    pub text: Option<String>,

    /// PDF or plain-text file to scan ('-' for stdin text)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Path to a custom vocabulary file
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,

    /// How skills are located in text
    #[arg(long, value_enum, default_value = "substring")]
    pub match_mode: MatchMode,
}

/// Execute skills subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or the vocabulary cannot be
/// loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SkillsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let text = read_input(&args)?;

    let vocabulary = load_vocabulary(args.vocabulary.as_deref())?;
    let engine = MatchingEngine::new(
        &vocabulary,
        MatchingConfig {
            match_mode: args.match_mode,
        },
    );

    if verbose {
        eprintln!(
            "Scanning {} characters against {} skills ({} matching)",
            text.len(),
            engine.vocabulary().len(),
            engine.config().match_mode
        );
    }

    let found = engine.find_skills(&text);

    match format {
        OutputFormat::Text => {
            if found.is_empty() {
                eprintln!("No known skills found.");
                return Ok(());
            }
            println!("Found {} skills:", found.len());
            for skill in &found {
                println!("  {skill}");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "count": found.len(),
                "skills": found,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("skill");
            for skill in &found {
                println!("{skill}");
            }
        }
    }

    Ok(())
}

fn read_input(args: &SkillsArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    match &args.file {
        Some(path) if is_stdin(path) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => read_file(path),
        None => anyhow::bail!("Provide --text or --file"),
    }
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    let is_pdf = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(has_pdf_extension);

    if is_pdf {
        Ok(PdfTextExtractor.extract_file(path)?)
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))
    }
}
