use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::{load_vocabulary, OutputFormat};

#[derive(Args)]
pub struct VocabularyArgs {
    #[command(subcommand)]
    pub command: VocabularyCommands,
}

#[derive(Subcommand)]
pub enum VocabularyCommands {
    /// List all skills in the vocabulary
    List {
        /// Path to a custom vocabulary file
        #[arg(long)]
        vocabulary: Option<PathBuf>,
    },

    /// Export the vocabulary as JSON
    Export {
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to a custom vocabulary file to export (defaults to embedded)
        #[arg(long)]
        vocabulary: Option<PathBuf>,
    },
}

/// Execute vocabulary subcommand
///
/// # Errors
///
/// Returns an error if the vocabulary cannot be loaded or written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: VocabularyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        VocabularyCommands::List { vocabulary } => run_list(vocabulary, format, verbose),
        VocabularyCommands::Export { output, vocabulary } => run_export(output, vocabulary),
    }
}

fn run_list(
    vocabulary_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let vocabulary = load_vocabulary(vocabulary_path.as_deref())?;

    if verbose {
        match &vocabulary_path {
            Some(path) => eprintln!("Loaded vocabulary from {}", path.display()),
            None => eprintln!("Loaded embedded vocabulary"),
        }
    }

    match format {
        OutputFormat::Text => {
            println!("Skill vocabulary ({} skills)\n", vocabulary.len());
            for skill in &vocabulary {
                println!("  {skill}");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "count": vocabulary.len(),
                "skills": vocabulary.as_slice(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("index\tskill");
            for (i, skill) in vocabulary.iter().enumerate() {
                println!("{}\t{skill}", i + 1);
            }
        }
    }

    Ok(())
}

fn run_export(output: Option<PathBuf>, vocabulary_path: Option<PathBuf>) -> anyhow::Result<()> {
    let vocabulary = load_vocabulary(vocabulary_path.as_deref())?;
    let json = vocabulary.to_json()?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            eprintln!("Exported {} skills to {}", vocabulary.len(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
