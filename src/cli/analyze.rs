use std::io::{self, Read};
use std::path::PathBuf;

use clap::Args;

use crate::analysis::{analyze_resume_bytes, analyze_resume_file};
use crate::cli::{display_list, is_stdin, load_vocabulary, OutputFormat};
use crate::core::types::MatchMode;
use crate::extraction::PdfTextExtractor;
use crate::matching::engine::{MatchingConfig, MatchingEngine};
use crate::matching::report::MatchReport;
use crate::matching::scoring::format_percentage;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Résumé PDF
    /// Use '-' for stdin
    #[arg(required = true)]
    pub resume: PathBuf,

    /// Job description text
    #[arg(long, required_unless_present = "job_file", conflicts_with = "job_file")]
    pub job: Option<String>,

    /// File holding the job description ('-' for stdin)
    #[arg(long)]
    pub job_file: Option<PathBuf>,

    /// Path to a custom vocabulary file
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,

    /// How skills are located in text
    #[arg(long, value_enum, default_value = "substring")]
    pub match_mode: MatchMode,
}

/// Execute analyze subcommand
///
/// # Errors
///
/// Returns an error if the inputs fail validation, the vocabulary cannot be
/// loaded, or the résumé text cannot be extracted.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AnalyzeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let resume_from_stdin = is_stdin(&args.resume);
    if resume_from_stdin && args.job_file.as_deref().is_some_and(is_stdin) {
        anyhow::bail!("The résumé and the job description cannot both be read from stdin");
    }

    let job_description = read_job_description(&args)?;

    let vocabulary = load_vocabulary(args.vocabulary.as_deref())?;
    if verbose {
        eprintln!("Loaded vocabulary with {} skills", vocabulary.len());
    }

    let config = MatchingConfig {
        match_mode: args.match_mode,
    };
    let engine = MatchingEngine::new(&vocabulary, config);
    let extractor = PdfTextExtractor;

    let report = if resume_from_stdin {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        if verbose {
            eprintln!("Read {} bytes from stdin", bytes.len());
        }
        analyze_resume_bytes(
            Some("stdin.pdf"),
            &bytes,
            &job_description,
            &engine,
            &extractor,
        )?
    } else {
        analyze_resume_file(&args.resume, &job_description, &engine, &extractor)?
    };

    match format {
        OutputFormat::Text => print_text_report(&report, verbose),
        OutputFormat::Json => print_json_report(&report)?,
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn read_job_description(args: &AnalyzeArgs) -> anyhow::Result<String> {
    if let Some(job) = &args.job {
        return Ok(job.clone());
    }

    match &args.job_file {
        Some(path) if is_stdin(path) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Failed to read job description from {}: {e}",
                path.display()
            )
        }),
        None => anyhow::bail!("Please enter a job description (--job or --job-file)"),
    }
}

fn print_text_report(report: &MatchReport, verbose: bool) {
    println!(
        "Match score: {}%",
        format_percentage(report.match_percentage)
    );
    println!();
    println!(
        "Matched skills ({}): {}",
        report.matched_skills.len(),
        display_list(&report.matched_skills)
    );
    println!(
        "Missing skills ({}): {}",
        report.missing_skills.len(),
        display_list(&report.missing_skills)
    );

    if verbose {
        println!();
        println!(
            "Résumé skills ({}): {}",
            report.resume_skills.len(),
            display_list(&report.resume_skills)
        );
        println!(
            "Job skills ({}): {}",
            report.job_skills.len(),
            display_list(&report.job_skills)
        );
    }

    println!();
    println!("{}", report.explanation);
}

fn print_json_report(report: &MatchReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_tsv_report(report: &MatchReport) {
    println!("match_percentage\tjob_skills\tmatched\tmissing\tmatched_skills\tmissing_skills");
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        format_percentage(report.match_percentage),
        report.job_skills.len(),
        report.matched_skills.len(),
        report.missing_skills.len(),
        report.matched_skills.join(","),
        report.missing_skills.join(","),
    );
}
