//! Command-line interface for the extractor.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::ExtractorConfig;
use crate::convert::convert_to_text;
use crate::error::{ExtractorError, Result};
use crate::extractor::IssueExtractor;
use crate::ner::PatternRecognizer;

/// FEK Extractor - Extract structured decisions from Greek Government
/// Gazette issues.
#[derive(Parser)]
#[command(name = "fek-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract decisions from gazette issues (PDF or plain text) to JSON.
    Extract {
        /// Input files: .pdf (converted via the external converter) or .txt
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory for JSON records (default: stdout)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Newline-separated canonical organization names, enables the
        /// organization-matching pass
        #[arg(long)]
        orgs_file: Option<PathBuf>,

        /// Converter deadline in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Keep converted text files next to their PDFs
        #[arg(long)]
        keep_text: bool,
    },
}

/// Run the CLI.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            inputs,
            output_dir,
            orgs_file,
            timeout,
            keep_text,
        } => {
            extract_command(
                &inputs,
                output_dir.as_deref(),
                orgs_file.as_deref(),
                timeout,
                keep_text,
            )
            .await
        }
    }
}

/// Execute the extract command over a batch of documents.
///
/// Documents are processed independently: a failure is reported and the
/// batch continues. The command fails only when every document failed.
async fn extract_command(
    inputs: &[PathBuf],
    output_dir: Option<&Path>,
    orgs_file: Option<&Path>,
    timeout: Option<u64>,
    keep_text: bool,
) -> Result<()> {
    if let Some(dir) = output_dir {
        if !dir.exists() {
            return Err(ExtractorError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Output directory does not exist: {}", dir.display()),
            )));
        }
        if !dir.is_dir() {
            return Err(ExtractorError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Output path is not a directory: {}", dir.display()),
            )));
        }
    }

    let orgs: Option<Vec<String>> = match orgs_file {
        Some(path) => Some(
            std::fs::read_to_string(path)?
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
        ),
        None => None,
    };

    let mut config = ExtractorConfig::default();
    if let Some(seconds) = timeout {
        config.converter_timeout_secs = seconds;
    }
    let extractor = IssueExtractor::new(&config);
    let recognizer = PatternRecognizer::new();

    let pb = ProgressBar::new(inputs.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let mut extracted = 0usize;
    let mut last_error = None;
    for input in inputs {
        pb.set_message(
            input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        let result = process_document(
            input,
            output_dir,
            orgs.as_deref(),
            &extractor,
            &recognizer,
            &config,
            keep_text,
            &pb,
        )
        .await;
        match result {
            Ok(()) => extracted += 1,
            Err(e) => {
                pb.suspend(|| {
                    eprintln!(
                        "{} {}: {e}",
                        style("Failed").red().bold(),
                        input.display()
                    );
                });
                last_error = Some(e);
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!(
        "{} {extracted} of {} document(s)",
        style("Extracted").green().bold(),
        inputs.len()
    );

    match last_error {
        Some(e) if extracted == 0 => Err(e),
        _ => Ok(()),
    }
}

#[allow(clippy::too_many_arguments)]
async fn process_document(
    input: &Path,
    output_dir: Option<&Path>,
    orgs: Option<&[String]>,
    extractor: &IssueExtractor,
    recognizer: &PatternRecognizer,
    config: &ExtractorConfig,
    keep_text: bool,
    pb: &ProgressBar,
) -> Result<()> {
    let text = if input.extension().is_some_and(|e| e.eq_ignore_ascii_case("pdf")) {
        let converted = input.with_extension("txt");
        let cached = converted.exists();
        let text = convert_to_text(input, &converted, config).await?;
        if !keep_text && !cached {
            tokio::fs::remove_file(&converted).await.ok();
        }
        text
    } else {
        if !input.exists() {
            return Err(ExtractorError::MissingSource {
                path: input.to_path_buf(),
            });
        }
        tokio::fs::read_to_string(input).await?
    };

    let issue = extractor.extract(&text, orgs, Some(recognizer))?;
    let json = serde_json::to_string_pretty(&issue)?;

    match output_dir {
        Some(dir) => {
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "issue".to_string());
            let path = dir.join(format!("{stem}.json"));
            tokio::fs::write(&path, json).await?;
        }
        None => pb.suspend(|| println!("{json}")),
    }

    if !issue.warnings.is_empty() {
        pb.suspend(|| {
            println!(
                "  {} {} warning(s) for {}",
                style("!").yellow().bold(),
                issue.warnings.len(),
                input.display()
            );
        });
    }

    Ok(())
}
