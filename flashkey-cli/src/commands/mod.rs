//! CLI command implementations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use flashkey_core::{KeywordError, KeywordProcessor};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::Source;
use crate::output::{self, Body, Document, OutputFormat};
use crate::progress::ProgressReporter;

pub mod extract;
pub mod keywords;
pub mod replace;
pub mod sentences;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract dictionary keywords from text
    Extract(extract::ExtractArgs),

    /// Replace dictionary keywords with their values
    Replace(replace::ReplaceArgs),

    /// Print the sentences that contain keywords
    Sentences(sentences::SentencesArgs),

    /// List the loaded dictionary
    Keywords(keywords::KeywordsArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Extract(args) => args.execute(),
            Commands::Replace(args) => args.execute(),
            Commands::Sentences(args) => args.execute(),
            Commands::Keywords(args) => args.execute(),
        }
    }
}

/// Dictionary and engine options shared by every command
#[derive(Debug, Args)]
pub struct DictionaryArgs {
    /// Keyword dictionary files (`.json`, or `keyword=>value` lines)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub keywords: Vec<PathBuf>,

    /// Match keywords case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "FLASHKEY_CONFIG")]
    pub config: Option<PathBuf>,
}

impl DictionaryArgs {
    /// Load the configuration file and every dictionary
    pub fn load(&self) -> Result<(CliConfig, KeywordProcessor)> {
        let config = CliConfig::load(self.config.as_deref())?;
        let mut processor = KeywordProcessor::with_config(config.engine_config(self.case_sensitive)?)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        for path in &self.keywords {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
            let added = processor
                .add_keywords_from_file(path)
                .map_err(|e| dictionary_error(path, e))?;
            log::info!("Loaded {added} keywords from {}", path.display());
        }

        if processor.is_empty() {
            log::warn!("Dictionary is empty; nothing will match");
        }
        Ok((config, processor))
    }
}

fn dictionary_error(path: &Path, error: KeywordError) -> anyhow::Error {
    match error {
        KeywordError::Io(e) => {
            anyhow::Error::new(e).context(format!("Failed to read dictionary: {}", path.display()))
        }
        other => CliError::DictionaryError(other.to_string()).into(),
    }
}

/// Input selection shared by text-processing commands
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,
}

/// Output and logging options shared by every command
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format (defaults to the configuration file, then text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Suppress logging and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl OutputArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }

    /// Output format from the flag, else from the configuration file
    pub fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => Ok(config.output.default_format.parse::<OutputFormat>()?),
        }
    }
}

/// Run `process` over every input and write one document per input
pub fn run_over_inputs<F>(
    input: &InputArgs,
    output: &OutputArgs,
    config: &CliConfig,
    mut process: F,
) -> Result<()>
where
    F: FnMut(&str) -> Result<Body>,
{
    let format = output.resolve_format(config)?;
    let sources = Source::resolve(&input.input)?;
    log::info!("Processing {} input(s)", sources.len());

    let mut progress = ProgressReporter::new(output.quiet);
    progress.init_files(sources.len() as u64);
    let mut formatter =
        output::stdout_formatter(format, config.output.pretty_json, sources.len() > 1);

    for source in &sources {
        let name = source.name();
        let text = source.read()?;
        let body = process(&text).with_context(|| format!("Failed to process {name}"))?;
        formatter.write_document(&Document { source: name.clone(), body })?;
        progress.file_completed(&name);
    }

    progress.finish();
    formatter.finish()
}
