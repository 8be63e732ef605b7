//! Sentences command implementation

use anyhow::Result;
use clap::Args;
use flashkey_core::KeywordProcessor;

use super::{run_over_inputs, DictionaryArgs, InputArgs, OutputArgs};
use crate::error::CliError;
use crate::output::{Body, SentenceRecord};

/// Arguments for the sentences command
#[derive(Debug, Args)]
pub struct SentencesArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Sentence delimiter characters, overriding the configuration
    #[arg(long, value_name = "CHARS")]
    pub delimiters: Option<String>,
}

impl SentencesArgs {
    /// Execute the sentences command
    pub fn execute(&self) -> Result<()> {
        self.output.init_logging();
        log::debug!("Arguments: {self:?}");

        let (config, processor) = self.dictionary.load()?;
        run_over_inputs(&self.input, &self.output, &config, |text| {
            sentences(&processor, text, self.delimiters.as_deref())
        })
    }
}

fn sentences(processor: &KeywordProcessor, text: &str, delimiters: Option<&str>) -> Result<Body> {
    let sentences: Vec<SentenceRecord> = match delimiters {
        Some(delimiters) => processor
            .extract_sentences_with(text, delimiters.chars())
            .map_err(CliError::invalid_argument)?
            .map(SentenceRecord::from)
            .collect(),
        None => processor
            .extract_sentences(text)
            .map(SentenceRecord::from)
            .collect(),
    };
    Ok(Body::Sentences { sentences })
}
