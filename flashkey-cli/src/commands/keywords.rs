//! Keywords command implementation

use anyhow::Result;
use clap::Args;
use flashkey_core::KeywordProcessor;

use super::{DictionaryArgs, OutputArgs};
use crate::output::{self, Body, DictionaryEntry, Document};

/// Arguments for the keywords command
#[derive(Debug, Args)]
pub struct KeywordsArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl KeywordsArgs {
    /// Execute the keywords command
    pub fn execute(&self) -> Result<()> {
        self.output.init_logging();
        log::debug!("Arguments: {self:?}");

        let (config, processor) = self.dictionary.load()?;
        let format = self.output.resolve_format(&config)?;
        let source = self
            .dictionary
            .keywords
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let mut formatter = output::stdout_formatter(format, config.output.pretty_json, false);
        formatter.write_document(&Document {
            source,
            body: Body::Dictionary {
                entries: dictionary_entries(&processor),
            },
        })?;
        formatter.finish()
    }
}

/// One entry per keyword endpoint, sorted by keyword
fn dictionary_entries(processor: &KeywordProcessor) -> Vec<DictionaryEntry> {
    let mut entries: Vec<DictionaryEntry> = processor
        .keywords()
        .map(|(keyword, value)| DictionaryEntry {
            keyword,
            value: value.to_string(),
        })
        .collect();
    entries.sort_by(|a, b| a.keyword.cmp(&b.keyword));
    entries
}
