//! Replace command implementation

use anyhow::Result;
use clap::Args;
use flashkey_core::KeywordProcessor;

use super::{run_over_inputs, DictionaryArgs, InputArgs, OutputArgs};
use crate::output::Body;

/// Arguments for the replace command
#[derive(Debug, Args)]
pub struct ReplaceArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl ReplaceArgs {
    /// Execute the replace command
    pub fn execute(&self) -> Result<()> {
        self.output.init_logging();
        log::debug!("Arguments: {self:?}");

        let (config, processor) = self.dictionary.load()?;
        run_over_inputs(&self.input, &self.output, &config, |text| {
            Ok(replace(&processor, text))
        })
    }
}

fn replace(processor: &KeywordProcessor, text: &str) -> Body {
    let (text, replacements) = processor.replace_keywords_with_spans(text);
    log::debug!("Made {} replacements", replacements.len());
    Body::Replaced { text, replacements }
}
