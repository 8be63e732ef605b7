//! Extract command implementation

use anyhow::Result;
use clap::Args;
use flashkey_core::{ExtractOptions, KeywordProcessor};

use super::{run_over_inputs, DictionaryArgs, InputArgs, OutputArgs};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::Body;

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Maximum edit distance for fuzzy matching (0 = exact)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub max_cost: Option<i64>,

    /// Report character spans with each keyword
    #[arg(long)]
    pub spans: bool,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        self.output.init_logging();
        log::debug!("Arguments: {self:?}");

        let (config, processor) = self.dictionary.load()?;
        let options = self.options(&config)?;
        log::info!("Extracting with max cost {}", options.max_cost());

        run_over_inputs(&self.input, &self.output, &config, |text| {
            Ok(extract(&processor, text, &options, self.spans))
        })
    }

    /// Extraction options from the flag, else from the configuration file
    pub fn options(&self, config: &CliConfig) -> Result<ExtractOptions> {
        let max_cost = self
            .max_cost
            .unwrap_or_else(|| i64::from(config.processing.max_cost));
        ExtractOptions::builder()
            .max_cost(max_cost)
            .build()
            .map_err(|e| CliError::invalid_argument(e).into())
    }
}

fn extract(
    processor: &KeywordProcessor,
    text: &str,
    options: &ExtractOptions,
    spans: bool,
) -> Body {
    let matches = processor.extract_with(text, options);
    if spans {
        Body::Matches { matches }
    } else {
        Body::Keywords {
            keywords: matches.into_iter().map(|found| found.value).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashkey_core::KeywordMatch;
    use std::path::PathBuf;

    fn args(max_cost: Option<i64>) -> ExtractArgs {
        ExtractArgs {
            dictionary: DictionaryArgs {
                keywords: vec![PathBuf::from("dict.txt")],
                case_sensitive: false,
                config: None,
            },
            input: InputArgs { input: Vec::new() },
            output: OutputArgs {
                format: None,
                quiet: true,
                verbose: 0,
            },
            max_cost,
            spans: false,
        }
    }

    #[test]
    fn test_options_precedence() {
        let mut config = CliConfig::default();
        config.processing.max_cost = 2;

        assert_eq!(args(None).options(&config).unwrap().max_cost(), 2);
        assert_eq!(args(Some(1)).options(&config).unwrap().max_cost(), 1);
    }

    #[test]
    fn test_negative_cost_rejected() {
        let err = args(Some(-1))
            .options(&CliConfig::default())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_extract_bodies() {
        let mut processor = KeywordProcessor::new();
        processor.add_keyword_with_value("Big Apple", "New York").unwrap();
        let options = ExtractOptions::exact();

        assert_eq!(
            extract(&processor, "I love Big Apple", &options, false),
            Body::Keywords {
                keywords: vec!["New York".to_string()]
            }
        );
        assert_eq!(
            extract(&processor, "I love Big Apple", &options, true),
            Body::Matches {
                matches: vec![KeywordMatch {
                    value: "New York".to_string(),
                    start: 7,
                    end: 16,
                }]
            }
        );
    }
}
