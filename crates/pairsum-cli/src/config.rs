pub mod defaults;

use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use pairsum::core::sequence::SequenceLayout;
use pairsum::search::pair_sum::SearchStrategy;
use pairsum::workflows::config::{BatchConfig, BatchConfigBuilder, PairSumQuery};
use pairsum::workflows::error::WorkflowError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct PartialQuery {
    b: Vec<i64>,
    target: i64,
}

impl From<PartialQuery> for PairSumQuery {
    fn from(p: PartialQuery) -> Self {
        Self {
            b: p.b,
            target: p.target,
        }
    }
}

/// Contents of a batch query file before CLI overrides and defaults are applied.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialBatchFile {
    strategy: Option<SearchStrategy>,
    layout: Option<SequenceLayout>,
    a: Option<Vec<i64>>,
    queries: Option<Vec<PartialQuery>>,
}

impl PartialBatchFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading batch queries from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolves the shared sequence and the batch configuration. CLI flags win over the file,
    /// and the file wins over [`DefaultsConfig`].
    pub fn merge_with_cli(
        self,
        args: &BatchArgs,
        defaults: &DefaultsConfig,
    ) -> Result<(Vec<i64>, BatchConfig)> {
        let a = self.a.ok_or_else(|| {
            CliError::Config("`a` (the shared sequence) is required in the batch file.".to_string())
        })?;

        let strategy = args
            .strategy
            .map(SearchStrategy::from)
            .or(self.strategy)
            .unwrap_or(defaults.strategy);
        let layout = args
            .layout
            .map(SequenceLayout::from)
            .or(self.layout)
            .unwrap_or(defaults.layout);

        let mut builder = BatchConfigBuilder::new().strategy(strategy).layout(layout);
        if let Some(queries) = self.queries {
            builder = builder.queries(queries.into_iter().map(Into::into).collect());
        }

        let config = builder.build().map_err(WorkflowError::from)?;
        Ok((a, config))
    }
}
