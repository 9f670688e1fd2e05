use crate::core::sequence::SequenceLayout;
use crate::search::pair_sum::SearchStrategy;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// One query against the shared sequence of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSumQuery {
    pub b: Vec<i64>,
    pub target: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub strategy: SearchStrategy,
    /// Layout of the shared sequence and of every query's `b` buffer.
    pub layout: SequenceLayout,
    pub queries: Vec<PairSumQuery>,
}

#[derive(Default)]
pub struct BatchConfigBuilder {
    strategy: Option<SearchStrategy>,
    layout: Option<SequenceLayout>,
    queries: Option<Vec<PairSumQuery>>,
}

impl BatchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn layout(mut self, layout: SequenceLayout) -> Self {
        self.layout = Some(layout);
        self
    }
    pub fn queries(mut self, queries: Vec<PairSumQuery>) -> Self {
        self.queries = Some(queries);
        self
    }
    pub fn query(mut self, b: Vec<i64>, target: i64) -> Self {
        self.queries
            .get_or_insert_with(Vec::new)
            .push(PairSumQuery { b, target });
        self
    }

    pub fn build(self) -> Result<BatchConfig, ConfigError> {
        Ok(BatchConfig {
            strategy: self
                .strategy
                .ok_or(ConfigError::MissingParameter("strategy"))?,
            layout: self.layout.unwrap_or_default(),
            queries: self
                .queries
                .ok_or(ConfigError::MissingParameter("queries"))?,
        })
    }
}
