use crate::search::pair_sum::{
    SearchStrategy, build_membership_index, has_pair_sum, has_pair_sum_with_index,
};
use crate::workflows::config::BatchConfig;
use crate::workflows::error::WorkflowError;
use crate::workflows::progress::{Progress, ProgressReporter};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOutcome {
    /// Position of the query in [`BatchConfig::queries`].
    pub position: usize,
    pub target: i64,
    pub matched: bool,
}

/// Answers every query of `config` against the shared sequence `a`.
///
/// All buffers are decoded with `config.layout` before any query runs, so a malformed buffer
/// fails the whole batch without partial progress. With [`SearchStrategy::Hashed`] the
/// membership index over `a` is built once and shared by every query.
#[instrument(skip_all, name = "batch_workflow", fields(strategy = %config.strategy, queries = config.queries.len()))]
pub fn run(
    a: &[i64],
    config: &BatchConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<QueryOutcome>, WorkflowError> {
    if config.queries.is_empty() {
        return Err(WorkflowError::EmptyBatch);
    }

    let a = config.layout.decode(a)?;
    let sequences = config
        .queries
        .iter()
        .map(|query| config.layout.decode(&query.b))
        .collect::<Result<Vec<_>, _>>()?;

    reporter.report(Progress::BatchStart {
        total_queries: config.queries.len() as u64,
    });

    let index = match config.strategy {
        SearchStrategy::Hashed => {
            let index = build_membership_index(a);
            info!(
                "Built membership index with {} distinct value(s) from {} element(s).",
                index.len(),
                a.len()
            );
            reporter.message(format!("Indexed {} distinct value(s)", index.len()));
            Some(index)
        }
        SearchStrategy::Linear => None,
    };

    let outcomes: Vec<QueryOutcome> = config
        .queries
        .iter()
        .zip(sequences)
        .enumerate()
        .map(|(position, (query, b))| {
            let matched = match &index {
                Some(index) => has_pair_sum_with_index(index, b, query.target),
                None => has_pair_sum(a, b, query.target),
            };
            debug!(position, target = query.target, matched, "Query answered");
            reporter.report(Progress::QueryFinished { position, matched });
            QueryOutcome {
                position,
                target: query.target,
                matched,
            }
        })
        .collect();

    reporter.report(Progress::BatchFinish);
    info!(
        "Batch finished: {} of {} quer(ies) matched.",
        outcomes.iter().filter(|o| o.matched).count(),
        outcomes.len()
    );

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::{InvalidArgument, SequenceLayout};
    use crate::workflows::config::BatchConfigBuilder;
    use std::sync::Mutex;

    fn config(strategy: SearchStrategy) -> BatchConfig {
        BatchConfigBuilder::new()
            .strategy(strategy)
            .query(vec![1, 2, 3, 4, 5], 10)
            .query(vec![1, 2, 3, 4, 5], 11)
            .query(vec![], 3)
            .query(vec![7, 10], 4)
            .build()
            .unwrap()
    }

    #[test]
    fn both_strategies_produce_the_same_outcomes() {
        let a = [1, 2, 3, 4, 5, -3];
        let reporter = ProgressReporter::new();

        let linear = run(&a, &config(SearchStrategy::Linear), &reporter).unwrap();
        let hashed = run(&a, &config(SearchStrategy::Hashed), &reporter).unwrap();

        assert_eq!(linear, hashed);
        let matched: Vec<bool> = hashed.iter().map(|o| o.matched).collect();
        assert_eq!(matched, vec![true, false, false, true]);
        assert_eq!(hashed[3].position, 3);
        assert_eq!(hashed[3].target, 4);
    }

    #[test]
    fn outcomes_match_single_queries() {
        let a = [4, -1, 9, 4];
        let config = config(SearchStrategy::Hashed);
        let outcomes = run(&a, &config, &ProgressReporter::new()).unwrap();
        for (outcome, query) in outcomes.iter().zip(&config.queries) {
            assert_eq!(outcome.matched, has_pair_sum(&a, &query.b, query.target));
        }
    }

    #[test]
    fn empty_batch_is_rejected() {
        let config = BatchConfigBuilder::new()
            .strategy(SearchStrategy::Hashed)
            .queries(vec![])
            .build()
            .unwrap();
        let result = run(&[1], &config, &ProgressReporter::new());
        assert_eq!(result, Err(WorkflowError::EmptyBatch));
    }

    #[test]
    fn length_prefixed_buffers_are_decoded() {
        let config = BatchConfigBuilder::new()
            .strategy(SearchStrategy::Linear)
            .layout(SequenceLayout::LengthPrefixed)
            .query(vec![2, 7, 10], 4)
            .query(vec![1, 3, 99], 102)
            .build()
            .unwrap();
        let outcomes = run(&[3, -3, 1, 7, 99], &config, &ProgressReporter::new()).unwrap();
        // 99 is past the declared count of the second query's buffer.
        assert!(outcomes[0].matched);
        assert!(!outcomes[1].matched);
    }

    #[test]
    fn malformed_query_buffer_fails_before_any_progress() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            events.lock().unwrap().push(event);
        }));
        let config = BatchConfigBuilder::new()
            .strategy(SearchStrategy::Hashed)
            .layout(SequenceLayout::LengthPrefixed)
            .query(vec![1, 5], 6)
            .query(vec![4, 1], 2)
            .build()
            .unwrap();

        let result = run(&[1, 1], &config, &reporter);
        drop(reporter);

        assert_eq!(
            result,
            Err(WorkflowError::InvalidArgument(
                InvalidArgument::LengthExceedsBuffer {
                    declared: 4,
                    available: 1
                }
            ))
        );
        assert!(events.into_inner().unwrap().is_empty());
    }

    #[test]
    fn progress_events_cover_every_query() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            events.lock().unwrap().push(event);
        }));

        run(&[1, 2], &config(SearchStrategy::Linear), &reporter).unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events.first(), Some(&Progress::BatchStart { total_queries: 4 }));
        assert_eq!(events.last(), Some(&Progress::BatchFinish));
        let finished = events
            .iter()
            .filter(|e| matches!(e, Progress::QueryFinished { .. }))
            .count();
        assert_eq!(finished, 4);
    }
}
