use crate::cli::BatchArgs;
use crate::config::PartialBatchFile;
use crate::config::defaults::DefaultsConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use pairsum::workflows::{self, batch::QueryOutcome, progress::ProgressReporter};
use tracing::{info, warn};

pub fn run(args: BatchArgs) -> Result<()> {
    let partial = PartialBatchFile::from_file(&args.file)?;
    info!("Merging batch file with CLI arguments...");
    let (a, config) = partial.merge_with_cli(&args, &DefaultsConfig::default())?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(
        "Running {} quer(ies) against a shared sequence of {} value(s).",
        config.queries.len(),
        a.len()
    );
    let outcomes = workflows::batch::run(&a, &config, &reporter)?;

    for line in render(&outcomes) {
        println!("{}", line);
    }

    if outcomes.iter().all(|o| !o.matched) {
        warn!("No query in the batch found a matching pair.");
    }
    Ok(())
}

fn render(outcomes: &[QueryOutcome]) -> Vec<String> {
    outcomes
        .iter()
        .map(|o| format!("query {} (target {}): {}", o.position + 1, o.target, o.matched))
        .collect()
}
