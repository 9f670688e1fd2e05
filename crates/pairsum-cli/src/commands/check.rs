use crate::cli::CheckArgs;
use crate::error::Result;
use pairsum::core::sequence::{SequenceLayout, with_declared_len};
use pairsum::search::pair_sum::{SearchStrategy, find_pair_sum, has_pair_sum_with};
use tracing::{debug, info};

/// Decodes a raw value list: layout first, then the optional explicit length.
fn resolve<'a>(
    values: &'a [i64],
    layout: SequenceLayout,
    declared: Option<usize>,
) -> Result<&'a [i64]> {
    let decoded = layout.decode(values)?;
    match declared {
        Some(len) => Ok(with_declared_len(decoded, len)?),
        None => Ok(decoded),
    }
}

pub fn run(args: CheckArgs) -> Result<()> {
    println!("{}", evaluate(&args)?);
    Ok(())
}

/// Produces the text printed by `check`.
fn evaluate(args: &CheckArgs) -> Result<String> {
    let layout = SequenceLayout::from(args.layout);
    let strategy = SearchStrategy::from(args.strategy);

    let a = resolve(&args.a.0, layout, args.len_a)?;
    let b = resolve(&args.b.0, layout, args.len_b)?;
    debug!("Resolved sequences: A = {:?}, B = {:?}", a, b);

    info!(
        "Checking {} x {} pairing(s) for target {} using the {} strategy.",
        a.len(),
        b.len(),
        args.target,
        strategy
    );
    let found = has_pair_sum_with(strategy, a, b, args.target);

    if !found || !args.witness {
        return Ok(found.to_string());
    }
    debug!("Match found, locating the first witness pair.");
    Ok(match find_pair_sum(a, b, args.target) {
        Some((i, j)) => format!(
            "true: a[{}] + b[{}] = {} + {} = {}",
            i, j, a[i], b[j], args.target
        ),
        None => "false".to_string(),
    })
}
