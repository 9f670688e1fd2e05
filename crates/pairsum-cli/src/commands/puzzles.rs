use crate::cli::{GoldenArgs, TreeArgs, UniqueArgs};
use crate::config::defaults::DefaultsConfig;
use crate::error::{CliError, Result};
use pairsum::puzzles::{golden, tree, unique};
use tracing::debug;

pub fn run_golden(args: GoldenArgs) -> Result<()> {
    println!("{}", golden_output(&args)?);
    Ok(())
}

pub fn run_unique(args: UniqueArgs) -> Result<()> {
    match unique_output(&args) {
        Some(text) => println!("{}", text),
        None => println!("(every character repeats)"),
    }
    Ok(())
}

pub fn run_tree(args: TreeArgs) -> Result<()> {
    print!("{}", tree_output(&args)?);
    Ok(())
}

fn golden_output(args: &GoldenArgs) -> Result<String> {
    let overflow = || {
        CliError::Argument(format!(
            "term {} does not fit in an unsigned 64-bit integer",
            args.index
        ))
    };

    if args.all {
        let terms: Vec<String> = golden::GoldenSequence::new()
            .take(args.index.saturating_add(1))
            .map(|term| term.to_string())
            .collect();
        if terms.len() <= args.index {
            return Err(overflow());
        }
        return Ok(terms.join(" "));
    }

    golden::golden_ratio(args.index)
        .map(|term| term.to_string())
        .ok_or_else(overflow)
}

fn unique_output(args: &UniqueArgs) -> Option<String> {
    debug!("Scanning {} character(s) for unique ones.", args.text.chars().count());
    if args.all {
        let chars = unique::unique_chars(&args.text);
        (!chars.is_empty()).then(|| chars.into_iter().collect())
    } else {
        unique::first_unique_char(&args.text).map(String::from)
    }
}

fn tree_output(args: &TreeArgs) -> Result<String> {
    let defaults = DefaultsConfig::default();
    let fill = args.fill.as_deref().unwrap_or(&defaults.tree_fill);
    tree::christmas_tree(args.height, fill).ok_or_else(|| {
        CliError::Argument(format!(
            "a tree of height {} is too large to render",
            args.height
        ))
    })
}
