use crate::utils::parser::IntList;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pairsum::core::sequence::SequenceLayout;
use pairsum::search::pair_sum::SearchStrategy;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "PairSum contributors",
    version,
    about = "PairSum CLI - answer pair-sum queries over integer sequences and run a few small sequence and text puzzles.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether some element of A plus some element of B equals the target.
    Check(CheckArgs),
    /// Answer many queries against one shared sequence read from a TOML file.
    Batch(BatchArgs),
    /// Print a term of the 1, 1, 2, 3, 5, ... sequence.
    Golden(GoldenArgs),
    /// Print the first character that occurs exactly once in a text.
    Unique(UniqueArgs),
    /// Draw a text christmas tree.
    Tree(TreeArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    Linear,
    Hashed,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Linear => SearchStrategy::Linear,
            StrategyArg::Hashed => SearchStrategy::Hashed,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    /// Every value is data.
    Plain,
    /// The first value is the number of data values that follow.
    LengthPrefixed,
}

impl From<LayoutArg> for SequenceLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Plain => SequenceLayout::Plain,
            LayoutArg::LengthPrefixed => SequenceLayout::LengthPrefixed,
        }
    }
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Comma-separated values of the first sequence (e.g., '1,2,-3').
    #[arg(short = 'a', long = "a", required = true, allow_hyphen_values = true, value_name = "LIST")]
    pub a: IntList,

    /// Comma-separated values of the second sequence.
    #[arg(short = 'b', long = "b", required = true, allow_hyphen_values = true, value_name = "LIST")]
    pub b: IntList,

    /// Value that a pair must sum to.
    #[arg(short, long, required = true, allow_hyphen_values = true, value_name = "INT")]
    pub target: i64,

    /// Search strategy to use.
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Hashed)]
    pub strategy: StrategyArg,

    /// How both value lists are laid out.
    #[arg(long, value_enum, default_value_t = LayoutArg::Plain)]
    pub layout: LayoutArg,

    /// Use only the first N values of A (after layout decoding).
    #[arg(long, value_name = "N")]
    pub len_a: Option<usize>,

    /// Use only the first N values of B (after layout decoding).
    #[arg(long, value_name = "N")]
    pub len_b: Option<usize>,

    /// Also print the first matching pair.
    #[arg(short, long)]
    pub witness: bool,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Path to the TOML file holding the shared sequence and the queries.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub file: PathBuf,

    /// Override the search strategy from the file.
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Override the buffer layout from the file.
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,
}

#[derive(Args, Debug)]
pub struct GoldenArgs {
    /// Zero-based index of the term.
    #[arg(required = true)]
    pub index: usize,

    /// Print every term up to and including INDEX.
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug)]
pub struct UniqueArgs {
    /// Text to scan.
    #[arg(required = true, allow_hyphen_values = true)]
    pub text: String,

    /// Print every character that occurs exactly once, in order.
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Number of rows.
    #[arg(required = true)]
    pub height: usize,

    /// Text repeated to fill each row. Defaults to '#'.
    #[arg(short, long)]
    pub fill: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_negative_values() {
        let cli = Cli::parse_from([
            "pairsum", "check", "-a", "-3,1,7", "-b", "7,10", "-t", "-4",
        ]);
        let Commands::Check(args) = cli.command else {
            panic!("Expected 'check' subcommand");
        };
        assert_eq!(args.a.0, vec![-3, 1, 7]);
        assert_eq!(args.b.0, vec![7, 10]);
        assert_eq!(args.target, -4);
        assert_eq!(args.strategy, StrategyArg::Hashed);
        assert_eq!(args.layout, LayoutArg::Plain);
        assert!(!args.witness);
    }

    #[test]
    fn check_parses_layout_and_lengths() {
        let cli = Cli::parse_from([
            "pairsum",
            "check",
            "--a",
            "3,1,2,3",
            "--b",
            "1,5",
            "--target",
            "8",
            "--layout",
            "length-prefixed",
            "--len-b",
            "1",
            "--strategy",
            "linear",
            "--witness",
        ]);
        let Commands::Check(args) = cli.command else {
            panic!("Expected 'check' subcommand");
        };
        assert_eq!(args.layout, LayoutArg::LengthPrefixed);
        assert_eq!(args.len_a, None);
        assert_eq!(args.len_b, Some(1));
        assert_eq!(args.strategy, StrategyArg::Linear);
        assert!(args.witness);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["pairsum", "-v", "-q", "tree", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_are_accepted_after_subcommand() {
        let cli = Cli::parse_from(["pairsum", "golden", "6", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Golden(GoldenArgs { index: 6, all: false })));
    }

    #[test]
    fn golden_all_flag_lists_every_term() {
        let cli = Cli::parse_from(["pairsum", "golden", "6", "--all"]);
        assert!(matches!(cli.command, Commands::Golden(GoldenArgs { index: 6, all: true })));
    }

    #[test]
    fn tree_accepts_the_largest_height() {
        let cli = Cli::parse_from(["pairsum", "tree", "18446744073709551615", "--fill", "*"]);
        let Commands::Tree(args) = cli.command else {
            panic!("Expected 'tree' subcommand");
        };
        assert_eq!(args.height, usize::MAX);
        assert_eq!(args.fill.as_deref(), Some("*"));
    }

    #[test]
    fn malformed_list_is_rejected() {
        let result = Cli::try_parse_from(["pairsum", "check", "-a", "1,x", "-b", "1", "-t", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
