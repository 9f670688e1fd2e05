//! # PairSum Core Library
//!
//! Answers the pair-sum query: does some element of a sequence `A` plus some element of a
//! sequence `B` equal a given target?
//!
//! ## Architectural Philosophy
//!
//! The library is split into layers so each can be tested on its own:
//!
//! - **[`core`]: The Foundation.** Checked adapters that turn legacy buffer layouts into plain
//!   slices, and the immutable [`MembershipIndex`](core::index::MembershipIndex).
//!
//! - **[`search`]: The Algorithms.** The linear-scan and hash-accelerated pair-sum predicates,
//!   witness search, and strategy dispatch. Every variant computes the same predicate.
//!
//! - **[`puzzles`]: Small Sequence and Text Algorithms.** A Fibonacci-like generator, unique
//!   character scans, and a text tree renderer.
//!
//! - **[`workflows`]: The Public API.** Batch execution of many queries against one shared
//!   sequence, with configuration and progress reporting.

pub mod core;
pub mod puzzles;
pub mod search;
pub mod workflows;
