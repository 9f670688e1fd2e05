//! # Search Module
//!
//! Pair-sum predicates over integer sequences.
//!
//! Every function in [`pair_sum`] computes the same predicate, "some `a` in `A` plus some `b`
//! in `B` equals the target"; they differ only in input shape and cost:
//!
//! - **Linear scan** ([`pair_sum::has_pair_sum`]) - `O(|A|·|B|)`, no allocation
//! - **Hashed** ([`pair_sum::has_pair_sum_fast`]) - `O(|A| + |B|)` expected, builds a set over `A`
//! - **Pre-indexed** ([`pair_sum::has_pair_sum_with_index`]) - reuses a
//!   [`MembershipIndex`](crate::core::index::MembershipIndex) across queries

pub mod pair_sum;
