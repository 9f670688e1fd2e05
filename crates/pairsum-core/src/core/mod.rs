//! # Core Module
//!
//! Input handling and lookup structures shared by every pair-sum variant.
//!
//! - **Sequence Adapters** ([`sequence`]) - Bounds-checked conversion of explicit-length and
//!   length-prefixed buffers into slices, reporting [`InvalidArgument`](sequence::InvalidArgument)
//!   instead of reading past the end of the data
//! - **Membership Index** ([`index`]) - Immutable deduplicated set of values used to accelerate
//!   repeated queries against the same sequence

pub mod index;
pub mod sequence;
