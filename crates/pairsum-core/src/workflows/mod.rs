//! # Workflows Module
//!
//! High-level entry points that run many pair-sum queries as one unit of work.
//!
//! ## Architecture
//!
//! - **Batch Workflow** ([`batch`]) - Answers a list of queries against one shared sequence,
//!   building its membership index once when the hashed strategy is selected
//! - **Configuration** ([`config`]) - Query lists, strategy selection, and the config builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Workflow error type

pub mod batch;
pub mod config;
pub mod error;
pub mod progress;
