//! # weblog-stats
//!
//! A one-shot summarizer for web-server access logs. Downloads a log over
//! HTTP, parses each line as a 5-field comma-delimited record, and prints
//! three statistics:
//! - the percentage of requests for image resources,
//! - the most popular browser,
//! - request counts per hour of day, busiest hours first.
//!
//! The pipeline is strictly sequential and all-or-nothing: the first fetch,
//! parse, or timestamp error aborts the run.

/// Command-line argument parsing
pub mod cli;

/// Error taxonomy for the pipeline stages
pub mod error;

/// HTTP download of the raw log text
pub mod fetch;

/// Data model for parsed log lines
pub mod models;

/// Delimited-record parsing
pub mod parse;

/// The three summary analyzers
pub mod stats;
