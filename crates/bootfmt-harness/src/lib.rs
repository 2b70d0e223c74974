//! Conformance testing harness for the bootfmt formatter.
//!
//! This crate provides:
//! - Builtin corpus: the authored case battery covering the format dialect
//! - Fixture files: JSON schema for cases, loading, and serialization
//! - Host capture: record host libc `snprintf` behavior for parity cases
//! - Verification: run the engine per case, diff against expectations
//! - Report generation: human-readable + machine-readable conformance reports
//! - Structured logging: JSONL records for conformance runs

#![deny(unsafe_code)]

pub mod corpus;
pub mod diff;
pub mod fixtures;
pub mod host;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use corpus::builtin_corpus;
pub use fixtures::{ArgSpec, FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
