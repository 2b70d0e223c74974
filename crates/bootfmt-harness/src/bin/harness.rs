//! CLI entrypoint for the bootfmt conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bootfmt_harness::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use bootfmt_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary};

/// Conformance tooling for bootfmt.
#[derive(Debug, Parser)]
#[command(name = "bootfmt-harness")]
#[command(about = "Conformance testing harness for the bootfmt formatter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Dump the builtin case corpus as a fixture JSON file.
    Corpus {
        /// Output path for the fixture JSON.
        #[arg(long)]
        output: PathBuf,
    },
    /// Capture host libc snprintf output for parity-eligible corpus cases.
    Capture {
        /// Output path for the captured fixture JSON.
        #[arg(long)]
        output: PathBuf,
    },
    /// Verify the engine against a fixture file.
    Verify {
        /// Fixture JSON file (defaults to the builtin corpus when omitted).
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Output report path (markdown; a .json sibling is written too).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Also diff parity-eligible cases against the host C library.
        #[arg(long)]
        host_parity: bool,
        /// Write a JSONL structured log of the run.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Render a quick diff between two rendered strings.
    Diff {
        /// Expected output.
        expected: String,
        /// Actual output.
        actual: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Corpus { output } => {
            let corpus = bootfmt_harness::builtin_corpus();
            std::fs::write(&output, corpus.to_json()?)?;
            eprintln!(
                "Wrote {} corpus cases to {}",
                corpus.cases.len(),
                output.display()
            );
        }
        Command::Capture { output } => {
            let captured = capture_host_fixture()?;
            std::fs::write(&output, captured.to_json()?)?;
            eprintln!(
                "Captured {} host cases to {}",
                captured.cases.len(),
                output.display()
            );
        }
        Command::Verify {
            fixture,
            report,
            host_parity,
            log,
        } => {
            let fixture_set = match &fixture {
                Some(path) => FixtureSet::from_file(path)?,
                None => bootfmt_harness::builtin_corpus(),
            };
            eprintln!(
                "Verifying {} cases from {}",
                fixture_set.cases.len(),
                fixture
                    .as_deref()
                    .map_or_else(|| String::from("builtin corpus"), |p| p.display().to_string()),
            );

            let mut runner = TestRunner::new("fixture-verify");
            if host_parity {
                runner = runner.with_host_parity();
            }
            let results = runner.run(&fixture_set);

            let mut emitter = match &log {
                Some(path) => Some(LogEmitter::to_file(path, "fixture-verify")?),
                None => None,
            };
            if let Some(emitter) = emitter.as_mut() {
                emitter.emit(LogLevel::Info, "verify_start")?;
                for r in &results {
                    let (level, outcome) = if r.passed {
                        (LogLevel::Info, Outcome::Pass)
                    } else {
                        (LogLevel::Error, Outcome::Fail)
                    };
                    let mut entry = LogEntry::new("", level, "case_verified")
                        .with_case(&r.case_name, &r.spec_ref)
                        .with_outcome(outcome);
                    if !r.passed {
                        entry = entry.with_comparison(&r.expected, &r.actual);
                    }
                    emitter.emit_entry(entry)?;
                }
                emitter.emit(LogLevel::Info, "verify_done")?;
                emitter.flush()?;
            }

            let summary = VerificationSummary::from_results(results);
            let report_doc = ConformanceReport {
                title: String::from("bootfmt Conformance Report"),
                engine: String::from("bootfmt-core"),
                timestamp: format!("{:?}", std::time::SystemTime::now()),
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Diff { expected, actual } => {
            print!("{}", bootfmt_harness::diff::render_diff(&expected, &actual));
        }
    }

    Ok(())
}

/// Build a fixture set whose expectations come from the host C library.
///
/// Only parity-eligible corpus cases are captured; cases the host dispatch
/// cannot carry (unsupported arity, interior NUL) are skipped.
fn capture_host_fixture() -> Result<FixtureSet, Box<dyn std::error::Error>> {
    let corpus = bootfmt_harness::builtin_corpus();
    let mut cases = Vec::new();
    for mut fixture in corpus.cases {
        let Some(host) = bootfmt_harness::host::host_render(&fixture) else {
            continue;
        };
        fixture.expected = host.output;
        fixture.expected_len = usize::try_from(host.len)?;
        cases.push(fixture);
    }
    Ok(FixtureSet {
        version: corpus.version,
        family: corpus.family,
        captured_at: format!("{:?}", std::time::SystemTime::now()),
        cases,
    })
}
