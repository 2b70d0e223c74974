//! Test execution engine.

use bootfmt_core::snprintf;

use crate::diff;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::verify::VerificationResult;

/// Output buffer size for case execution; comfortably above any authored
/// expansion.
const CASE_BUF: usize = 512;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Also diff parity-eligible cases against the host C library.
    pub check_host_parity: bool,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
            check_host_parity: false,
        }
    }

    /// Enable host-parity diffing for eligible cases. A parity mismatch
    /// fails the case even when the authored expectation matches.
    #[must_use]
    pub fn with_host_parity(mut self) -> Self {
        self.check_host_parity = true;
        self
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|fixture| self.run_case(fixture))
            .collect()
    }

    fn run_case(&self, fixture: &FixtureCase) -> VerificationResult {
        let args = fixture.engine_args();
        let mut buf = [0u8; CASE_BUF];
        let (actual, actual_len) = match snprintf(&mut buf, fixture.template.as_bytes(), &args)
        {
            Ok(n) => {
                let end = n.min(CASE_BUF - 1);
                (String::from_utf8_lossy(&buf[..end]).into_owned(), Some(n))
            }
            Err(err) => (format!("error: {err}"), None),
        };

        let output_ok = actual == fixture.expected && actual_len == Some(fixture.expected_len);
        let mut notes = Vec::new();

        #[cfg(unix)]
        if self.check_host_parity {
            if let Some(host) = crate::host::host_render(fixture) {
                if host.output != actual {
                    notes.push(format!(
                        "host parity mismatch: host={:?}, impl={:?}",
                        host.output, actual
                    ));
                }
            }
        }

        let diff_out = if output_ok {
            if notes.is_empty() {
                None
            } else {
                Some(notes.join("\n"))
            }
        } else {
            Some(diff::render_diff(&fixture.expected, &actual))
        };

        VerificationResult {
            case_name: fixture.name.clone(),
            spec_ref: fixture.spec_ref.clone(),
            passed: output_ok && notes.is_empty(),
            expected: fixture.expected.clone(),
            actual,
            expected_len: fixture.expected_len,
            actual_len,
            diff: diff_out,
        }
    }
}
