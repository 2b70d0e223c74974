//! Report generation for conformance results.

use serde::{Deserialize, Serialize};

use crate::verify::VerificationSummary;

/// A conformance report for one verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Engine under test.
    pub engine: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Engine: {}\n", self.engine));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Reference | Status |\n");
        out.push_str("|------|-----------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                r.case_name, r.spec_ref, status
            ));
        }

        let failures: Vec<_> = self.summary.results.iter().filter(|r| !r.passed).collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n\n");
            for r in failures {
                out.push_str(&format!("### {}\n\n", r.case_name));
                if let Some(diff) = &r.diff {
                    out.push_str("```\n");
                    out.push_str(diff);
                    if !diff.ends_with('\n') {
                        out.push('\n');
                    }
                    out.push_str("```\n\n");
                }
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::VerificationResult;

    #[test]
    fn markdown_lists_cases_and_failures() {
        let summary = VerificationSummary::from_results(vec![
            VerificationResult {
                case_name: String::from("good"),
                spec_ref: String::from("sprintf/decimal"),
                passed: true,
                expected: String::from("1"),
                actual: String::from("1"),
                expected_len: 1,
                actual_len: Some(1),
                diff: None,
            },
            VerificationResult {
                case_name: String::from("bad"),
                spec_ref: String::from("sprintf/hex"),
                passed: false,
                expected: String::from("ff"),
                actual: String::from("fe"),
                expected_len: 2,
                actual_len: Some(2),
                diff: Some(String::from("--- expected\n")),
            },
        ]);
        let report = ConformanceReport {
            title: String::from("bootfmt Conformance Report"),
            engine: String::from("bootfmt-core"),
            timestamp: String::from("2026-08-20T00:00:00Z"),
            summary,
        };

        let md = report.to_markdown();
        assert!(md.contains("| good | sprintf/decimal | PASS |"));
        assert!(md.contains("| bad | sprintf/hex | FAIL |"));
        assert!(md.contains("## Failures"));
        assert!(md.contains("### bad"));

        let json = report.to_json();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["summary"]["failed"], 1);
    }
}
