//! Fixture loading and management.

use serde::{Deserialize, Serialize};

use bootfmt_core::Arg;

/// Errors raised while loading fixture files.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("io error reading fixture file: {0}")]
    Io(#[from] std::io::Error),
    /// The fixture file is not valid JSON for the schema.
    #[error("malformed fixture json: {0}")]
    Json(#[from] serde_json::Error),
}

/// One formatting argument in serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ArgSpec {
    /// Signed 32-bit value.
    Int(i32),
    /// Unsigned 32-bit value.
    Uint(u32),
    /// String payload (may contain an interior NUL, written as ` `).
    Str(String),
}

impl ArgSpec {
    /// Borrow as an engine argument.
    #[must_use]
    pub fn as_arg(&self) -> Arg<'_> {
        match self {
            ArgSpec::Int(v) => Arg::Int(*v),
            ArgSpec::Uint(v) => Arg::Uint(*v),
            ArgSpec::Str(s) => Arg::Str(s.as_bytes()),
        }
    }
}

/// A single fixture test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Behavior family reference (e.g. "sprintf/zero-pad").
    pub spec_ref: String,
    /// Format template.
    pub template: String,
    /// Arguments, in consumption order.
    pub args: Vec<ArgSpec>,
    /// Expected rendered output.
    pub expected: String,
    /// Expected returned length (bytes before the terminator).
    pub expected_len: usize,
    /// Whether a conforming host C library produces the same output,
    /// making the case eligible for differential verification.
    pub host_parity: bool,
    /// Free-form note (why parity is off, what the case pins down).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl FixtureCase {
    /// Borrow the argument list as engine arguments.
    #[must_use]
    pub fn engine_args(&self) -> Vec<Arg<'_>> {
        self.args.iter().map(ArgSpec::as_arg).collect()
    }
}

/// A collection of fixture cases for the formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// UTC timestamp of authoring or capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load a fixture set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the fixture set to pretty JSON.
    pub fn to_json(&self) -> Result<String, FixtureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arg_spec_round_trips_through_json() {
        let args = vec![
            ArgSpec::Int(-7),
            ArgSpec::Uint(0xFFFF_FFFF),
            ArgSpec::Str(String::from("ab\0cd")),
        ];
        let json = serde_json::to_string(&args).unwrap();
        let back: Vec<ArgSpec> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, args);
    }

    #[test]
    fn fixture_set_parses_handwritten_json() {
        let set = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"stdio/sprintf",
                "captured_at":"2026-08-20T00:00:00Z",
                "cases":[
                    {"name":"zero_pad","spec_ref":"sprintf/zero-pad",
                     "template":"%05d","args":[{"kind":"int","value":-3}],
                     "expected":"-0003","expected_len":5,"host_parity":true}
                ]
            }"#,
        )
        .expect("valid fixture json");
        assert_eq!(set.cases.len(), 1);
        assert_eq!(set.cases[0].args[0], ArgSpec::Int(-3));
        assert!(set.cases[0].notes.is_none());
    }

    #[test]
    fn from_file_reports_missing_path() {
        let err = FixtureSet::from_file(std::path::Path::new("/nonexistent/fixture.json"))
            .unwrap_err();
        assert!(matches!(err, FixtureError::Io(_)));
    }
}
