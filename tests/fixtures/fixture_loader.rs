/// Fixture loader
///
/// Reads the JSON table of URL cases. Each entry is either a comment string,
/// a case with its expected parts, or an input that must fail to parse.
use serde::Deserialize;
use std::collections::BTreeMap;

const URL_PARTS_JSON: &str = include_str!("url_parts.json");

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// Malformed input and the expected error variant
    Failure { input: String, failure: String },
    /// Well-formed input with every expected part
    Parts(Box<PartsCase>),
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct PartsCase {
    pub input: String,
    pub scheme: String,
    pub user: String,
    pub pass: String,
    pub host: String,
    pub port: u16,
    pub dir: String,
    pub file: String,
    pub ext: String,
    pub query: String,
    pub fragment: String,
    pub locality: Locality,
    pub context: String,
    #[serde(default)]
    pub get: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Locality {
    Absolute,
    RootRelative,
    ContextRelative,
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failures: Vec<FixtureFailure>,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Passed: {}, Failed: {}",
            self.passed,
            self.failures.len()
        );
        for failure in &self.failures {
            summary.push_str(&format!(
                "\n  {:?} [{}]: expected {:?}, got {:?}",
                failure.input, failure.field, failure.expected, failure.actual
            ));
        }
        summary
    }
}

/// Load every case from the bundled JSON table
pub fn load_url_parts_cases() -> Vec<TestCase> {
    serde_json::from_str(URL_PARTS_JSON).expect("url_parts.json should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_url_parts_cases() {
        let cases = load_url_parts_cases();
        let parts = cases
            .iter()
            .filter(|case| matches!(case, TestCase::Parts(_)))
            .count();
        let failures = cases
            .iter()
            .filter(|case| matches!(case, TestCase::Failure { .. }))
            .count();
        assert_eq!(parts, 15);
        assert_eq!(failures, 4);
    }
}
