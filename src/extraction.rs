//! Grok-based value extraction from captured check output.
//!
//! A check may declare one or more grok patterns. Each pattern is compiled
//! eagerly at construction and applied independently to the full combined
//! output at match time. Named captures from all patterns merge into a
//! single map; later patterns override earlier ones for duplicate keys. A
//! pattern that does not match contributes nothing -- no capture, no
//! error.

use std::collections::BTreeMap;

use crate::config::GrokSpec;

/// How much of the target output a match-time diagnostic may quote.
const DIAGNOSTIC_SNIPPET_LEN: usize = 100;

/// A compiled set of grok patterns.
#[derive(Debug)]
pub struct GrokMatcher {
    patterns: Vec<(String, grok::Pattern)>,
}

impl GrokMatcher {
    /// Compile every pattern in the spec against the default grok pattern
    /// library (`%{NUMBER:x}`, `%{INT:n}`, `%{WORD:w}`, `%{DATA:d}`,
    /// `%{GREEDYDATA:d}`, `%{PATH:p}`, `%{IP:ip}`, ...).
    pub fn compile(spec: &GrokSpec) -> Result<Self, String> {
        let mut grok = grok::Grok::with_patterns();
        let mut patterns = Vec::new();
        for source in spec.patterns() {
            let compiled = grok
                .compile(source, true)
                .map_err(|e| format!("invalid grok pattern {source:?}: {e}"))?;
            patterns.push((source.to_string(), compiled));
        }
        Ok(Self { patterns })
    }

    /// Apply every pattern to `output` and merge the named captures.
    #[must_use]
    pub fn extract(&self, output: &str) -> BTreeMap<String, String> {
        let mut captures = BTreeMap::new();
        for (_, pattern) in &self.patterns {
            if let Some(matches) = pattern.match_against(output) {
                for (name, value) in matches.iter() {
                    captures.insert(name.to_string(), value.to_string());
                }
            }
        }
        captures
    }

    /// Number of compiled patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// A short prefix of the target output for diagnostics.
#[must_use]
pub fn output_snippet(output: &str) -> &str {
    if output.len() <= DIAGNOSTIC_SNIPPET_LEN {
        return output;
    }
    let mut end = DIAGNOSTIC_SNIPPET_LEN;
    while !output.is_char_boundary(end) {
        end -= 1;
    }
    &output[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(patterns: &[&str]) -> GrokMatcher {
        let spec = if patterns.len() == 1 {
            GrokSpec::One(patterns[0].to_string())
        } else {
            GrokSpec::Many(patterns.iter().map(|p| p.to_string()).collect())
        };
        GrokMatcher::compile(&spec).expect("patterns should compile")
    }

    #[test]
    fn extracts_a_number() {
        let m = matcher(&["coverage: %{NUMBER:coverage}%"]);
        let captures = m.extract("coverage: 72%");
        assert_eq!(captures.get("coverage").map(String::as_str), Some("72"));
    }

    #[test]
    fn non_matching_pattern_contributes_nothing() {
        let m = matcher(&["coverage: %{NUMBER:coverage}%"]);
        let captures = m.extract("nothing to see here");
        assert!(captures.is_empty());
    }

    #[test]
    fn merges_captures_across_patterns() {
        let m = matcher(&["passed %{INT:passed}", "failed %{INT:failed}"]);
        let captures = m.extract("passed 10, failed 2");
        assert_eq!(captures.get("passed").map(String::as_str), Some("10"));
        assert_eq!(captures.get("failed").map(String::as_str), Some("2"));
    }

    #[test]
    fn later_patterns_override_duplicate_keys() {
        let m = matcher(&["first %{INT:n}", "second %{INT:n}"]);
        let captures = m.extract("first 1 second 2");
        assert_eq!(captures.get("n").map(String::as_str), Some("2"));
    }

    #[test]
    fn word_and_greedydata_captures() {
        let m = matcher(&["%{WORD:tool} says %{GREEDYDATA:rest}"]);
        let captures = m.extract("linter says all clear now");
        assert_eq!(captures.get("tool").map(String::as_str), Some("linter"));
        assert_eq!(
            captures.get("rest").map(String::as_str),
            Some("all clear now")
        );
    }

    #[test]
    fn invalid_pattern_reports_the_pattern_text() {
        let err = GrokMatcher::compile(&GrokSpec::One("%{NOSUCHPATTERN:x}".to_string()))
            .expect_err("unknown pattern name should fail to compile");
        assert!(err.contains("%{NOSUCHPATTERN:x}"), "{err}");
    }

    #[test]
    fn snippet_is_bounded() {
        let long = "x".repeat(500);
        assert!(output_snippet(&long).len() <= 101);
        assert_eq!(output_snippet("short"), "short");
    }
}
