use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryReport {
    pub candidates: Vec<String>,
    pub summary: Summary,
}

impl DiscoveryReport {
    pub fn new(candidates: Vec<String>) -> Self {
        let summary = Summary {
            total: candidates.len(),
        };
        DiscoveryReport {
            candidates,
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

pub trait OutputFormatter {
    fn format(&self, report: &DiscoveryReport) -> String;
}

pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &DiscoveryReport) -> String {
        let version = env!("CARGO_PKG_VERSION");
        let candidates_text = if report.summary.total == 1 {
            "candidate"
        } else {
            "candidates"
        };

        let mut result = format!(
            "pyscout v{}  {}  {} {}\n",
            version,
            "•".dimmed(),
            report.summary.total,
            candidates_text
        );
        for candidate in &report.candidates {
            result.push_str(candidate);
            result.push('\n');
        }
        result
    }
}

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &DiscoveryReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|e| {
            // Use serde_json to properly escape the error message
            let escaped = serde_json::to_string(&e.to_string())
                .unwrap_or_else(|_| "\"serialization error\"".to_string());
            format!("{{\"error\": {}}}", escaped)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn make_report(candidates: &[&str]) -> DiscoveryReport {
        DiscoveryReport::new(candidates.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_default_output_format_is_text() {
        assert_matches!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_empty_report() {
        let report = make_report(&[]);
        assert!(report.is_empty());
        assert_eq!(report.summary.total, 0);
    }

    #[test]
    fn test_text_format_lists_one_candidate_per_line() {
        let report = make_report(&["tests/test_alpha.py", "tests/test_beta.py"]);
        let output = TextFormatter.format(&report);

        assert!(output.contains("2 candidates"));
        assert!(output.contains("tests/test_alpha.py\n"));
        assert!(output.contains("tests/test_beta.py\n"));
    }

    #[test]
    fn test_text_format_singular_candidate() {
        let report = make_report(&["tests/test_alpha.py"]);
        let output = TextFormatter.format(&report);
        assert!(output.contains("1 candidate"));
        assert!(!output.contains("1 candidates"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let report = make_report(&["tests/test_alpha.py"]);
        let output = JsonFormatter.format(&report);

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["summary"]["total"], 1);
        assert_eq!(value["candidates"][0], "tests/test_alpha.py");
    }
}
