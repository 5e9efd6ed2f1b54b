//! Report extraction
//!
//! Parses the markdown report a research worker leaves behind into a
//! structured verdict plus supporting text. A report is expected to carry
//! three labeled sections:
//!
//! ```text
//! Answer: Yes
//!
//! Explanation: The company publishes a standalone policy document.
//!
//! References:
//! https://example.com/policy
//! ```
//!
//! Each section is extracted independently; any section that is absent or
//! malformed falls back to its designed default, so parsing never fails.
//! Only reading can fail, and those failures are classified so the caller
//! can tell a worker that never wrote from one that wrote garbage.

use crate::types::{AppError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::ErrorKind;
use std::path::Path;

/// Fallback text when a report has no usable `Explanation:` section.
pub const NO_EXPLANATION: &str = "No detailed explanation found.";
/// Fallback text when a report has no usable `References:` section.
pub const NO_REFERENCES: &str = "No references found.";

static ANSWER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Answer: (Yes|No|Unclear)\n\n").expect("valid answer pattern"));
static EXPLANATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)Explanation: (.*?)\n\nReferences:").expect("valid explanation pattern")
});
static REFERENCES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)References:\n(.*?)$").expect("valid references pattern"));

/// Verdict and rationale extracted from one report artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    /// True only for a literal `Answer: Yes`.
    pub verdict: bool,
    /// Explanation and references, concatenated.
    pub rationale: String,
}

impl ExtractionResult {
    /// The record used when a report is missing or unreadable: an Unclear
    /// verdict carrying both fallback texts.
    pub fn unavailable() -> Self {
        Self {
            verdict: false,
            rationale: format!("Explanation: {NO_EXPLANATION}\n\nReferences: {NO_REFERENCES}"),
        }
    }
}

/// Read the report at `path` and parse it.
///
/// Read failures are classified: a file that does not exist is
/// `ArtifactMissing`, anything else (permissions, invalid UTF-8) is
/// `ArtifactUnreadable`.
pub async fn extract_report(path: &Path) -> Result<ExtractionResult> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::ArtifactMissing(path.display().to_string()),
            _ => AppError::ArtifactUnreadable(format!("{}: {}", path.display(), e)),
        })?;

    Ok(parse_report(&content))
}

/// Parse report content into a verdict and rationale.
///
/// The answer token defaults to `Unclear` when the `Answer:` section is
/// absent or carries anything other than the literal `Yes`/`No`/`Unclear`
/// tokens; the explanation and references sections fall back to
/// [`NO_EXPLANATION`] and [`NO_REFERENCES`]. The three extractions are
/// independent of one another.
pub fn parse_report(content: &str) -> ExtractionResult {
    let answer = ANSWER_RE
        .captures(content)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| "Unclear".to_string());

    let explanation = EXPLANATION_RE
        .captures(content)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| NO_EXPLANATION.to_string());

    let references = REFERENCES_RE
        .captures(content)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| NO_REFERENCES.to_string());

    ExtractionResult {
        verdict: answer == "Yes",
        rationale: format!("Explanation: {explanation}\n\nReferences: {references}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    const FULL_REPORT: &str = "Answer: Yes\n\nExplanation: X\n\nReferences:\nY";

    #[test]
    fn test_full_report_round_trip() {
        let result = parse_report(FULL_REPORT);
        assert!(result.verdict);
        assert_eq!(result.rationale, "Explanation: X\n\nReferences: Y");
    }

    #[rstest]
    #[case("Answer: Yes\n\n", true)]
    #[case("Answer: No\n\n", false)]
    #[case("Answer: Unclear\n\n", false)]
    // Token not followed by a blank line does not match.
    #[case("Answer: Yes\n", false)]
    // Unknown token falls back to Unclear.
    #[case("Answer: Maybe\n\n", false)]
    #[case("no answer section at all", false)]
    fn test_answer_section_drives_verdict(#[case] content: &str, #[case] verdict: bool) {
        assert_eq!(parse_report(content).verdict, verdict);
    }

    #[test]
    fn test_missing_explanation_falls_back() {
        let result = parse_report("Answer: Yes\n\nReferences:\nY");
        assert!(result.verdict);
        assert!(result
            .rationale
            .starts_with("Explanation: No detailed explanation found."));
        assert!(result.rationale.ends_with("References: Y"));
    }

    #[test]
    fn test_missing_references_falls_back() {
        let result = parse_report("Answer: No\n\nExplanation: X\n\nReferences:");
        // `References:` with no trailing newline terminates the explanation
        // but yields no references body.
        assert_eq!(
            result.rationale,
            "Explanation: X\n\nReferences: No references found."
        );
    }

    #[test]
    fn test_empty_report_uses_all_fallbacks() {
        let result = parse_report("");
        assert!(!result.verdict);
        assert_eq!(result, ExtractionResult::unavailable());
    }

    #[test]
    fn test_multiline_sections_are_preserved() {
        let content =
            "Answer: Yes\n\nExplanation: first line\nsecond line\n\nReferences:\nref one\nref two\n";
        let result = parse_report(content);
        assert_eq!(
            result.rationale,
            "Explanation: first line\nsecond line\n\nReferences: ref one\nref two"
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        assert_eq!(parse_report(FULL_REPORT), parse_report(FULL_REPORT));
    }

    #[tokio::test]
    async fn test_extract_report_classifies_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("no such report.md");

        match extract_report(&path).await {
            Err(AppError::ArtifactMissing(msg)) => assert!(msg.contains("no such report")),
            other => panic!("expected ArtifactMissing, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_extract_report_classifies_invalid_utf8() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.md");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x9f]).unwrap();

        match extract_report(&path).await {
            Err(AppError::ArtifactUnreadable(_)) => {}
            other => panic!("expected ArtifactUnreadable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_extract_report_reads_report_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.md");
        std::fs::write(&path, FULL_REPORT).unwrap();

        let result = extract_report(&path).await.unwrap();
        assert!(result.verdict);
        assert_eq!(result.rationale, "Explanation: X\n\nReferences: Y");
    }
}
