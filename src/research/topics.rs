//! Topic formulation
//!
//! Derives the fixed list of due-diligence questions, and the report
//! artifact each research worker is expected to produce, for a company.

use crate::types::{AppError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// The due-diligence questions evaluated for every company, in response
/// order. `{company}` is replaced with the requested company name.
pub const TOPIC_TEMPLATES: [&str; 3] = [
    "Does the company {company} have a human rights policy?",
    "Does the company {company} provide human rights/esg training to employees?",
    "Does the company {company} track scope 1 emissions?",
];

/// One due-diligence question paired with the artifact its worker writes.
#[derive(Debug, Clone)]
pub struct ResearchTopic {
    /// The fully interpolated question text.
    pub question: String,
    /// Where the worker's report is expected on disk.
    pub artifact: PathBuf,
    /// Position in the fixed topic order.
    pub index: usize,
}

static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\\/:*?"<>|]+"#).expect("valid filename pattern"));

/// File name of the report a worker writes for `question`.
///
/// Must stay in lockstep with the worker's own naming rule: each run of
/// filesystem-unsafe characters becomes a single space, then `.md` is
/// appended. A mismatch surfaces downstream as a missing artifact.
pub fn artifact_file_name(question: &str) -> String {
    format!("{}.md", UNSAFE_CHARS.replace_all(question, " "))
}

/// Produce the fixed, ordered topic list for `company_name`.
///
/// Fails with `InvalidInput` when the company name is empty.
pub fn formulate(research_dir: &Path, company_name: &str) -> Result<Vec<ResearchTopic>> {
    let company = company_name.trim();
    if company.is_empty() {
        return Err(AppError::InvalidInput(
            "Company name is required".to_string(),
        ));
    }

    let topics: Vec<ResearchTopic> = TOPIC_TEMPLATES
        .iter()
        .enumerate()
        .map(|(index, template)| {
            let question = template.replace("{company}", company);
            let artifact = research_dir.join(artifact_file_name(&question));
            ResearchTopic {
                question,
                artifact,
                index,
            }
        })
        .collect();

    // Two topics normalizing to the same artifact path would silently
    // overwrite each other. Cannot happen with the current templates;
    // guards template edits.
    for (i, a) in topics.iter().enumerate() {
        for b in &topics[i + 1..] {
            if a.artifact == b.artifact {
                tracing::warn!(
                    "Artifact path collision between topics {} and {}: {}",
                    a.index,
                    b.index,
                    a.artifact.display()
                );
            }
        }
    }

    Ok(topics)
}
