//! Concurrent due-diligence research orchestration
//!
//! This module composes the four research components linearly per request:
//!
//! 1. [`topics`] - derive the fixed, ordered question list for a company
//! 2. [`dispatcher`] - run one external research worker per question,
//!    all concurrently, and wait for every one to terminate
//! 3. [`extractor`] - parse each worker's report artifact into a verdict
//!    plus rationale, with defined fallbacks for missing data
//! 4. [`aggregator`] - zip verdicts back onto their questions, in order
//!
//! The request suspends on the completion barrier, so its latency tracks
//! the slowest worker rather than the sum of all three. Topic order is
//! the only correlation mechanism between dispatch and extraction, and it
//! is preserved end to end regardless of which worker finishes first.

/// Response assembly from topics and extraction results.
pub mod aggregator;
/// Concurrent worker process dispatch.
pub mod dispatcher;
/// Report artifact parsing.
pub mod extractor;
/// Topic formulation and artifact naming.
pub mod topics;

use crate::types::{AnalysisResponse, AppError, Result};
use crate::utils::config::ResearchConfig;

/// Run the full analysis for one company.
///
/// Dispatch is best-effort: worker failures are logged and degrade into
/// Unclear records at extraction time. The only error this returns on a
/// reachable path is `InvalidInput` for an empty company name, so a valid
/// request always yields exactly three records.
pub async fn analyze_company(
    config: &ResearchConfig,
    company_name: &str,
) -> Result<AnalysisResponse> {
    let topics = topics::formulate(&config.research_dir, company_name)?;

    let tasks = dispatcher::build_tasks(&config.worker_command, &topics);
    let outcomes = dispatcher::dispatch_all(tasks).await;
    let failed = outcomes.iter().filter(|o| !o.success).count();
    if failed > 0 {
        tracing::warn!(
            "{} of {} research workers reported failure",
            failed,
            outcomes.len()
        );
    }

    // Process termination is not proof the artifact exists: check each
    // report explicitly and classify what went wrong before parsing.
    let mut results = Vec::with_capacity(topics.len());
    for topic in &topics {
        let result = match extractor::extract_report(&topic.artifact).await {
            Ok(result) => result,
            Err(AppError::ArtifactMissing(path)) => {
                tracing::warn!("Report artifact missing for topic {}: {}", topic.index, path);
                extractor::ExtractionResult::unavailable()
            }
            Err(AppError::ArtifactUnreadable(msg)) => {
                tracing::warn!(
                    "Report artifact unreadable for topic {}: {}",
                    topic.index,
                    msg
                );
                extractor::ExtractionResult::unavailable()
            }
            Err(e) => return Err(e),
        };
        results.push(result);
    }

    Ok(aggregator::assemble(&topics, results))
}
