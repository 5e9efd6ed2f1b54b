//! Response aggregation
//!
//! Zips extraction results back onto the questions that produced them.

use crate::research::extractor::ExtractionResult;
use crate::research::topics::ResearchTopic;
use crate::types::{AnalysisResponse, FaqRecord};

/// Combine each topic with its extraction result into the public FAQ
/// records, preserving topic order. Pure and total.
pub fn assemble(topics: &[ResearchTopic], results: Vec<ExtractionResult>) -> AnalysisResponse {
    let faqs = topics
        .iter()
        .zip(results)
        .map(|(topic, result)| FaqRecord {
            label: topic.question.clone(),
            flag: result.verdict,
            content: result.rationale,
        })
        .collect();

    AnalysisResponse { faqs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::research::topics;
    use std::path::Path;

    #[test]
    fn test_assemble_preserves_topic_order() {
        let research_topics = topics::formulate(Path::new("/tmp"), "Acme").unwrap();
        let results = vec![
            ExtractionResult {
                verdict: true,
                rationale: "Explanation: a\n\nReferences: x".to_string(),
            },
            ExtractionResult {
                verdict: false,
                rationale: "Explanation: b\n\nReferences: y".to_string(),
            },
            ExtractionResult {
                verdict: true,
                rationale: "Explanation: c\n\nReferences: z".to_string(),
            },
        ];

        let response = assemble(&research_topics, results);

        assert_eq!(response.faqs.len(), 3);
        for (faq, topic) in response.faqs.iter().zip(&research_topics) {
            assert_eq!(faq.label, topic.question);
        }
        assert!(response.faqs[0].flag);
        assert!(!response.faqs[1].flag);
        assert!(response.faqs[2].flag);
        assert_eq!(response.faqs[1].content, "Explanation: b\n\nReferences: y");
    }
}
