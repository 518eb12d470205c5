//! Turning a form submission into a summary.

use tracing::info;

use crate::{form::Submission, mock, summary::VideoSummary};

/// Produces a summary for a submitted video.
///
/// The results page only ever sees the returned [`VideoSummary`], so a
/// backend-driven implementation can replace [`MockSummarizer`] without
/// touching the UI.
pub trait Summarizer: Send + Sync {
    /// Summarize the submitted video.
    fn summarize(&self, submission: &Submission) -> VideoSummary;
}

/// Returns the canned article for every submission.
///
/// The URL, level and options are echoed into the payload; the content is
/// fixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSummarizer;

impl Summarizer for MockSummarizer {
    fn summarize(&self, submission: &Submission) -> VideoSummary {
        info!(
            url = %submission.url,
            level = %submission.comprehensiveness,
            model = submission.options.ai_model.id(),
            "summarizing with canned content"
        );

        mock::canned_summary(
            Some(submission.url.clone()),
            submission.comprehensiveness,
            submission.options,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Comprehensiveness, ProcessingOptions};

    #[test]
    fn test_mock_ignores_url_for_content() {
        let a = MockSummarizer.summarize(&Submission {
            url: "https://youtu.be/one".to_string(),
            comprehensiveness: Comprehensiveness::Brief,
            options: ProcessingOptions::default(),
        });
        let b = MockSummarizer.summarize(&Submission {
            url: "https://youtu.be/two".to_string(),
            comprehensiveness: Comprehensiveness::Brief,
            options: ProcessingOptions::default(),
        });

        assert_eq!(a.title, b.title);
        assert_eq!(a.chapters, b.chapters);
        assert_eq!(a.key_insights, b.key_insights);
        assert_ne!(a.url, b.url);
    }

    #[test]
    fn test_mock_works_as_trait_object() {
        let summarizer: Box<dyn Summarizer> = Box::new(MockSummarizer);
        let summary = summarizer.summarize(&Submission {
            url: "https://youtu.be/abc".to_string(),
            comprehensiveness: Comprehensiveness::Detailed,
            options: ProcessingOptions::default(),
        });

        assert_eq!(summary.badge(), "Detailed Summary");
        assert_eq!(summary.url.as_deref(), Some("https://youtu.be/abc"));
    }
}
