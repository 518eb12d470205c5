//! Transient navigation state.
//!
//! The landing page stores the summary here right before navigating to the
//! results page, which reads it back. Nothing is persisted: a reload of the
//! results page finds the hand-off empty and shows the default summary.

use std::sync::Arc;

use leptos::prelude::*;
use videodigest_core::{Summarizer, VideoSummary, default_summary};

/// Summary in transit from the form to the results page.
#[derive(Debug, Clone, Copy)]
pub struct Handoff(RwSignal<Option<VideoSummary>>);

impl Handoff {
    /// Create an empty hand-off.
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    /// Store the summary for the next page.
    pub fn put(&self, summary: VideoSummary) {
        self.0.set(Some(summary));
    }

    /// The stored summary, if any. Does not subscribe.
    pub fn current(&self) -> Option<VideoSummary> {
        self.0.get_untracked()
    }
}

impl Default for Handoff {
    fn default() -> Self {
        Self::new()
    }
}

/// The summary to render: the handed-off one, or the default.
pub fn resolve_summary(handed_off: Option<VideoSummary>) -> VideoSummary {
    handed_off.unwrap_or_else(|| {
        log::debug!("no summary handed off, using default");
        default_summary()
    })
}

/// Provide an empty hand-off to the component tree.
pub fn provide_handoff() -> Handoff {
    let handoff = Handoff::new();
    provide_context(handoff);
    handoff
}

/// The hand-off provided by [`provide_handoff`].
pub fn use_handoff() -> Handoff {
    expect_context::<Handoff>()
}

/// Shared summarizer used by the form.
#[derive(Clone)]
pub struct SummarizerHandle(Arc<dyn Summarizer>);

impl SummarizerHandle {
    /// Summarize a submission.
    pub fn summarize(&self, submission: &videodigest_core::Submission) -> VideoSummary {
        self.0.summarize(submission)
    }
}

/// Provide the summarizer to the component tree.
pub fn provide_summarizer(summarizer: impl Summarizer + 'static) {
    provide_context(SummarizerHandle(Arc::new(summarizer)));
}

/// The summarizer provided by [`provide_summarizer`].
pub fn use_summarizer() -> SummarizerHandle {
    expect_context::<SummarizerHandle>()
}

#[cfg(test)]
mod tests {
    use leptos::prelude::Owner;
    use videodigest_core::{
        Comprehensiveness, MockSummarizer, ProcessingOptions, Submission,
    };

    use super::*;

    #[test]
    fn test_resolve_without_handoff() {
        let summary = resolve_summary(None);
        assert_eq!(summary.title, "Understanding Artificial Intelligence");
        assert_eq!(summary.chapters.len(), 5);
        assert_eq!(summary.key_insights.len(), 3);
    }

    #[test]
    fn test_handoff_round_trip() {
        let owner = Owner::new();
        owner.set();

        let handoff = provide_handoff();
        assert!(use_handoff().current().is_none());

        provide_summarizer(MockSummarizer);
        let summary = use_summarizer().summarize(&Submission {
            url: "https://youtu.be/abc".to_string(),
            comprehensiveness: Comprehensiveness::Brief,
            options: ProcessingOptions::default(),
        });
        handoff.put(summary.clone());

        let resolved = resolve_summary(use_handoff().current());
        assert_eq!(resolved, summary);
        assert_eq!(resolved.badge(), "Brief Summary");
    }
}
