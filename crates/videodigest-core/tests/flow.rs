//! End-to-end tests for the form to results flow.
//!
//! These drive the same state types the Leptos components use.

use videodigest_core::{
    ArticleViewState, Comprehensiveness, MockSummarizer, Summarizer, VideoInputState, ViewMode,
    chapter_rows, default_summary, export_markdown,
};

fn submit(url: &str, level: u8) -> Option<videodigest_core::Submission> {
    let mut form = VideoInputState::new();
    form.set_url(url);
    form.set_level(level).expect("valid level");
    form.submit(false)
}

#[test]
fn test_blank_url_never_reaches_summarizer() {
    let mut calls = 0;
    for url in ["", " ", "\n\t"] {
        if let Some(submission) = submit(url, 1) {
            MockSummarizer.summarize(&submission);
            calls += 1;
        }
    }
    assert_eq!(calls, 0);
}

#[test]
fn test_submission_to_results_page() {
    let submission = submit("https://www.youtube.com/watch?v=dQw4w9WgXcQ", 1).expect("submits");
    let summary = MockSummarizer.summarize(&submission);

    assert_eq!(summary.comprehensiveness.label(), "Standard");
    assert_eq!(
        summary.url.as_deref(),
        Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
    );

    let mut view = ArticleViewState::for_summary(&summary);
    assert_eq!(view.view_mode(), ViewMode::Article);
    assert!(ArticleViewState::can_switch_view(&summary));

    view.toggle_chapter(0);
    view.toggle_chapter(2);
    assert_eq!(view.open_chapter(), Some(2));
}

#[test]
fn test_plain_text_submission() {
    let mut form = VideoInputState::new();
    form.set_url("https://youtu.be/abc");
    form.set_level_from_input("2");
    form.set_article_view(false);
    form.set_titled_sections(false);

    let summary = MockSummarizer.summarize(&form.submit(false).expect("submits"));
    let view = ArticleViewState::for_summary(&summary);

    assert_eq!(summary.comprehensiveness, Comprehensiveness::Detailed);
    assert_eq!(view.view_mode(), ViewMode::Plain);
    assert!(!ArticleViewState::can_switch_view(&summary));
    assert!(
        chapter_rows(&summary, view.view_mode())
            .iter()
            .all(|row| row.heading.is_none())
    );
}

#[test]
fn test_missing_handoff_uses_default() {
    let handoff: Option<videodigest_core::VideoSummary> = None;
    let summary = handoff.unwrap_or_else(default_summary);

    assert_eq!(summary.title, "Understanding Artificial Intelligence");
    assert_eq!(summary.chapters.len(), 5);
    assert_eq!(summary.key_insights.len(), 3);
}

#[test]
fn test_export_does_not_change_view() {
    let summary = default_summary();
    let mut view = ArticleViewState::for_summary(&summary);
    view.toggle_chapter(1);
    let before = view;

    export_markdown(&summary);

    assert_eq!(view, before);
}
