//! Input form state.
//!
//! [`VideoInputState`] holds what the user typed and picked. The Leptos form
//! keeps one in a signal and calls [`VideoInputState::submit`] from its
//! submit handler; a `None` return means nothing is emitted.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::Result,
    options::{AiModel, Comprehensiveness, ProcessingOptions},
};

/// Label on the submit button while idle.
pub const SUBMIT_LABEL: &str = "Process Video";

/// Label on the submit button while loading.
pub const LOADING_LABEL: &str = "Processing...";

/// What a successful form submission emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// URL exactly as entered.
    pub url: String,

    /// Chosen verbosity.
    pub comprehensiveness: Comprehensiveness,

    /// Chosen display options.
    pub options: ProcessingOptions,
}

/// Current values of the input form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoInputState {
    /// Contents of the URL field.
    pub url: String,

    /// Slider position.
    pub comprehensiveness: Comprehensiveness,

    /// Model picker and display toggles.
    pub options: ProcessingOptions,
}

impl VideoInputState {
    /// Create an empty form with default selections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the URL field contents.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Move the slider to an integer level.
    pub fn set_level(&mut self, level: u8) -> Result<()> {
        self.comprehensiveness = Comprehensiveness::from_level(level)?;
        Ok(())
    }

    /// Apply a raw slider value from an `input` event.
    ///
    /// Values that are not a valid level leave the slider where it was.
    pub fn set_level_from_input(&mut self, value: &str) {
        match value.trim().parse::<u8>() {
            Ok(level) => {
                if let Err(e) = self.set_level(level) {
                    debug!(%e, "ignoring slider value");
                }
            }
            Err(_) => debug!(value, "ignoring non-numeric slider value"),
        }
    }

    /// Apply a raw model id from the picker's `change` event.
    ///
    /// Unknown ids leave the current model selected.
    pub fn set_model_from_input(&mut self, id: &str) {
        match id.parse::<AiModel>() {
            Ok(model) => self.options.ai_model = model,
            Err(e) => debug!(%e, "ignoring model selection"),
        }
    }

    /// Toggle chapter titles.
    pub fn set_titled_sections(&mut self, on: bool) {
        self.options.titled_sections = on;
    }

    /// Toggle chapter timestamps.
    pub fn set_include_timestamps(&mut self, on: bool) {
        self.options.include_timestamps = on;
    }

    /// Choose article (true) or plain text (false) layout.
    pub fn set_article_view(&mut self, on: bool) {
        self.options.article_view = on;
    }

    /// Badge text for the slider.
    pub fn level_label(&self) -> &'static str {
        self.comprehensiveness.label()
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self, loading: bool) -> bool {
        !loading && !self.url.trim().is_empty()
    }

    /// Text on the submit button.
    pub fn submit_label(loading: bool) -> &'static str {
        if loading { LOADING_LABEL } else { SUBMIT_LABEL }
    }

    /// Produce a submission, or `None` when submitting is blocked.
    pub fn submit(&self, loading: bool) -> Option<Submission> {
        if !self.can_submit(loading) {
            debug!(loading, "submission blocked");
            return None;
        }

        Some(Submission {
            url: self.url.clone(),
            comprehensiveness: self.comprehensiveness,
            options: self.options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> VideoInputState {
        let mut state = VideoInputState::new();
        state.set_url(url);
        state
    }

    #[test]
    fn test_defaults() {
        let state = VideoInputState::new();
        assert!(state.url.is_empty());
        assert_eq!(state.level_label(), "Standard");
        assert_eq!(state.options, ProcessingOptions::default());
    }

    #[test]
    fn test_empty_url_blocks_submit() {
        let state = VideoInputState::new();
        assert!(!state.can_submit(false));
        assert!(state.submit(false).is_none());
    }

    #[test]
    fn test_whitespace_url_blocks_submit() {
        let state = with_url("   \t ");
        assert!(!state.can_submit(false));
        assert!(state.submit(false).is_none());
    }

    #[test]
    fn test_loading_blocks_submit() {
        let state = with_url("https://www.youtube.com/watch?v=abc");
        assert!(!state.can_submit(true));
        assert!(state.submit(true).is_none());
    }

    #[test]
    fn test_submit_standard_level() {
        let mut state = with_url("https://www.youtube.com/watch?v=abc");
        state.set_level(1).unwrap();

        let submission = state.submit(false).expect("should submit");
        assert_eq!(submission.comprehensiveness.label(), "Standard");
        assert_eq!(submission.url, "https://www.youtube.com/watch?v=abc");
    }

    #[test]
    fn test_submit_brief_and_detailed() {
        let mut state = with_url("https://youtu.be/abc");

        state.set_level(0).unwrap();
        assert_eq!(state.submit(false).unwrap().comprehensiveness.label(), "Brief");

        state.set_level(2).unwrap();
        assert_eq!(
            state.submit(false).unwrap().comprehensiveness.label(),
            "Detailed"
        );
    }

    #[test]
    fn test_url_submitted_untrimmed() {
        let state = with_url("  https://youtu.be/abc ");
        assert_eq!(state.submit(false).unwrap().url, "  https://youtu.be/abc ");
    }

    #[test]
    fn test_invalid_level_keeps_previous() {
        let mut state = VideoInputState::new();
        state.set_level_from_input("2");
        assert_eq!(state.comprehensiveness, Comprehensiveness::Detailed);

        assert!(state.set_level(3).is_err());
        state.set_level_from_input("9");
        state.set_level_from_input("abc");
        state.set_level_from_input("");
        assert_eq!(state.comprehensiveness, Comprehensiveness::Detailed);
    }

    #[test]
    fn test_model_selection() {
        let mut state = VideoInputState::new();
        state.set_model_from_input("claude-3");
        assert_eq!(state.options.ai_model, AiModel::Claude3);

        state.set_model_from_input("unknown");
        assert_eq!(state.options.ai_model, AiModel::Claude3);
    }

    #[test]
    fn test_toggles_reach_submission() {
        let mut state = with_url("https://youtu.be/abc");
        state.set_titled_sections(false);
        state.set_include_timestamps(false);
        state.set_article_view(false);

        let options = state.submit(false).unwrap().options;
        assert!(!options.titled_sections);
        assert!(!options.include_timestamps);
        assert!(!options.article_view);
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(VideoInputState::submit_label(false), "Process Video");
        assert_eq!(VideoInputState::submit_label(true), "Processing...");
    }
}
