//! Summary payload handed from the form to the results page.

use serde::{Deserialize, Serialize};

use crate::options::{Comprehensiveness, ProcessingOptions};

/// A titled, timestamped segment of the summarized video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter title.
    pub title: String,

    /// Position in the video, e.g. "3:24".
    pub timestamp: String,

    /// Summary of the chapter.
    pub content: String,
}

impl Chapter {
    /// Create a new chapter.
    pub fn new(
        title: impl Into<String>,
        timestamp: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            timestamp: timestamp.into(),
            content: content.into(),
        }
    }
}

/// A takeaway that stands on its own, independent of chapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInsight {
    /// Insight headline.
    pub title: String,

    /// Longer explanation.
    pub description: String,
}

impl KeyInsight {
    /// Create a new key insight.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Everything the results page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    /// Video title.
    pub title: String,

    /// Channel or author.
    pub creator: String,

    /// Publication date as displayed.
    pub published_at: String,

    /// Video length as displayed, e.g. "15:42".
    pub duration: String,

    /// Thumbnail image URL.
    pub thumbnail_url: String,

    /// Free-text summary paragraph.
    pub summary: String,

    /// Chapters in playback order.
    pub chapters: Vec<Chapter>,

    /// Key takeaways.
    pub key_insights: Vec<KeyInsight>,

    /// Verbosity the summary was produced at.
    #[serde(default)]
    pub comprehensiveness: Comprehensiveness,

    /// Source URL as entered on the form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Options chosen on the form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ProcessingOptions>,
}

impl VideoSummary {
    /// Options to render with, falling back to the defaults.
    pub fn effective_options(&self) -> ProcessingOptions {
        self.options.unwrap_or_default()
    }

    /// Badge text shown next to the title, e.g. "Standard Summary".
    pub fn badge(&self) -> String {
        format!("{} Summary", self.comprehensiveness)
    }

    /// Display name of the model, when options are present.
    pub fn model_name(&self) -> Option<&'static str> {
        self.options.map(|o| o.ai_model.display_name())
    }
}
