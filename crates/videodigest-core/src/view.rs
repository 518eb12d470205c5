//! Results page view state.
//!
//! Holds the layout choice and the open accordion entry, and decides which
//! parts of each chapter are shown in each layout.

use serde::{Deserialize, Serialize};

use crate::{options::Comprehensiveness, summary::VideoSummary};

/// Layout of the results page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Sections, chapter accordion and insight cards.
    #[default]
    Article,
    /// Flat text, no collapsing.
    Plain,
}

impl ViewMode {
    /// Layout implied by the `article_view` option.
    pub fn from_article_view(article_view: bool) -> Self {
        if article_view {
            Self::Article
        } else {
            Self::Plain
        }
    }

    /// Toggle button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Article => "Article View",
            Self::Plain => "Plain Text",
        }
    }
}

/// Mutable state of the results page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticleViewState {
    open_chapter: Option<usize>,
    view_mode: ViewMode,
}

impl ArticleViewState {
    /// Initial state for a summary: all chapters closed, layout from options.
    pub fn for_summary(summary: &VideoSummary) -> Self {
        let view_mode = summary
            .options
            .map(|o| ViewMode::from_article_view(o.article_view))
            .unwrap_or_default();

        Self {
            open_chapter: None,
            view_mode,
        }
    }

    /// Open chapter `index`, closing any other; closes it if already open.
    pub fn toggle_chapter(&mut self, index: usize) {
        self.open_chapter = if self.open_chapter == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Index of the open chapter, `None` when all are closed.
    pub fn open_chapter(&self) -> Option<usize> {
        self.open_chapter
    }

    /// Whether chapter `index` is expanded.
    pub fn is_open(&self, index: usize) -> bool {
        self.open_chapter == Some(index)
    }

    /// Current layout.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switch layout. The open chapter is kept for when article view returns.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Whether the article/plain toggle is offered for this summary.
    pub fn can_switch_view(summary: &VideoSummary) -> bool {
        summary.comprehensiveness == Comprehensiveness::Standard
    }
}

/// What to show for one chapter in a given layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRow {
    /// Position in the chapter list.
    pub index: usize,

    /// Heading text, `None` when the layout shows no heading.
    pub heading: Option<String>,

    /// Timestamp, `None` when timestamps are suppressed.
    pub timestamp: Option<String>,

    /// Chapter body.
    pub content: String,
}

/// Heading for a chapter whose title is suppressed in article view.
pub fn ordinal_heading(index: usize) -> String {
    format!("Part {}", index + 1)
}

/// Work out the visible parts of every chapter.
///
/// Titles follow `titled_sections` and timestamps follow
/// `include_timestamps` in both layouts. Article view still needs something
/// to click, so a suppressed title becomes an ordinal heading there.
pub fn chapter_rows(summary: &VideoSummary, mode: ViewMode) -> Vec<ChapterRow> {
    let options = summary.effective_options();

    summary
        .chapters
        .iter()
        .enumerate()
        .map(|(index, chapter)| {
            let heading = match (options.titled_sections, mode) {
                (true, _) => Some(chapter.title.clone()),
                (false, ViewMode::Article) => Some(ordinal_heading(index)),
                (false, ViewMode::Plain) => None,
            };

            ChapterRow {
                index,
                heading,
                timestamp: options
                    .include_timestamps
                    .then(|| chapter.timestamp.clone()),
                content: chapter.content.clone(),
            }
        })
        .collect()
}
