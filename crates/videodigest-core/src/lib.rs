//! VideoDigest Core Library
//!
//! Summary types, form state and results-page state for the VideoDigest
//! demo. Nothing here depends on the UI framework, so the behaviour of the
//! form and the results page is testable on the host.

pub mod error;
pub mod export;
pub mod form;
pub mod mock;
pub mod options;
pub mod site;
pub mod summarizer;
pub mod summary;
pub mod view;

pub use error::{CoreError, Result};
pub use export::{export_markdown, to_markdown};
pub use form::{Submission, VideoInputState};
pub use mock::default_summary;
pub use options::{AiModel, Comprehensiveness, ProcessingOptions};
pub use summarizer::{MockSummarizer, Summarizer};
pub use summary::{Chapter, KeyInsight, VideoSummary};
pub use view::{ArticleViewState, ChapterRow, ViewMode, chapter_rows};
