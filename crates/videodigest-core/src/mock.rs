//! Canned summary content.
//!
//! Every submission resolves to the same article about artificial
//! intelligence; only the URL, level and options change.

use crate::{
    options::{Comprehensiveness, ProcessingOptions},
    summary::{Chapter, KeyInsight, VideoSummary},
};

const TITLE: &str = "Understanding Artificial Intelligence";
const CREATOR: &str = "Tech Explained";
const PUBLISHED_AT: &str = "2023-05-15";
const DURATION: &str = "15:42";
const THUMBNAIL_URL: &str =
    "https://images.unsplash.com/photo-1587620962725-abab7fe55159?w=800&q=80";
const SUMMARY: &str = "This video explores the fundamentals of artificial intelligence, covering \
                       machine learning, neural networks, and practical applications in today's \
                       world.";

/// (title, timestamp, content)
const CHAPTERS: [(&str, &str, &str); 5] = [
    ("Introduction", "0:00", "Overview of AI concepts and history."),
    (
        "Machine Learning Basics",
        "3:24",
        "Explanation of how machines learn from data.",
    ),
    (
        "Neural Networks",
        "7:15",
        "Deep dive into neural network architecture.",
    ),
    (
        "Real-world Applications",
        "10:30",
        "Examples of AI in everyday technology.",
    ),
    (
        "Future Directions",
        "13:45",
        "Predictions about where AI is heading.",
    ),
];

const KEY_INSIGHTS: [(&str, &str); 3] = [
    (
        "AI systems require large amounts of quality data",
        "The effectiveness of AI systems is directly proportional to the quality and quantity \
         of data they are trained on.",
    ),
    (
        "The difference between narrow AI and general AI",
        "Narrow AI is designed for specific tasks while general AI aims to perform any \
         intellectual task that a human can do.",
    ),
    (
        "Ethical considerations in AI development",
        "As AI becomes more prevalent, ethical considerations around bias, privacy, and \
         autonomy become increasingly important.",
    ),
];

/// Build the canned summary for the given request parameters.
pub fn canned_summary(
    url: Option<String>,
    comprehensiveness: Comprehensiveness,
    options: ProcessingOptions,
) -> VideoSummary {
    VideoSummary {
        title: TITLE.to_string(),
        creator: CREATOR.to_string(),
        published_at: PUBLISHED_AT.to_string(),
        duration: DURATION.to_string(),
        thumbnail_url: THUMBNAIL_URL.to_string(),
        summary: SUMMARY.to_string(),
        chapters: CHAPTERS
            .iter()
            .map(|(title, timestamp, content)| Chapter::new(*title, *timestamp, *content))
            .collect(),
        key_insights: KEY_INSIGHTS
            .iter()
            .map(|(title, description)| KeyInsight::new(*title, *description))
            .collect(),
        comprehensiveness,
        url,
        options: Some(options),
    }
}

/// Summary shown when the results page is opened without a hand-off.
pub fn default_summary() -> VideoSummary {
    canned_summary(
        None,
        Comprehensiveness::Standard,
        ProcessingOptions::default(),
    )
}
