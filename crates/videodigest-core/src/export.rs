//! Markdown export.
//!
//! Export renders the summary to Markdown in memory and logs it. Nothing is
//! written to disk and the summary is only borrowed.

use std::fmt::{self, Write};

use tracing::info;

use crate::{
    summary::VideoSummary,
    view::{ViewMode, chapter_rows},
};

/// Render a summary as a Markdown document.
///
/// Chapter headings and timestamps follow the same options as the plain
/// text layout.
pub fn to_markdown(summary: &VideoSummary) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_markdown(&mut out, summary);
    out
}

fn write_markdown(out: &mut String, summary: &VideoSummary) -> fmt::Result {
    writeln!(out, "# {}\n", summary.title)?;
    writeln!(
        out,
        "*{}* · {} · {} · {}\n",
        summary.creator,
        summary.published_at,
        summary.duration,
        summary.badge()
    )?;
    if let Some(url) = &summary.url {
        writeln!(out, "Source: <{url}>\n")?;
    }

    writeln!(out, "## Summary\n\n{}\n", summary.summary)?;

    writeln!(out, "## Chapters\n")?;
    for row in chapter_rows(summary, ViewMode::Plain) {
        match (&row.heading, &row.timestamp) {
            (Some(heading), Some(ts)) => writeln!(out, "### [{ts}] {heading}\n")?,
            (Some(heading), None) => writeln!(out, "### {heading}\n")?,
            (None, Some(ts)) => writeln!(out, "**{ts}**\n")?,
            (None, None) => {}
        }
        writeln!(out, "{}\n", row.content)?;
    }

    writeln!(out, "## Key Insights\n")?;
    for insight in &summary.key_insights {
        writeln!(out, "- **{}**: {}", insight.title, insight.description)?;
    }

    Ok(())
}

/// Export the summary. Logs the rendered Markdown.
pub fn export_markdown(summary: &VideoSummary) {
    let markdown = to_markdown(summary);
    info!(
        title = %summary.title,
        bytes = markdown.len(),
        "Exporting summary as markdown"
    );
    tracing::debug!("{markdown}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mock::default_summary, options::ProcessingOptions};

    #[test]
    fn test_markdown_sections() {
        let md = to_markdown(&default_summary());
        assert!(md.starts_with("# Understanding Artificial Intelligence\n"));
        assert!(md.contains("## Summary"));
        assert!(md.contains("### [3:24] Machine Learning Basics"));
        assert!(md.contains("## Key Insights"));
        assert_eq!(md.matches("\n- **").count(), 3);
    }

    #[test]
    fn test_write_markdown_appends() {
        let summary = default_summary();
        let mut out = String::from("preamble\n");
        assert!(write_markdown(&mut out, &summary).is_ok());
        assert!(out.starts_with("preamble\n# Understanding Artificial Intelligence\n"));
        assert_eq!(out.len(), "preamble\n".len() + to_markdown(&summary).len());
    }

    #[test]
    fn test_markdown_includes_source_url() {
        let summary = VideoSummary {
            url: Some("https://youtu.be/abc".to_string()),
            ..default_summary()
        };
        assert!(to_markdown(&summary).contains("Source: <https://youtu.be/abc>"));
    }

    #[test]
    fn test_markdown_respects_options() {
        let summary = VideoSummary {
            options: Some(ProcessingOptions {
                titled_sections: false,
                include_timestamps: false,
                ..ProcessingOptions::default()
            }),
            ..default_summary()
        };

        let md = to_markdown(&summary);
        assert!(!md.contains("### "));
        assert!(!md.contains("Neural Networks"));
        assert!(md.contains("Deep dive into neural network architecture."));
    }

    #[test]
    fn test_export_leaves_summary_untouched() {
        let summary = default_summary();
        let before = summary.clone();
        export_markdown(&summary);
        export_markdown(&summary);
        assert_eq!(summary, before);
    }
}
