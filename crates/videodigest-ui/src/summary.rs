//! Results page rendering.
//!
//! [`SummaryView`] renders a [`VideoSummary`] in article or plain text
//! layout. The open accordion entry and the layout live in an
//! [`ArticleViewState`] signal; the summary itself never changes.

use leptos::prelude::*;
use videodigest_core::{
    ArticleViewState, ChapterRow, VideoSummary, ViewMode, chapter_rows, export_markdown,
};

use crate::icons::{Icon, IconKind};

/// CSS class for an element that highlights when `active`.
pub fn active_class(base: &str, active: bool) -> String {
    if active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

/// Full results view: metadata header, thumbnail, body and export button.
#[component]
pub fn SummaryView(
    /// The summary to render.
    summary: VideoSummary,
    /// Rendered above the title, e.g. a back link.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let state = RwSignal::new(ArticleViewState::for_summary(&summary));
    let summary = StoredValue::new(summary);

    let handle_export = move |_| summary.with_value(export_markdown);

    let thumbnail = summary.with_value(|s| s.thumbnail_url.clone());
    let title = summary.with_value(|s| s.title.clone());

    view! {
      <div class="vd-article">
        <div class="vd-article-header">
          {children.map(|c| c())}
          <SummaryHeader summary=summary state=state />
        </div>

        <div class="vd-thumbnail">
          <img src=thumbnail alt=title />
        </div>

        {move || match state.with(|s| s.view_mode()) {
          ViewMode::Article => view! { <ArticleLayout summary=summary state=state /> }.into_any(),
          ViewMode::Plain => view! { <PlainLayout summary=summary /> }.into_any(),
        }}

        <div class="vd-actions">
          <button class="vd-export-button" on:click=handle_export>
            <Icon kind=IconKind::Download size=18 />
            "Export as Markdown"
          </button>
        </div>
      </div>
    }
}

/// Title, metadata row, badge and layout toggle.
#[component]
pub fn SummaryHeader(
    summary: StoredValue<VideoSummary>,
    state: RwSignal<ArticleViewState>,
) -> impl IntoView {
    let s = summary.get_value();
    let can_switch = ArticleViewState::can_switch_view(&s);
    let model = s.model_name();
    let url = s.url.clone();

    view! {
      <h1 class="vd-article-title">{s.title.clone()}</h1>

      <div class="vd-meta">
        <MetaItem icon=IconKind::User text=s.creator.clone() />
        <MetaItem icon=IconKind::Calendar text=s.published_at.clone() />
        <MetaItem icon=IconKind::Clock text=s.duration.clone() />
        {model.map(|name| view! { <MetaItem icon=IconKind::Cpu text=name.to_string() /> })}
        {url.map(|url| {
          view! {
            <div class="vd-meta-item vd-source">
              <Icon kind=IconKind::Link size=16 />
              <a href=url.clone() target="_blank" rel="noopener noreferrer">{url.clone()}</a>
            </div>
          }
        })}
      </div>

      <div class="vd-header-controls">
        <span class="vd-badge">{s.badge()}</span>

        <Show when=move || can_switch>
          <div class="vd-view-toggle">
            {[ViewMode::Article, ViewMode::Plain]
              .into_iter()
              .map(|mode| {
                view! {
                  <button
                    class=move || active_class("vd-view-button", state.with(|s| s.view_mode() == mode))
                    on:click=move |_| state.update(|s| s.set_view_mode(mode))
                  >
                    {mode.label()}
                  </button>
                }
              })
              .collect_view()}
          </div>
        </Show>
      </div>
    }
}

#[component]
fn MetaItem(icon: IconKind, text: String) -> impl IntoView {
    view! {
      <div class="vd-meta-item">
        <Icon kind=icon size=16 />
        {text}
      </div>
    }
}

/// Sectioned layout with a single-open chapter accordion.
#[component]
pub fn ArticleLayout(
    summary: StoredValue<VideoSummary>,
    state: RwSignal<ArticleViewState>,
) -> impl IntoView {
    let rows = summary.with_value(|s| chapter_rows(s, ViewMode::Article));

    view! {
      <div class="vd-section">
        <h2>"Summary"</h2>
        <p>{summary.with_value(|s| s.summary.clone())}</p>
      </div>

      <div class="vd-section vd-chapters">
        <h2>"Chapters"</h2>
        {rows
          .into_iter()
          .map(|row| view! { <AccordionItem row=row state=state /> })
          .collect_view()}
      </div>

      <div class="vd-section vd-insights">
        <h2>"Key Insights"</h2>
        <div class="vd-insight-grid">
          {summary
            .with_value(|s| s.key_insights.clone())
            .into_iter()
            .map(|insight| {
              view! {
                <div class="vd-insight-card">
                  <h3>{insight.title}</h3>
                  <p>{insight.description}</p>
                </div>
              }
            })
            .collect_view()}
        </div>
      </div>
    }
}

/// One collapsible chapter.
#[component]
fn AccordionItem(row: ChapterRow, state: RwSignal<ArticleViewState>) -> impl IntoView {
    let index = row.index;
    let is_open = Memo::new(move |_| state.with(|s| s.is_open(index)));
    let content = StoredValue::new(row.content);

    view! {
      <div class="vd-chapter">
        <button
          type="button"
          class=move || active_class("vd-chapter-header", is_open.get())
          aria-expanded=move || is_open.get().to_string()
          on:click=move |_| state.update(|s| s.toggle_chapter(index))
        >
          <div class="vd-chapter-title">
            {row.timestamp.map(|ts| view! { <span class="vd-timestamp">{ts}</span> })}
            {row.heading.map(|heading| view! { <h3>{heading}</h3> })}
          </div>
          <span class=move || active_class("vd-chevron", is_open.get())>
            <Icon kind=IconKind::ChevronDown />
          </span>
        </button>
        <Show when=move || is_open.get()>
          <div class="vd-chapter-content">{content.get_value()}</div>
        </Show>
      </div>
    }
}

/// Flat layout without collapsing.
#[component]
pub fn PlainLayout(summary: StoredValue<VideoSummary>) -> impl IntoView {
    let rows = summary.with_value(|s| chapter_rows(s, ViewMode::Plain));

    view! {
      <div class="vd-plain-text">
        <h2>"Summary"</h2>
        <p>{summary.with_value(|s| s.summary.clone())}</p>

        <h2>"Content"</h2>
        {rows
          .into_iter()
          .map(|row| {
            view! {
              <div class="vd-plain-chapter">
                {row.heading.map(|heading| view! { <h3>{heading}</h3> })}
                {row.timestamp.map(|ts| view! { <span class="vd-plain-timestamp">{ts}</span> })}
                <p>{row.content}</p>
              </div>
            }
          })
          .collect_view()}

        <h2>"Key Insights"</h2>
        {summary
          .with_value(|s| s.key_insights.clone())
          .into_iter()
          .map(|insight| {
            view! {
              <div class="vd-plain-insight">
                <h3>{insight.title}</h3>
                <p>{insight.description}</p>
              </div>
            }
          })
          .collect_view()}
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_class() {
        assert_eq!(active_class("vd-view-button", true), "vd-view-button active");
        assert_eq!(active_class("vd-view-button", false), "vd-view-button");
    }
}
