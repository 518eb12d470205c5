//! Video URL input form.
//!
//! Collects the URL, the comprehensiveness level and the display options,
//! and hands a [`Submission`] to the caller. All rules about when a
//! submission is allowed live in [`VideoInputState`].

use leptos::prelude::*;
use videodigest_core::{AiModel, Comprehensiveness, Submission, VideoInputState};

use crate::icons::{Icon, IconKind};

/// Form for submitting a video to summarize.
#[component]
pub fn VideoInput(
    /// Called with the form values when the user submits.
    #[prop(into)]
    on_submit: Callback<Submission>,
    /// Whether a submission is in flight. Blocks submitting while set.
    #[prop(default = false.into())]
    loading: Signal<bool>,
) -> impl IntoView {
    let state = RwSignal::new(VideoInputState::new());
    let can_submit = move || state.with(|s| s.can_submit(loading.get()));

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(submission) = state.with_untracked(|s| s.submit(loading.get_untracked())) {
            on_submit.run(submission);
        }
    };

    view! {
      <div class="vd-video-input">
        <form on:submit=handle_submit class="vd-form">
          <div class="vd-input-group">
            <label for="youtube-url">"YouTube Video URL"</label>
            <div class="vd-input-wrapper">
              <Icon kind=IconKind::Youtube extra_class="vd-input-icon" />
              <input
                id="youtube-url"
                type="url"
                placeholder="https://www.youtube.com/watch?v=..."
                required=true
                prop:value=move || state.with(|s| s.url.clone())
                on:input=move |ev| {
                  let value = event_target_value(&ev);
                  state.update(|s| s.set_url(value));
                }
              />
            </div>
          </div>

          <div class="vd-slider-group">
            <div class="vd-slider-header">
              <label for="comprehensiveness">"Comprehensiveness"</label>
              <span class="vd-badge">{move || state.with(|s| s.level_label())}</span>
            </div>

            <input
              type="range"
              id="comprehensiveness"
              class="vd-slider"
              min="0"
              max=Comprehensiveness::MAX_LEVEL.to_string()
              step="1"
              prop:value=move || state.with(|s| s.comprehensiveness.level().to_string())
              on:input=move |ev| {
                let value = event_target_value(&ev);
                state.update(|s| s.set_level_from_input(&value));
              }
            />

            <div class="vd-slider-labels">
              {Comprehensiveness::ALL
                .into_iter()
                .map(|c| view! { <span>{c.label()}</span> })
                .collect_view()}
            </div>
          </div>

          <div class="vd-options">
            <div class="vd-option">
              <label for="ai-model">"AI Model"</label>
              <select
                id="ai-model"
                prop:value=move || state.with(|s| s.options.ai_model.id().to_string())
                on:change=move |ev| {
                  let value = event_target_value(&ev);
                  state.update(|s| s.set_model_from_input(&value));
                }
              >
                {AiModel::ALL
                  .into_iter()
                  .map(|model| view! { <option value=model.id()>{model.display_name()}</option> })
                  .collect_view()}
              </select>
            </div>

            <OptionToggle
              input_id="titled-sections"
              label="Titled sections"
              checked=Signal::derive(move || state.with(|s| s.options.titled_sections))
              on_toggle=move |on: bool| state.update(|s| s.set_titled_sections(on))
            />
            <OptionToggle
              input_id="include-timestamps"
              label="Include timestamps"
              checked=Signal::derive(move || state.with(|s| s.options.include_timestamps))
              on_toggle=move |on: bool| state.update(|s| s.set_include_timestamps(on))
            />
            <OptionToggle
              input_id="article-view"
              label="Article view"
              checked=Signal::derive(move || state.with(|s| s.options.article_view))
              on_toggle=move |on: bool| state.update(|s| s.set_article_view(on))
            />
          </div>

          <button type="submit" class="vd-submit-button" disabled=move || !can_submit()>
            {move || VideoInputState::submit_label(loading.get())}
          </button>
        </form>
      </div>
    }
}

/// Labelled checkbox bound to one display option.
#[component]
fn OptionToggle(
    /// Input id, also used by the label.
    input_id: &'static str,
    /// Label text.
    label: &'static str,
    /// Current value.
    checked: Signal<bool>,
    /// Called with the new value.
    #[prop(into)]
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
      <div class="vd-option vd-option-toggle">
        <input
          type="checkbox"
          id=input_id
          prop:checked=move || checked.get()
          on:change=move |ev| on_toggle.run(event_target_checked(&ev))
        />
        <label for=input_id>{label}</label>
      </div>
    }
}
