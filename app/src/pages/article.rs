use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use videodigest_ui::{Footer, Header, Icon, IconKind, SummaryView};

use crate::handoff::{resolve_summary, use_handoff};

/// Results page. Renders the handed-off summary, or the default one.
#[component]
pub fn ArticlePage() -> impl IntoView {
    let summary = resolve_summary(use_handoff().current());
    let page_title = format!("{} | VideoDigest", summary.title);

    view! {
      <Title text=page_title />
      <div>
        <Header />

        <main class="vd-article-page">
          <div class="container">
            <SummaryView summary=summary>
              <BackLink />
            </SummaryView>
          </div>
        </main>

        <Footer />
      </div>
    }
}

#[component]
fn BackLink() -> impl IntoView {
    let navigate = use_navigate();

    view! {
      <button class="vd-back-link" on:click=move |_| navigate("/", Default::default())>
        <Icon kind=IconKind::ArrowLeft size=16 />
        "Back to Home"
      </button>
    }
}
