use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use videodigest_core::{
    Submission,
    site::{TRY_HEADING, TRY_NOW_ANCHOR, TRY_SUBHEADING},
};
use videodigest_ui::{Features, Footer, Header, Hero, VideoInput};

use crate::{
    ARTICLE_PATH,
    handoff::{use_handoff, use_summarizer},
};

/// Landing page: marketing sections around the input form.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
      <div class="vd-landing-page">
        <Header />
        <Hero />
        <TryNowSection />
        <Features />
        <Footer />
      </div>
    }
}

/// Section hosting the form. Submitting summarizes and opens the results page.
#[component]
fn TryNowSection() -> impl IntoView {
    let handoff = use_handoff();
    let summarizer = use_summarizer();
    let navigate = StoredValue::new_local(use_navigate());

    let on_submit = move |submission: Submission| {
        log::info!(
            "processing {} at {} detail",
            submission.url,
            submission.comprehensiveness
        );
        handoff.put(summarizer.summarize(&submission));
        navigate.with_value(|navigate| navigate(ARTICLE_PATH, Default::default()));
    };

    view! {
      <section class="vd-try-now" id=TRY_NOW_ANCHOR>
        <div class="container">
          <div class="vd-section-heading">
            <h2>{TRY_HEADING}</h2>
            <p>{TRY_SUBHEADING}</p>
          </div>

          <div class="vd-input-container">
            <VideoInput on_submit=on_submit />
          </div>
        </div>
      </section>
    }
}
