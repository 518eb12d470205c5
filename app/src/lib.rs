//! VideoDigest application shell.
//!
//! Routes, page composition and the hand-off that carries a summary from
//! the landing page form to the results page.

pub mod handoff;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use videodigest_core::MockSummarizer;

use crate::{
    handoff::{provide_handoff, provide_summarizer},
    pages::{ArticlePage, LandingPage, NotFound},
};

/// Path of the results page.
pub const ARTICLE_PATH: &str = "/article";

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_handoff();
    provide_summarizer(MockSummarizer);

    view! {
      <Title text="VideoDigest" />

      <Router>
        <Routes fallback=|| view! { <NotFound /> }>
          <Route path=StaticSegment("") view=LandingPage />
          <Route path=StaticSegment("article") view=ArticlePage />
        </Routes>
      </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_path_matches_route_segment() {
        assert_eq!(ARTICLE_PATH.trim_start_matches('/'), "article");
    }
}
