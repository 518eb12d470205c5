//! Routed pages.

mod article;
mod landing;

pub use article::ArticlePage;
pub use landing::LandingPage;

use leptos::prelude::*;
use videodigest_ui::{Footer, Header};

/// Shown for any path without a route.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <Header />
      <main class="vd-not-found">
        <div class="container">
          <h1>"Page not found."</h1>
          <a href="/" class="btn btn-primary">"Back to Home"</a>
        </div>
      </main>
      <Footer />
    }
}
