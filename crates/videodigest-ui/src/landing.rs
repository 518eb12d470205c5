//! Static landing page sections.

use leptos::prelude::*;
use videodigest_core::site::{
    FEATURES, FEATURES_ANCHOR, FEATURES_HEADING, FEATURES_SUBHEADING, Feature, FeatureIcon, hero,
};

use crate::icons::{Icon, IconKind};

/// Hero banner with headline and calls to action.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
      <section class="vd-hero">
        <div class="container vd-hero-container">
          <div class="vd-hero-content">
            <h1>{hero::HEADLINE}</h1>
            <p>{hero::BODY}</p>
            <div class="vd-btn-group">
              <a href=hero::PRIMARY.href class="btn btn-primary btn-lg">
                {hero::PRIMARY.label}
              </a>
              <a href=hero::SECONDARY.href class="btn btn-secondary btn-lg">
                {hero::SECONDARY.label}
              </a>
            </div>
          </div>

          <div class="vd-hero-image">
            <img src=hero::IMAGE_URL alt=hero::IMAGE_ALT />
          </div>
        </div>
      </section>
    }
}

fn feature_icon(icon: FeatureIcon) -> IconKind {
    match icon {
        FeatureIcon::Clock => IconKind::Clock,
        FeatureIcon::FileText => IconKind::FileText,
        FeatureIcon::Zap => IconKind::Zap,
        FeatureIcon::BarChart => IconKind::BarChart,
        FeatureIcon::Layers => IconKind::Layers,
        FeatureIcon::Download => IconKind::Download,
    }
}

/// A single feature card.
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
      <div class="vd-feature">
        <div class="vd-feature-icon">
          <Icon kind=feature_icon(feature.icon) size=24 />
        </div>
        <h3>{feature.title}</h3>
        <p>{feature.description}</p>
      </div>
    }
}

/// Grid of product features.
#[component]
pub fn Features() -> impl IntoView {
    view! {
      <section class="vd-features" id=FEATURES_ANCHOR>
        <div class="container">
          <div class="vd-section-heading">
            <h2>{FEATURES_HEADING}</h2>
            <p>{FEATURES_SUBHEADING}</p>
          </div>

          <div class="vd-feature-grid">
            {FEATURES
              .into_iter()
              .map(|feature| view! { <FeatureCard feature=feature /> })
              .collect_view()}
          </div>
        </div>
      </section>
    }
}
