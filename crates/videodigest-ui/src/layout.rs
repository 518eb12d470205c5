//! Site chrome: header with mobile menu, and footer.

use leptos::prelude::*;
use videodigest_core::site::{
    self, BRAND_PREFIX, BRAND_SUFFIX, FOOTER_BLURB, FOOTER_GROUPS, NAV_LINKS, SOCIAL_LINKS,
    TRY_NOW,
};

use crate::icons::{Icon, IconKind};

/// Brand mark: logo icon plus the two-tone name.
#[component]
pub fn Logo(
    /// Icon size in pixels.
    #[prop(default = 28)]
    size: u32,
) -> impl IntoView {
    view! {
      <a href="/" class="vd-logo">
        <Icon kind=IconKind::Youtube size=size color="#FF0000" />
        <span class="vd-logo-text">{BRAND_PREFIX} <span>{BRAND_SUFFIX}</span></span>
      </a>
    }
}

/// Site header with navigation and a collapsible mobile menu.
#[component]
pub fn Header() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let toggle_menu = move |_| menu_open.update(|open| *open = !*open);
    let close_menu = move |_| menu_open.set(false);

    view! {
      <header class="vd-header">
        <div class="container vd-header-container">
          <Logo />

          <nav class="vd-nav" aria-label="Main navigation">
            {NAV_LINKS
              .iter()
              .map(|link| view! { <a href=link.href>{link.label}</a> })
              .collect_view()}
          </nav>

          <div class="vd-header-actions">
            <a href=TRY_NOW.href class="btn btn-primary">
              {TRY_NOW.label}
            </a>
            <button
              class="vd-mobile-menu-btn"
              on:click=toggle_menu
              aria-label="Toggle menu"
              aria-expanded=move || menu_open.get().to_string()
            >
              {move || {
                let kind = if menu_open.get() { IconKind::X } else { IconKind::Menu };
                view! { <Icon kind=kind size=24 /> }
              }}
            </button>
          </div>
        </div>

        <Show when=move || menu_open.get()>
          <div class="vd-mobile-menu">
            {NAV_LINKS
              .iter()
              .map(|link| view! { <a href=link.href on:click=close_menu>{link.label}</a> })
              .collect_view()}
            <a href=TRY_NOW.href on:click=close_menu class="btn btn-primary">
              {TRY_NOW.label}
            </a>
          </div>
        </Show>
      </header>
    }
}

fn social_icon(label: &str) -> IconKind {
    match label {
        "Twitter" => IconKind::Twitter,
        "Facebook" => IconKind::Facebook,
        "Instagram" => IconKind::Instagram,
        _ => IconKind::Link,
    }
}

/// Site footer with link groups and copyright.
#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
      <footer class="vd-footer">
        <div class="container vd-footer-container">
          <div class="vd-footer-about">
            <Logo size=24 />
            <p>{FOOTER_BLURB}</p>
            <div class="vd-social">
              {SOCIAL_LINKS
                .iter()
                .map(|link| {
                  view! {
                    <a href=link.href target="_blank" rel="noopener noreferrer" aria-label=link.label>
                      <Icon kind=social_icon(link.label) />
                    </a>
                  }
                })
                .collect_view()}
            </div>
          </div>

          {FOOTER_GROUPS
            .iter()
            .map(|group| {
              view! {
                <div class="vd-footer-links">
                  <h3>{group.title}</h3>
                  <ul>
                    {group
                      .links
                      .iter()
                      .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                      .collect_view()}
                  </ul>
                </div>
              }
            })
            .collect_view()}
        </div>

        <div class="container vd-copyright">
          <p>{site::copyright(year)}</p>
        </div>
      </footer>
    }
}
