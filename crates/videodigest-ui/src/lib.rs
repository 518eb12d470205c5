//! VideoDigest UI Components
//!
//! Leptos components for the VideoDigest frontend.
//!
//! # Components
//!
//! ## Layout
//! - [`Header`] - Site header with mobile menu
//! - [`Footer`] - Site footer with link groups
//! - [`Logo`] - Brand mark
//!
//! ## Landing
//! - [`Hero`] - Headline banner
//! - [`Features`] - Feature card grid
//!
//! ## Form
//! - [`VideoInput`] - URL, comprehensiveness and display options
//!
//! ## Results
//! - [`SummaryView`] - Article/plain text rendering of a summary
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use videodigest_core::{MockSummarizer, Submission, Summarizer};
//! use videodigest_ui::{SummaryView, VideoInput};
//!
//! #[component]
//! fn Demo() -> impl IntoView {
//!     let result = RwSignal::new(None);
//!     let on_submit = move |submission: Submission| {
//!         result.set(Some(MockSummarizer.summarize(&submission)));
//!     };
//!
//!     view! {
//!         <VideoInput on_submit=on_submit />
//!         {move || result.get().map(|summary| view! { <SummaryView summary=summary /> })}
//!     }
//! }
//! ```

pub mod icons;
pub mod landing;
pub mod layout;
pub mod summary;
pub mod video_input;

pub use icons::{Icon, IconKind};
pub use landing::{FeatureCard, Features, Hero};
pub use layout::{Footer, Header, Logo};
pub use summary::{ArticleLayout, PlainLayout, SummaryHeader, SummaryView};
pub use video_input::VideoInput;
