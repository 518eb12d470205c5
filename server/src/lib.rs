//! VideoDigest server library
//!
//! Serves the compiled VideoDigest frontend. Every path that is not a file
//! under the site root gets the index page, so client routes such as
//! `/article` survive a reload.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (serve, check)
//! - [`config`] - `videodigest.toml` loading and validation
//! - [`routes`] - Router construction

pub mod cmd;
pub mod config;
pub mod error;
pub mod routes;

pub use config::{Config, ServerConfig, SiteConfig};
pub use error::{Result, ServerError};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = INFO, 1 = DEBUG, 2+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
