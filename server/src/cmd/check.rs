//! Check command - validate configuration and the built site

use std::path::Path;

use color_eyre::eyre::{Result, bail};

use crate::config::Config;

/// Run the check command.
///
/// Loads the configuration the same way `serve` does, so environment
/// overrides apply and the file is optional, then checks that the site root
/// holds a build. Missing build output is a warning; `strict` makes it fatal.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and site root");

    let config = match Config::load_with_env(config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("  ✗ {e}");
            bail!("Validation failed: {e}");
        }
    };
    println!("  ✓ Configuration valid");

    let warnings = site_root_warnings(&config);
    for warn in &warnings {
        println!("  ⚠ {warn}");
    }

    if strict && !warnings.is_empty() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            warnings.len()
        );
    }

    println!("✓ All checks passed");
    Ok(())
}

fn site_root_warnings(config: &Config) -> Vec<String> {
    let root = &config.server.site_root;
    if !root.is_dir() {
        return vec![format!(
            "Site root {} does not exist; build the frontend first",
            root.display()
        )];
    }

    let index = config.server.index_path();
    if index.is_file() {
        Vec::new()
    } else {
        vec![format!("Missing index page {}", index.display())]
    }
}
