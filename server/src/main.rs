//! VideoDigest server CLI
//!
//! Serves the built frontend and validates its configuration.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use server::Config;

/// Command-line interface for the VideoDigest server.
#[derive(Parser)]
#[command(
    name = "videodigest-server",
    version,
    about = "Serve the VideoDigest web app"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "videodigest.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Serve the built site
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,
        /// Directory holding the built site
        #[arg(long)]
        site_root: Option<PathBuf>,
    },
    /// Validate configuration and the built site
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    server::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve {
            port,
            host,
            site_root,
        } => {
            let mut config = Config::load_with_env(&cli.config)?;
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(site_root) = site_root {
                config.server.site_root = site_root;
            }
            config.validate()?;
            server::cmd::serve::run(&config).await?;
        }
        Commands::Check { strict } => {
            server::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_serve_defaults() {
        let cli = Cli::parse_from(["videodigest-server", "serve"]);

        assert_eq!(cli.config, PathBuf::from("videodigest.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Serve {
                port,
                host,
                site_root,
            } => {
                assert!(port.is_none());
                assert!(host.is_none());
                assert!(site_root.is_none());
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_serve_overrides() {
        let args = [
            "videodigest-server",
            "serve",
            "--port",
            "8080",
            "--host",
            "0.0.0.0",
            "--site-root",
            "dist",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Serve {
                port,
                host,
                site_root,
            } => {
                assert_eq!(port, Some(8080));
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(site_root, Some(PathBuf::from("dist")));
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let cli = Cli::parse_from(["videodigest-server", "check", "--strict"]);

        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_custom_config_and_verbosity() {
        let cli = Cli::parse_from(["videodigest-server", "-c", "site.toml", "-vv", "check"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_missing_subcommand() {
        assert!(Cli::try_parse_from(["videodigest-server"]).is_err());
    }
}
