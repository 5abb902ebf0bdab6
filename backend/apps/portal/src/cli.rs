//! Command line

use std::path::PathBuf;
use std::time::Duration;

use auth::config::DEFAULT_API_BASE_URL;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "portal")]
#[command(version)]
#[command(about = "NHF teacher housing portal", long_about = None)]
pub struct Cli {
    /// Housing API base URL
    #[arg(long, env = "PORTAL_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Directory for the saved profile (defaults to the platform data dir)
    #[arg(long, env = "PORTAL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory for the session token (defaults to the platform runtime dir)
    #[arg(long, env = "PORTAL_RUNTIME_DIR")]
    pub runtime_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "PORTAL_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Accept auth responses without a token (development servers only)
    #[arg(long, env = "PORTAL_SYNTHESIZE_MISSING_TOKEN")]
    pub synthesize_missing_token: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the current session
    Status,
    /// Sign in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and sign in
    Register(RegisterArgs),
    /// Sign out and forget the saved session
    Logout,
    /// Fetch the profile again
    Refresh,
    /// Validate and submit a housing application
    Apply {
        /// JSON file with the form fields
        #[arg(long)]
        form: PathBuf,
        /// Only validate; do not submit
        #[arg(long)]
        check: bool,
    },
    /// List properties
    Properties {
        #[arg(long)]
        state: Option<String>,
        /// 2 Bedroom, 3 Bedroom, 4 Bedroom, Duplex or Bungalow
        #[arg(long = "type")]
        property_type: Option<String>,
        /// 0-20m, 20-30m, 30-50m or 50m+
        #[arg(long)]
        price: Option<String>,
    },
    /// List the locations open in a state
    Locations { state: String },
}

impl Command {
    /// Catalogue lookups work offline; everything else restores the session
    pub fn needs_session(&self) -> bool {
        !matches!(self, Command::Properties { .. } | Command::Locations { .. })
    }
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub firstname: String,
    #[arg(long)]
    pub lastname: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub state_of_origin: String,
    #[arg(long, default_value = "")]
    pub property_type: String,
    #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_properties_filters() {
        let cli = Cli::try_parse_from([
            "portal",
            "--api-base-url",
            "http://127.0.0.1:9/api",
            "properties",
            "--state",
            "Abuja",
            "--type",
            "3 Bedroom",
        ])
        .unwrap();

        assert_eq!(cli.api_base_url, "http://127.0.0.1:9/api");
        match cli.command {
            Command::Properties {
                state,
                property_type,
                price,
            } => {
                assert_eq!(state.as_deref(), Some("Abuja"));
                assert_eq!(property_type.as_deref(), Some("3 Bedroom"));
                assert!(price.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_catalogue_commands_skip_session_restore() {
        let parse = |args: &[&str]| {
            Cli::try_parse_from(std::iter::once("portal").chain(args.iter().copied()))
                .unwrap()
                .command
        };

        assert!(!parse(&["properties"]).needs_session());
        assert!(!parse(&["locations", "Lagos"]).needs_session());
        assert!(parse(&["status"]).needs_session());
        assert!(parse(&["logout"]).needs_session());
        assert!(parse(&["apply", "--form", "form.json"]).needs_session());
    }
}
