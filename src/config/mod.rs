pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli {
    use super::settings::{ApiSettings, DEFAULT_API_BASE};
    use super::toml_config::TomlConfig;
    use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
    use crate::core::hero_service::DEFAULT_HEROES_PATH;
    use crate::utils::error::{HeroError, Result};
    use crate::utils::validation::Validate;
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "hero-service")]
    #[command(about = "Manage heroes through the hero web API")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_API_BASE)]
        pub api_base: String,

        #[arg(long, default_value = DEFAULT_HEROES_PATH)]
        pub heroes_path: String,

        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
        pub timeout_seconds: u64,

        #[arg(long = "header", value_parser = parse_header, help = "Extra request header, NAME=VALUE")]
        pub headers: Vec<(String, String)>,

        #[arg(long, help = "TOML file with an [api] section; overrides the flags above")]
        pub config: Option<String>,

        #[arg(long, help = "Serve heroes from the built-in demo data set")]
        pub in_memory: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
    pub enum Command {
        /// List all heroes
        List,
        /// Show one hero
        Get { id: i64 },
        /// Add a hero; the server assigns its id
        Add { name: String },
        /// Rename an existing hero
        Update { id: i64, name: String },
        /// Delete a hero
        Delete { id: i64 },
    }

    fn parse_header(raw: &str) -> std::result::Result<(String, String), String> {
        let (name, value) = raw
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("header name is empty in '{}'", raw));
        }
        Ok((name.to_string(), value.trim().to_string()))
    }

    impl CliConfig {
        /// Flags first, then the TOML file on top, then validation.
        pub fn settings(&self) -> Result<ApiSettings> {
            let mut settings = ApiSettings {
                base_url: self.api_base.clone(),
                heroes_path: self.heroes_path.clone(),
                timeout_seconds: self.timeout_seconds,
                headers: self.headers.iter().cloned().collect(),
            };

            if let Some(path) = &self.config {
                let file = TomlConfig::from_file(path).map_err(|e| HeroError::Config {
                    message: format!("cannot load {}: {}", path, e),
                })?;
                settings = file.apply_to(settings);
            }

            settings.validate()?;
            Ok(settings)
        }
    }

}
