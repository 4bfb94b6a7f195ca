pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::http::ReqwestTransport;
pub use adapters::memory::{mock_heroes, InMemoryHeroApi};
pub use adapters::messages::{MessageService, TracingDiagnostics, TracingMessages};
pub use config::{settings::ApiSettings, toml_config::TomlConfig};
pub use core::hero_service::HeroService;
pub use domain::model::{Hero, HeroRef, NewHero};
pub use utils::error::{HeroError, Result};
