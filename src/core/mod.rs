pub mod hero_service;

pub use crate::domain::model::{ApiRequest, ApiResponse, Hero, HeroRef, HttpMethod, NewHero};
pub use crate::domain::ports::{ConfigProvider, DiagnosticSink, HttpTransport, MessageSink};
pub use crate::utils::error::Result;
