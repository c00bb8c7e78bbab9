pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::storage::LocalStorage;
pub use app::assistant::PhysioAssistant;
pub use config::TomlConfig;
pub use core::{
    classifier::{classify, KeywordClassifier},
    engine::ChatEngine,
    formatter::format_reply,
    library::ExerciseLibrary,
    session::ChatSession,
};
pub use utils::error::{AssistError, Result};
