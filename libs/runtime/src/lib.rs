//! Process plumbing shared by the userdir binaries: layered configuration
//! and logging setup.

pub mod config;
pub mod logging;

pub use config::{
    default_logging_config, AppConfig, AppSection, CliArgs, LoggingConfig, Section, SourceConfig,
};
