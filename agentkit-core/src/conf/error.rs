use crate::conf::types::UaEngineKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse HCL in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    // Validation
    #[error("the {engine} engine requires `user_agent.regexes` to be set")]
    MissingRegexes { engine: &'static str },

    #[error("user_agent.max_length must be greater than zero")]
    InvalidMaxLength,

    #[error("classifier.app_installed_param must not be empty")]
    EmptyAppInstalledParam,
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn missing_regexes(engine: UaEngineKind) -> Self {
        Self::MissingRegexes {
            engine: engine.as_str(),
        }
    }
}
