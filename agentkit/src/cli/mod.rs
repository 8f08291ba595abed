pub mod batch;
pub mod classify;
pub mod config;

use agentkit_core::{AgentkitConfig, UserAgentClassifier, load_config};
use std::path::Path;

pub(crate) fn build_classifier(config: Option<&Path>) -> anyhow::Result<UserAgentClassifier> {
    let cfg = match config {
        Some(path) => load_config(path)?,
        None => AgentkitConfig::default(),
    };

    UserAgentClassifier::from_config(&cfg)
}
