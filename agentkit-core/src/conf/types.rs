use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_MAX_USER_AGENT_LENGTH: usize = 2048;
pub const DEFAULT_LEGACY_IOS_MAJOR: u32 = 6;
pub const DEFAULT_APP_SIGNATURE: &str = "MicroMessenger";
pub const DEFAULT_APP_INSTALLED_PARAM: &str = "isappinstalled";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentkitConfig {
    #[serde(default)]
    pub user_agent: UserAgentConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UserAgentConfig {
    #[serde(default)]
    pub engine: UaEngineKind,

    /// Path to a ua-parser `regexes.yaml`. Only read by the uaparser engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regexes: Option<PathBuf>,

    /// Agents longer than this are never handed to the engine.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            engine: UaEngineKind::default(),
            regexes: None,
            max_length: DEFAULT_MAX_USER_AGENT_LENGTH,
        }
    }
}

fn default_max_length() -> usize {
    DEFAULT_MAX_USER_AGENT_LENGTH
}

#[derive(Default, Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UaEngineKind {
    UaParser,
    #[default]
    Woothee,
}

impl UaEngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UaEngineKind::UaParser => "uaparser",
            UaEngineKind::Woothee => "woothee",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// iOS major version reported as the legacy OS.
    #[serde(default = "default_legacy_ios_major")]
    pub legacy_ios_major: u32,

    /// Token identifying the in-app browser of the messaging app.
    #[serde(default = "default_app_signature")]
    pub app_signature: String,

    /// Query parameter carrying the "app installed" flag.
    #[serde(default = "default_app_installed_param")]
    pub app_installed_param: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            legacy_ios_major: DEFAULT_LEGACY_IOS_MAJOR,
            app_signature: DEFAULT_APP_SIGNATURE.to_string(),
            app_installed_param: DEFAULT_APP_INSTALLED_PARAM.to_string(),
        }
    }
}

fn default_legacy_ios_major() -> u32 {
    DEFAULT_LEGACY_IOS_MAJOR
}

fn default_app_signature() -> String {
    DEFAULT_APP_SIGNATURE.to_string()
}

fn default_app_installed_param() -> String {
    DEFAULT_APP_INSTALLED_PARAM.to_string()
}
