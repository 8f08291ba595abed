mod uaparser_engine;
mod woothee_engine;


use crate::conf::types::{UaEngineKind, UserAgentConfig};
use crate::conf::ConfigError;
use crate::enrichment::user_agent::uaparser_engine::UaParserEngine;
use crate::enrichment::user_agent::woothee_engine::WootheeEngine;

pub fn build_ua_engine(cfg: &UserAgentConfig) -> anyhow::Result<UaEngine> {
    let engine = match cfg.engine {
        UaEngineKind::UaParser => {
            let path = cfg
                .regexes
                .as_deref()
                .ok_or_else(|| ConfigError::missing_regexes(cfg.engine))?;
            UaEngine::UaParser(UaParserEngine::from_path(path)?)
        }
        UaEngineKind::Woothee => UaEngine::Woothee(WootheeEngine::new()),
    };

    tracing::info!(engine = cfg.engine.as_str(), "user-agent engine ready");

    Ok(engine)
}

pub enum UaEngine {
    UaParser(UaParserEngine),
    Woothee(WootheeEngine),
}

impl UaEngine {
    pub fn parse(&self, ua: &str) -> UserAgentInfo {
        match self {
            UaEngine::UaParser(p) => p.parse(ua),
            UaEngine::Woothee(p) => p.parse(ua),
        }
    }

    pub fn kind(&self) -> UaEngineKind {
        match self {
            UaEngine::UaParser(_) => UaEngineKind::UaParser,
            UaEngine::Woothee(_) => UaEngineKind::Woothee,
        }
    }
}

/// Raw predicates reported by an engine for one agent string.
///
/// An agent the engine could not place anywhere is `UserAgentInfo::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAgentInfo {
    /// The engine matched the agent against at least one known signature.
    pub recognized: bool,
    /// Phones and tablets alike.
    pub is_mobile: bool,
    pub is_bot: bool,
    pub is_iphone: bool,
    pub is_ipad: bool,
    pub is_ipod: bool,
    pub is_android: bool,
    pub is_ios: bool,
    /// OS version as reported by the engine, e.g. "6.1" or "6_1".
    pub os_version: Option<String>,
}

impl UserAgentInfo {
    pub fn unrecognized() -> Self {
        Self::default()
    }

    /// Leading numeric component of `os_version`.
    pub fn os_major(&self) -> Option<u32> {
        self.os_version
            .as_deref()?
            .split(['.', '_'])
            .next()?
            .trim()
            .parse()
            .ok()
    }
}
