use crate::agent::mapping;
use crate::agent::request_classifier::RequestClassifier;
use crate::agent::result::ClassificationResult;
use crate::agent::signature::contains_token;
use crate::agent::types::{BrowserType, DeviceType, Flag, OsType};
use crate::conf::AgentkitConfig;
use crate::conf::types::{ClassifierConfig, DEFAULT_MAX_USER_AGENT_LENGTH};
use crate::ctx::{RequestCtx, equals_one, query_param};
use crate::enrichment::user_agent::{UaEngine, UserAgentInfo, build_ua_engine};

/// Maps a user-agent engine's verdicts onto coarse device categories.
///
/// Built once at process start and shared; every lookup is a pure function of
/// its input. Nothing here fails: anything the engine cannot place resolves to
/// `Unknown` or [`Flag::No`].
pub struct UserAgentClassifier {
    engine: UaEngine,
    max_length: usize,
    settings: ClassifierConfig,
}

impl UserAgentClassifier {
    pub fn from_config(cfg: &AgentkitConfig) -> anyhow::Result<Self> {
        let engine = build_ua_engine(&cfg.user_agent)?;

        Ok(Self {
            engine,
            max_length: cfg.user_agent.max_length,
            settings: cfg.classifier.clone(),
        })
    }

    /// Classifier over `engine` with default settings.
    pub fn new(engine: UaEngine) -> Self {
        Self {
            engine,
            max_length: DEFAULT_MAX_USER_AGENT_LENGTH,
            settings: ClassifierConfig::default(),
        }
    }

    pub fn with_settings(mut self, settings: ClassifierConfig) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &ClassifierConfig {
        &self.settings
    }

    /// Bind to one request so lookups may omit the agent.
    pub fn bind<'a>(&'a self, request: &'a RequestCtx) -> RequestClassifier<'a> {
        RequestClassifier::new(self, request)
    }

    /// Runs the engine, skipping oversized agents.
    pub fn inspect(&self, agent: &str) -> UserAgentInfo {
        if agent.len() > self.max_length {
            tracing::debug!(
                len = agent.len(),
                max = self.max_length,
                "user-agent too long, not parsed"
            );
            return UserAgentInfo::unrecognized();
        }

        let info = self.engine.parse(agent);
        tracing::debug!(
            engine = self.engine.kind().as_str(),
            recognized = info.recognized,
            mobile = info.is_mobile,
            bot = info.is_bot,
            "user-agent parsed"
        );
        info
    }
}

/// Lookups on an explicit agent string.
impl UserAgentClassifier {
    pub fn classify(&self, agent: &str) -> ClassificationResult {
        self.classify_info(&self.inspect(agent))
    }

    pub fn browser_type(&self, agent: &str) -> BrowserType {
        mapping::browser_type(&self.inspect(agent))
    }

    pub fn os_type(&self, agent: &str) -> OsType {
        mapping::os_type(&self.inspect(agent))
    }

    pub fn device_type(&self, agent: &str) -> DeviceType {
        mapping::device_type(&self.inspect(agent))
    }

    pub fn is_mobile(&self, agent: &str) -> bool {
        self.inspect(agent).is_mobile
    }

    pub fn is_legacy_os(&self, agent: &str) -> Flag {
        mapping::is_legacy_os(&self.inspect(agent), self.settings.legacy_ios_major)
    }

    pub fn is_retina(&self, agent: &str) -> Flag {
        self.classify(agent).is_retina
    }

    /// Whether the agent carries `signature`, the token a messaging app
    /// appends to its in-app browser's user agent.
    pub fn is_opened_in_app(&self, agent: &str, signature: &str) -> Flag {
        Flag::from(agent.len() <= self.max_length && contains_token(agent, signature))
    }

    /// Reads the app-installed parameter from a raw query string.
    pub fn is_app_installed(&self, query: Option<&str>) -> Flag {
        let installed = query
            .and_then(|q| query_param(q, &self.settings.app_installed_param))
            .is_some_and(|value| equals_one(&value));
        Flag::from(installed)
    }

    pub(crate) fn classify_info(&self, info: &UserAgentInfo) -> ClassificationResult {
        ClassificationResult::from_info(info, self.settings.legacy_ios_major)
    }
}
