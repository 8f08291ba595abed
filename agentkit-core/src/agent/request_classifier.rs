use crate::agent::classifier::UserAgentClassifier;
use crate::agent::mapping;
use crate::agent::result::ClassificationResult;
use crate::agent::types::{BrowserType, DeviceType, Flag, OsType};
use crate::ctx::RequestCtx;
use crate::enrichment::user_agent::UserAgentInfo;
use std::borrow::Cow;
use std::cell::OnceCell;

/// A classifier bound to one request.
///
/// Every lookup takes an optional agent. `None` or an empty string means the
/// request's own `User-Agent` header, which is parsed at most once per binding.
/// Any other agent is parsed on demand and leaves the cached result untouched.
pub struct RequestClassifier<'a> {
    classifier: &'a UserAgentClassifier,
    request: &'a RequestCtx,
    ambient: OnceCell<UserAgentInfo>,
}

impl<'a> RequestClassifier<'a> {
    pub(crate) fn new(classifier: &'a UserAgentClassifier, request: &'a RequestCtx) -> Self {
        Self {
            classifier,
            request,
            ambient: OnceCell::new(),
        }
    }

    /// The agent a lookup with `explicit` would classify.
    pub fn agent<'b>(&'b self, explicit: Option<&'b str>) -> Option<Cow<'b, str>> {
        self.request.agent(explicit)
    }

    pub fn browser_type(&self, agent: Option<&str>) -> BrowserType {
        mapping::browser_type(&self.info(agent))
    }

    pub fn os_type(&self, agent: Option<&str>) -> OsType {
        mapping::os_type(&self.info(agent))
    }

    pub fn device_type(&self, agent: Option<&str>) -> DeviceType {
        mapping::device_type(&self.info(agent))
    }

    pub fn is_mobile(&self, agent: Option<&str>) -> bool {
        self.info(agent).is_mobile
    }

    pub fn is_legacy_os(&self, agent: Option<&str>) -> Flag {
        mapping::is_legacy_os(&self.info(agent), self.classifier.settings().legacy_ios_major)
    }

    pub fn is_retina(&self, agent: Option<&str>) -> Flag {
        self.device_info(agent).is_retina
    }

    /// In-app check against `signature`, or the configured app signature when
    /// none is given.
    pub fn is_opened_in_app(&self, agent: Option<&str>, signature: Option<&str>) -> Flag {
        let signature = signature.unwrap_or(&self.classifier.settings().app_signature);

        match self.agent(agent) {
            Some(agent) => self.classifier.is_opened_in_app(&agent, signature),
            None => Flag::No,
        }
    }

    pub fn is_app_installed(&self) -> Flag {
        self.classifier
            .is_app_installed(self.request.query.as_deref())
    }

    pub fn device_info(&self, agent: Option<&str>) -> ClassificationResult {
        self.classifier.classify_info(&self.info(agent))
    }

    fn info(&self, agent: Option<&str>) -> Cow<'_, UserAgentInfo> {
        let ambient = self.request.user_agent();

        match agent.filter(|a| !a.is_empty()) {
            Some(explicit) if Some(explicit) != ambient.as_deref() => {
                Cow::Owned(self.classifier.inspect(explicit))
            }
            _ => Cow::Borrowed(self.ambient.get_or_init(|| {
                ambient
                    .map(|ua| self.classifier.inspect(&ua))
                    .unwrap_or_default()
            })),
        }
    }
}
