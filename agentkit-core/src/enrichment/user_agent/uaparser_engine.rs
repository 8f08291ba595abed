use crate::enrichment::user_agent::UserAgentInfo;
use anyhow::Context;
use std::path::Path;
use uaparser::{Parser, UserAgentParser};

const OTHER: &str = "Other";

pub struct UaParserEngine {
    parser: UserAgentParser,
}

impl UaParserEngine {
    pub fn new(regexes_yaml: &[u8]) -> anyhow::Result<Self> {
        let parser = UserAgentParser::from_bytes(regexes_yaml)?;
        Ok(Self { parser })
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read regexes file {}", path.display()))?;
        Self::new(&bytes)
    }

    pub fn parse(&self, ua: &str) -> UserAgentInfo {
        let client = self.parser.parse(ua);

        let ua_family = client.user_agent.family.to_string();
        let device_family = client.device.family.to_string();
        let os_family = client.os.family.to_string();

        let recognized = ua_family != OTHER || device_family != OTHER || os_family != OTHER;
        if !recognized {
            return UserAgentInfo::unrecognized();
        }

        let is_iphone = device_family == "iPhone";
        let is_ipad = device_family == "iPad";
        let is_ipod = device_family.starts_with("iPod");
        let is_ios = os_family == "iOS";
        let is_android = os_family == "Android";

        let is_bot = device_family == "Spider";
        let is_mobile = !is_bot
            && (is_iphone
                || is_ipad
                || is_ipod
                || is_android
                || device_family.to_lowercase().contains("mobile")
                || ua.contains("Mobile"));

        let os_version = client.os.major.as_deref().map(|major| {
            match client.os.minor.as_deref() {
                Some(minor) => format!("{major}.{minor}"),
                None => major.to_string(),
            }
        });

        UserAgentInfo {
            recognized,
            is_mobile,
            is_bot,
            is_iphone,
            is_ipad,
            is_ipod,
            is_android,
            is_ios,
            os_version,
        }
    }
}
