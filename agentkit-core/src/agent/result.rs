use crate::agent::mapping;
use crate::agent::types::{BrowserType, DeviceType, Flag, OsType};
use crate::enrichment::user_agent::UserAgentInfo;
use serde::Serialize;

/// Everything known about one agent, computed in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub device_type: DeviceType,
    pub browser_type: BrowserType,
    pub os_type: OsType,
    pub is_retina: Flag,
    pub is_legacy_os: Flag,
}

impl ClassificationResult {
    pub fn from_info(info: &UserAgentInfo, legacy_ios_major: u32) -> Self {
        let os_type = mapping::os_type(info);
        let is_legacy_os = mapping::is_legacy_os(info, legacy_ios_major);

        Self {
            device_type: mapping::device_type(info),
            browser_type: mapping::browser_type(info),
            os_type,
            is_retina: mapping::is_retina(os_type, is_legacy_os),
            is_legacy_os,
        }
    }

    pub fn unknown() -> Self {
        Self::from_info(&UserAgentInfo::unrecognized(), 0)
    }

    pub fn codes(&self) -> ClassificationCodes {
        ClassificationCodes {
            device_type: self.device_type.code(),
            browser_type: self.browser_type.code(),
            os_type: self.os_type.code(),
            is_retina: self.is_retina.code(),
            is_legacy_os: self.is_legacy_os.code(),
        }
    }
}

/// Integer form of [`ClassificationResult`], for clients that store the codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationCodes {
    pub device_type: i32,
    pub browser_type: i32,
    pub os_type: i32,
    pub is_retina: i32,
    pub is_legacy_os: i32,
}
