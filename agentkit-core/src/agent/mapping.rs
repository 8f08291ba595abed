//! Maps engine predicates onto categories. First matching predicate wins.

use crate::agent::types::{BrowserType, DeviceType, Flag, OsType};
use crate::enrichment::user_agent::UserAgentInfo;

pub fn browser_type(info: &UserAgentInfo) -> BrowserType {
    if info.is_iphone {
        BrowserType::IPhone
    } else if info.is_ipad {
        BrowserType::IPad
    } else if info.is_ipod {
        BrowserType::IPod
    } else if info.is_android {
        BrowserType::Android
    } else {
        BrowserType::Unknown
    }
}

pub fn os_type(info: &UserAgentInfo) -> OsType {
    if info.is_ios {
        OsType::Ios
    } else if info.is_android {
        OsType::Android
    } else {
        OsType::Unknown
    }
}

pub fn device_type(info: &UserAgentInfo) -> DeviceType {
    if !info.recognized {
        DeviceType::Unknown
    } else if info.is_mobile {
        DeviceType::Mobile
    } else {
        DeviceType::Desktop
    }
}

pub fn is_legacy_os(info: &UserAgentInfo, legacy_ios_major: u32) -> Flag {
    Flag::from(info.is_ios && info.os_major() == Some(legacy_ios_major))
}

pub fn is_retina(os: OsType, legacy_os: Flag) -> Flag {
    Flag::from(os == OsType::Ios && !legacy_os.is_yes())
}
