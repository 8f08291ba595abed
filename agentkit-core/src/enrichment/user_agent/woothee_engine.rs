use crate::enrichment::user_agent::UserAgentInfo;
use woothee::parser::Parser;

pub struct WootheeEngine {
    parser: Parser,
}

impl WootheeEngine {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    pub fn parse(&self, ua: &str) -> UserAgentInfo {
        let Some(result) = self.parser.parse(ua) else {
            return UserAgentInfo::unrecognized();
        };

        let (recognized, is_mobile, is_bot) = match result.category {
            "pc" | "appliance" | "misc" => (true, false, false),
            "smartphone" | "mobilephone" => (true, true, false),
            "crawler" => (true, false, true),
            _ => (false, false, false),
        };

        let os = result.os;
        let is_iphone = os == "iPhone";
        let is_ipad = os == "iPad";
        let is_ipod = os == "iPod";
        let is_ios = is_iphone || is_ipad || is_ipod || os == "iOS";
        let is_android = os == "Android";

        let os_version = result.os_version.to_string();
        let os_version = match os_version.as_str() {
            "" | "UNKNOWN" => None,
            _ => Some(os_version),
        };

        UserAgentInfo {
            recognized: recognized || is_ios || is_android,
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

impl Default for WootheeEngine {
    fn default() -> Self {
        Self::new()
    }
}
