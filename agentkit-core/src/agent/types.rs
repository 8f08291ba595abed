use serde::Serialize;

pub const UNKNOWN_CODE: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Desktop,
    Unknown,
}

impl DeviceType {
    pub fn code(&self) -> i32 {
        match self {
            Self::Mobile => 1,
            Self::Desktop => 2,
            Self::Unknown => UNKNOWN_CODE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Unknown => "unknown",
        }
    }
}

/// Handset family the browser runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserType {
    IPhone,
    IPad,
    IPod,
    Android,
    Unknown,
}

impl BrowserType {
    pub fn code(&self) -> i32 {
        match self {
            Self::IPhone => 1,
            Self::IPad => 2,
            Self::IPod => 3,
            Self::Android => 4,
            Self::Unknown => UNKNOWN_CODE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IPhone => "iphone",
            Self::IPad => "ipad",
            Self::IPod => "ipod",
            Self::Android => "android",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsType {
    Ios,
    Android,
    Unknown,
}

impl OsType {
    pub fn code(&self) -> i32 {
        match self {
            Self::Ios => 1,
            Self::Android => 2,
            Self::Unknown => UNKNOWN_CODE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Unknown => "unknown",
        }
    }
}

/// Yes/No answer shared by the retina, legacy OS, in-app and app-installed checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flag {
    Yes,
    #[default]
    No,
}

impl Flag {
    pub fn code(&self) -> i32 {
        match self {
            Self::Yes => 1,
            Self::No => 0,
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}
