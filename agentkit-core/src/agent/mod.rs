mod classifier;
mod mapping;
mod request_classifier;
mod result;
mod signature;
mod types;

#[cfg(test)]
mod tests;

pub use classifier::UserAgentClassifier;
pub use mapping::{browser_type, device_type, is_legacy_os, is_retina, os_type};
pub use request_classifier::RequestClassifier;
pub use result::{ClassificationCodes, ClassificationResult};
pub use signature::contains_token;
pub use types::{BrowserType, DeviceType, Flag, OsType};
