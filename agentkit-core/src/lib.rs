pub mod agent;
pub mod conf;
pub mod ctx;
pub mod enrichment;
pub mod logging;

pub use agent::{
    BrowserType, ClassificationCodes, ClassificationResult, DeviceType, Flag, OsType,
    RequestClassifier, UserAgentClassifier,
};
pub use conf::{AgentkitConfig, ConfigError, load_config};
pub use ctx::RequestCtx;
