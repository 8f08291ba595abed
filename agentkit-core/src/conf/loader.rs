use crate::conf::error::ConfigError;
use crate::conf::types::{AgentkitConfig, UaEngineKind};
use std::fs;
use std::path::Path;

/// Read, parse, and validate a configuration file.
pub fn load_config(path: &Path) -> Result<AgentkitConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg = parse_config(&s).map_err(|e| ConfigError::parse(path, e))?;

    validate(&cfg)?;

    tracing::debug!(
        path = %path.display(),
        engine = cfg.user_agent.engine.as_str(),
        "configuration loaded"
    );

    Ok(cfg)
}

/// Parse HCL text without validation.
pub fn parse_config(s: &str) -> Result<AgentkitConfig, hcl::Error> {
    hcl::from_str(s)
}

pub(crate) fn validate(cfg: &AgentkitConfig) -> Result<(), ConfigError> {
    let ua = &cfg.user_agent;

    if ua.engine == UaEngineKind::UaParser && ua.regexes.is_none() {
        return Err(ConfigError::missing_regexes(ua.engine));
    }

    if ua.max_length == 0 {
        return Err(ConfigError::InvalidMaxLength);
    }

    if cfg.classifier.app_installed_param.is_empty() {
        return Err(ConfigError::EmptyAppInstalledParam);
    }

    Ok(())
}
