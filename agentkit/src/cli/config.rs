use agentkit_core::load_config;
use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to config file
        #[arg(default_value = "agentkit.hcl")]
        path: PathBuf,
    },

    /// Print resolved configuration as JSON
    Dump {
        #[arg(default_value = "agentkit.hcl")]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(path),
        ConfigCmd::Dump { path } => dump(path),
    }
}

pub fn check(path: PathBuf) -> Result<()> {
    let cfg = load_config(&path)?;

    println!("✔ Config loaded successfully");
    println!("✔ engine: {}", cfg.user_agent.engine.as_str());
    println!("✔ legacy iOS major: {}", cfg.classifier.legacy_ios_major);
    println!("✔ app signature: {}", cfg.classifier.app_signature);

    Ok(())
}

pub fn dump(path: PathBuf) -> Result<()> {
    let cfg = load_config(&path)?;
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}
