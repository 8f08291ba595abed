use crate::cli::build_classifier;
use agentkit_core::RequestCtx;
use anyhow::Result;
use serde::Serialize;
use std::borrow::Cow;
use std::path::PathBuf;

pub struct ClassifyArgs {
    pub agent: Option<String>,
    pub query: Option<String>,
    pub signature: Option<String>,
    pub codes: bool,
    pub config: Option<PathBuf>,
}

#[derive(Serialize)]
struct Report<T: Serialize> {
    agent: Option<String>,
    #[serde(flatten)]
    classification: T,
    is_opened_in_app: serde_json::Value,
    is_app_installed: serde_json::Value,
}

pub fn run(args: ClassifyArgs) -> Result<()> {
    let classifier = build_classifier(args.config.as_deref())?;

    let request = RequestCtx {
        query: args.query,
        ..RequestCtx::default()
    };
    let explicit = args.agent.as_deref();

    let bound = classifier.bind(&request);
    let info = bound.device_info(explicit);
    let in_app = bound.is_opened_in_app(explicit, args.signature.as_deref());
    let installed = bound.is_app_installed();
    let agent = bound.agent(explicit).map(Cow::into_owned);

    tracing::debug!(agent = agent.as_deref().unwrap_or(""), "classified");

    let json = if args.codes {
        serde_json::to_string_pretty(&Report {
            agent,
            classification: info.codes(),
            is_opened_in_app: in_app.code().into(),
            is_app_installed: installed.code().into(),
        })?
    } else {
        serde_json::to_string_pretty(&Report {
            agent,
            classification: info,
            is_opened_in_app: in_app.as_str().into(),
            is_app_installed: installed.as_str().into(),
        })?
    };

    println!("{json}");
    Ok(())
}
