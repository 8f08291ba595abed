use crate::ctx::query::query_param;
use http::header::USER_AGENT;
use http::request::Parts;
use http::{HeaderMap, HeaderValue, Request};
use std::borrow::Cow;

/// The inbound request a classification is made on behalf of.
///
/// Only the pieces the classifier reads are kept: the header map (for the
/// ambient `User-Agent`) and the raw query string.
#[derive(Debug, Clone, Default)]
pub struct RequestCtx {
    pub headers: HeaderMap,

    /// Raw query string without the leading `?`.
    pub query: Option<String>,
}

/// Hydration API
impl RequestCtx {
    pub fn new(headers: HeaderMap, query: Option<String>) -> Self {
        Self { headers, query }
    }

    pub fn from_parts(parts: &Parts) -> Self {
        Self {
            headers: parts.headers.clone(),
            query: parts.uri.query().map(str::to_string),
        }
    }

    pub fn from_request<B>(req: &Request<B>) -> Self {
        Self {
            headers: req.headers().clone(),
            query: req.uri().query().map(str::to_string),
        }
    }

    /// Context for a caller that only has an agent string, e.g. a CGI
    /// environment or a log line.
    pub fn from_agent(agent: &str) -> Self {
        let mut headers = HeaderMap::new();
        // Non-ASCII text is kept as obs-text; only control bytes are refused.
        match HeaderValue::from_bytes(agent.as_bytes()) {
            Ok(value) => {
                headers.insert(USER_AGENT, value);
            }
            Err(_) => tracing::debug!("user-agent holds control bytes, header not set"),
        }

        Self {
            headers,
            query: None,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

/// Accessors
impl RequestCtx {
    /// The request's own `User-Agent` header, if present and non-empty.
    ///
    /// Bytes outside visible ASCII are decoded as UTF-8, lossily.
    pub fn user_agent(&self) -> Option<Cow<'_, str>> {
        self.headers
            .get(USER_AGENT)
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
            .filter(|ua| !ua.is_empty())
    }

    /// Resolves the agent to classify: the explicit one when it is non-empty,
    /// the request header otherwise.
    pub fn agent<'a>(&'a self, explicit: Option<&'a str>) -> Option<Cow<'a, str>> {
        explicit
            .filter(|agent| !agent.is_empty())
            .map(Cow::Borrowed)
            .or_else(|| self.user_agent())
    }

    pub fn query_param(&self, name: &str) -> Option<Cow<'_, str>> {
        query_param(self.query.as_deref()?, name)
    }
}
