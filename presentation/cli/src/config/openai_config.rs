use std::time::Duration;

use anyhow::Context;
use business::domain::environment::EnvironmentProvider;
use openai::client::DEFAULT_BASE_URL;

const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Configuration for OpenAI API access.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub organization: Option<String>,
    pub project: Option<String>,
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Load OpenAI configuration from the environment
    ///
    /// Environment variables:
    /// - OPENAI_API_KEY: API key (optional here, the request fails without it)
    /// - OPENAI_BASE_URL: API root (default: "https://api.openai.com/v1")
    /// - OPENAI_ORG_ID / OPENAI_PROJECT_ID: optional scoping headers
    /// - OPENAI_TIMEOUT_SECS: request timeout (default: 600)
    pub fn from_environment(env: &dyn EnvironmentProvider) -> anyhow::Result<Self> {
        let base_url =
            non_empty(env, "OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&base_url)
            .with_context(|| format!("OPENAI_BASE_URL is not a valid URL: {}", base_url))?;

        Ok(Self {
            api_key: non_empty(env, "OPENAI_API_KEY"),
            base_url,
            organization: non_empty(env, "OPENAI_ORG_ID"),
            project: non_empty(env, "OPENAI_PROJECT_ID"),
            timeout: Duration::from_secs(timeout_secs(env)),
        })
    }
}

fn non_empty(env: &dyn EnvironmentProvider, name: &str) -> Option<String> {
    env.var(name).filter(|value| !value.is_empty())
}

fn timeout_secs(env: &dyn EnvironmentProvider) -> u64 {
    match non_empty(env, "OPENAI_TIMEOUT_SECS") {
        None => DEFAULT_TIMEOUT_SECS,
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                tracing::warn!(
                    "Ignoring invalid OPENAI_TIMEOUT_SECS '{}', using {}s",
                    raw,
                    DEFAULT_TIMEOUT_SECS
                );
                DEFAULT_TIMEOUT_SECS
            }
        },
    }
}
