use business::domain::environment::EnvironmentProvider;

use super::{diagnostic_config::DiagnosticConfig, openai_config::OpenAIConfig};

pub struct AppConfig {
    pub openai: OpenAIConfig,
    pub diagnostic: DiagnosticConfig,
}

impl AppConfig {
    pub fn from_environment(env: &dyn EnvironmentProvider) -> anyhow::Result<Self> {
        Ok(Self {
            openai: OpenAIConfig::from_environment(env)?,
            diagnostic: DiagnosticConfig::from_environment(env),
        })
    }
}
