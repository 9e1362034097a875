use std::sync::Arc;

use logger::TracingLogger;
use openai::chat_completion::ChatCompletionOpenAI;
use openai::client::OpenAIClient;

use business::application::diagnostic::run::RunDiagnosticUseCaseImpl;
use business::domain::diagnostic::services::ReportWriter;
use business::domain::environment::EnvironmentProvider;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub run_diagnostic: Arc<RunDiagnosticUseCaseImpl>,
}

impl DependencyContainer {
    pub fn new(
        config: &AppConfig,
        environment: Arc<dyn EnvironmentProvider>,
        writer: Arc<dyn ReportWriter>,
    ) -> Self {
        let logger = Arc::new(TracingLogger::new("diagnostic"));

        // Infrastructure adapters
        let openai_client = OpenAIClient::new(
            config.openai.api_key.clone(),
            &config.openai.base_url,
            config.openai.timeout,
        )
        .with_organization(config.openai.organization.clone())
        .with_project(config.openai.project.clone());
        let chat = Arc::new(ChatCompletionOpenAI::new(openai_client));

        let run_diagnostic = Arc::new(RunDiagnosticUseCaseImpl {
            environment,
            chat,
            writer,
            logger,
        });

        Self { run_diagnostic }
    }
}
