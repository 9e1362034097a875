use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::diagnostic::errors::DiagnosticError;
use crate::domain::diagnostic::model::{
    CallOutcome, ChatCompletionRequest, DiagnosticReport, EnvironmentSnapshot,
};
use crate::domain::diagnostic::report::ReportLine;
use crate::domain::diagnostic::services::{ChatCompletionService, ReportWriter};
use crate::domain::diagnostic::use_cases::run::{RunDiagnosticParams, RunDiagnosticUseCase};
use crate::domain::environment::EnvironmentProvider;
use crate::domain::logger::Logger;

pub struct RunDiagnosticUseCaseImpl {
    pub environment: Arc<dyn EnvironmentProvider>,
    pub chat: Arc<dyn ChatCompletionService>,
    pub writer: Arc<dyn ReportWriter>,
    pub logger: Arc<dyn Logger>,
}

impl RunDiagnosticUseCaseImpl {
    async fn call_api(&self, params: &RunDiagnosticParams) -> CallOutcome {
        let request = ChatCompletionRequest::single_user_message(&params.model, &params.prompt);

        self.logger.debug(&format!(
            "Sending chat completion request to model: {}",
            request.model
        ));

        match self.chat.complete(&request).await {
            Ok(completion) => CallOutcome::Reply {
                text: completion.content.unwrap_or_default(),
            },
            Err(error) => {
                self.logger
                    .warn(&format!("Chat completion failed: {}", error.kind()));
                CallOutcome::Failure {
                    kind: error.kind().to_string(),
                    message: error.to_string(),
                }
            }
        }
    }
}

#[async_trait]
impl RunDiagnosticUseCase for RunDiagnosticUseCaseImpl {
    async fn execute(
        &self,
        params: RunDiagnosticParams,
    ) -> Result<DiagnosticReport, DiagnosticError> {
        let executable_path = self.environment.executable_path()?;
        self.writer.write_line(&ReportLine::Runtime {
            executable_path: executable_path.clone(),
        });

        let api_key_present = self.environment.is_set(&params.api_key_variable);
        self.writer.write_line(&ReportLine::ApiKeyPresence {
            variable: params.api_key_variable.clone(),
            present: api_key_present,
        });

        let outcome = self.call_api(&params).await;
        let line = match &outcome {
            CallOutcome::Reply { text } => ReportLine::ModelReply { text: text.clone() },
            CallOutcome::Failure { kind, message } => ReportLine::ApiFailure {
                kind: kind.clone(),
                message: message.clone(),
            },
        };
        self.writer.write_line(&line);

        self.logger.info(&format!(
            "Diagnostic finished (reply received: {})",
            outcome.is_reply()
        ));

        Ok(DiagnosticReport {
            snapshot: EnvironmentSnapshot {
                executable_path,
                api_key_present,
            },
            outcome,
        })
    }
}
