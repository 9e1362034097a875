use async_trait::async_trait;

use super::errors::ChatCompletionError;
use super::model::{ChatCompletion, ChatCompletionRequest};
use super::report::ReportLine;

/// Service port for the hosted chat-completion API.
#[async_trait]
pub trait ChatCompletionService: Send + Sync {
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletion, ChatCompletionError>;
}

/// Output port receiving report lines as soon as they are known.
pub trait ReportWriter: Send + Sync {
    fn write_line(&self, line: &ReportLine);
}
