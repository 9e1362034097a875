use async_trait::async_trait;

use crate::domain::diagnostic::errors::DiagnosticError;
use crate::domain::diagnostic::model::DiagnosticReport;

pub const DEFAULT_API_KEY_VARIABLE: &str = "OPENAI_API_KEY";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_PROMPT: &str = "Merhaba dünya";

#[derive(Debug, Clone)]
pub struct RunDiagnosticParams {
    pub api_key_variable: String,
    pub model: String,
    pub prompt: String,
}

impl Default for RunDiagnosticParams {
    fn default() -> Self {
        Self {
            api_key_variable: DEFAULT_API_KEY_VARIABLE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

#[async_trait]
pub trait RunDiagnosticUseCase: Send + Sync {
    async fn execute(&self, params: RunDiagnosticParams)
    -> Result<DiagnosticReport, DiagnosticError>;
}
