use std::path::PathBuf;

/// Author of a chat message. The diagnostic only ever speaks as the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// A single chat-completion request: a model identifier and its messages.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    /// Builds a request carrying exactly one user message.
    pub fn single_user_message(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(content)],
        }
    }
}

/// The part of a chat-completion response the diagnostic consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletion {
    /// Message content of the first returned choice. The API may return `null`.
    pub content: Option<String>,
}

/// What the diagnostic learned about its host before calling the API.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentSnapshot {
    pub executable_path: PathBuf,
    pub api_key_present: bool,
}

/// Result of the single API call. A run produces exactly one.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    Reply { text: String },
    Failure { kind: String, message: String },
}

impl CallOutcome {
    pub fn is_reply(&self) -> bool {
        matches!(self, CallOutcome::Reply { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticReport {
    pub snapshot: EnvironmentSnapshot,
    pub outcome: CallOutcome,
}
