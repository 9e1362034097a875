/// Any failure of the single chat-completion call.
///
/// `Display` renders only the human-readable message; [`ChatCompletionError::kind`]
/// carries the category name shown next to it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChatCompletionError {
    #[error(
        "The api_key client option must be set either by passing api_key to the client or by setting the OPENAI_API_KEY environment variable"
    )]
    MissingApiKey,
    #[error("{0}")]
    Connection(String),
    #[error("Request timed out.")]
    Timeout,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Authentication(String),
    #[error("{0}")]
    PermissionDenied(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    RateLimit(String),
    #[error("{0}")]
    InternalServer(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    MalformedResponse(String),
}

impl ChatCompletionError {
    /// Category name of the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            ChatCompletionError::MissingApiKey => "OpenAIError",
            ChatCompletionError::Connection(_) => "APIConnectionError",
            ChatCompletionError::Timeout => "APITimeoutError",
            ChatCompletionError::BadRequest(_) => "BadRequestError",
            ChatCompletionError::Authentication(_) => "AuthenticationError",
            ChatCompletionError::PermissionDenied(_) => "PermissionDeniedError",
            ChatCompletionError::NotFound(_) => "NotFoundError",
            ChatCompletionError::Conflict(_) => "ConflictError",
            ChatCompletionError::UnprocessableEntity(_) => "UnprocessableEntityError",
            ChatCompletionError::RateLimit(_) => "RateLimitError",
            ChatCompletionError::InternalServer(_) => "InternalServerError",
            ChatCompletionError::Status { .. } => "APIStatusError",
            ChatCompletionError::MalformedResponse(_) => "APIResponseValidationError",
        }
    }

    /// Maps a non-success HTTP status to its error category.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => ChatCompletionError::BadRequest(message),
            401 => ChatCompletionError::Authentication(message),
            403 => ChatCompletionError::PermissionDenied(message),
            404 => ChatCompletionError::NotFound(message),
            409 => ChatCompletionError::Conflict(message),
            422 => ChatCompletionError::UnprocessableEntity(message),
            429 => ChatCompletionError::RateLimit(message),
            500..=599 => ChatCompletionError::InternalServer(message),
            _ => ChatCompletionError::Status { status, message },
        }
    }
}

/// Failures outside the protected API call. These abort the run.
#[derive(Debug, thiserror::Error)]
pub enum DiagnosticError {
    #[error(transparent)]
    Environment(#[from] crate::domain::environment::EnvironmentError),
}
