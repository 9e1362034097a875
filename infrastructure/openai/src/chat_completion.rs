use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use business::domain::diagnostic::errors::ChatCompletionError;
use business::domain::diagnostic::model::{ChatCompletion, ChatCompletionRequest};
use business::domain::diagnostic::services::ChatCompletionService;

use crate::client::OpenAIClient;

#[derive(Serialize)]
struct RequestBody<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: String,
    content: &'a str,
}

#[derive(Deserialize)]
struct ResponseBody {
    choices: Vec<ResponseChoice>,
}

#[derive(Deserialize)]
struct ResponseChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

pub struct ChatCompletionOpenAI {
    client: OpenAIClient,
}

impl ChatCompletionOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_body(request: &ChatCompletionRequest) -> RequestBody<'_> {
        RequestBody {
            model: &request.model,
            messages: request
                .messages
                .iter()
                .map(|m| RequestMessage {
                    role: m.role.to_string(),
                    content: &m.content,
                })
                .collect(),
        }
    }

    fn transport_error(error: reqwest::Error) -> ChatCompletionError {
        if error.is_timeout() {
            ChatCompletionError::Timeout
        } else {
            ChatCompletionError::Connection(error.to_string())
        }
    }

    fn status_error(status: u16, body: &str) -> ChatCompletionError {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Error code: {}", status));

        ChatCompletionError::from_status(status, message)
    }

    fn parse_response(body: &str) -> Result<ChatCompletion, ChatCompletionError> {
        let parsed: ResponseBody = serde_json::from_str(body)
            .map_err(|e| ChatCompletionError::MalformedResponse(e.to_string()))?;

        let choice = parsed.choices.into_iter().next().ok_or_else(|| {
            ChatCompletionError::MalformedResponse("response contained no choices".to_string())
        })?;

        Ok(ChatCompletion {
            content: choice.message.content,
        })
    }
}

#[async_trait]
impl ChatCompletionService for ChatCompletionOpenAI {
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletion, ChatCompletionError> {
        let auth_header = self
            .client
            .auth_header()
            .ok_or(ChatCompletionError::MissingApiKey)?;

        let mut builder = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", auth_header)
            .json(&Self::build_body(request));

        if let Some(organization) = &self.client.organization {
            builder = builder.header("OpenAI-Organization", organization);
        }
        if let Some(project) = &self.client.project {
            builder = builder.header("OpenAI-Project", project);
        }

        let response = builder.send().await.map_err(Self::transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(Self::transport_error)?;

        if !status.is_success() {
            return Err(Self::status_error(status.as_u16(), &body));
        }

        Self::parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> ChatCompletionRequest {
        ChatCompletionRequest::single_user_message("gpt-4o-mini", "Merhaba dünya")
    }

    fn adapter(server: &MockServer, api_key: Option<&str>) -> ChatCompletionOpenAI {
        ChatCompletionOpenAI::new(OpenAIClient::new(
            api_key.map(|k| k.to_string()),
            &server.uri(),
            Duration::from_secs(5),
        ))
    }

    fn completion_body(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "gpt-4o-mini",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": content},
                    "finish_reason": "stop"
                }
            ]
        })
    }

    #[tokio::test]
    async fn should_return_first_choice_content_when_api_succeeds() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test123"))
            .and(body_json(json!({
                "model": "gpt-4o-mini",
                "messages": [{"role": "user", "content": "Merhaba dünya"}]
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body("Merhaba! Nasıl yardımcı olabilirim?")),
            )
            .expect(1)
            .mount(&server)
            .await;

        // Act
        let result = adapter(&server, Some("sk-test123")).complete(&request()).await;

        // Assert
        assert_eq!(
            result,
            Ok(ChatCompletion {
                content: Some("Merhaba! Nasıl yardımcı olabilirim?".to_string())
            })
        );
    }

    #[tokio::test]
    async fn should_fail_without_sending_request_when_key_missing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = adapter(&server, None).complete(&request()).await;

        assert_eq!(result, Err(ChatCompletionError::MissingApiKey));
    }

    #[tokio::test]
    async fn should_map_unauthorized_to_authentication_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {
                    "message": "Invalid API key",
                    "type": "invalid_request_error",
                    "code": "invalid_api_key"
                }
            })))
            .mount(&server)
            .await;

        let error = adapter(&server, Some("sk-wrong"))
            .complete(&request())
            .await
            .unwrap_err();

        assert_eq!(error.kind(), "AuthenticationError");
        assert_eq!(error.to_string(), "Invalid API key");
    }

    #[tokio::test]
    async fn should_map_too_many_requests_to_rate_limit_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(429)
                    .set_body_json(json!({"error": {"message": "Rate limit reached"}})),
            )
            .mount(&server)
            .await;

        let error = adapter(&server, Some("sk-test123"))
            .complete(&request())
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ChatCompletionError::RateLimit("Rate limit reached".to_string())
        );
    }

    #[tokio::test]
    async fn should_fall_back_to_status_code_when_error_body_is_not_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let error = adapter(&server, Some("sk-test123"))
            .complete(&request())
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ChatCompletionError::InternalServer("Error code: 502".to_string())
        );
    }

    #[tokio::test]
    async fn should_report_malformed_response_when_choices_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let error = adapter(&server, Some("sk-test123"))
            .complete(&request())
            .await
            .unwrap_err();

        assert_eq!(error.kind(), "APIResponseValidationError");
    }

    #[tokio::test]
    async fn should_report_malformed_response_when_body_is_not_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let error = adapter(&server, Some("sk-test123"))
            .complete(&request())
            .await
            .unwrap_err();

        assert!(matches!(error, ChatCompletionError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn should_keep_null_content_as_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"index": 0, "message": {"role": "assistant", "content": null}}]
            })))
            .mount(&server)
            .await;

        let result = adapter(&server, Some("sk-test123")).complete(&request()).await;

        assert_eq!(result, Ok(ChatCompletion { content: None }));
    }

    #[tokio::test]
    async fn should_map_slow_response_to_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body("late"))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;
        let adapter = ChatCompletionOpenAI::new(OpenAIClient::new(
            Some("sk-test123".to_string()),
            &server.uri(),
            Duration::from_millis(100),
        ));

        let error = adapter.complete(&request()).await.unwrap_err();

        assert_eq!(error, ChatCompletionError::Timeout);
        assert_eq!(error.to_string(), "Request timed out.");
    }

    #[tokio::test]
    async fn should_send_organization_and_project_headers_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("openai-organization", "org-123"))
            .and(header("openai-project", "proj-456"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .expect(1)
            .mount(&server)
            .await;
        let client = OpenAIClient::new(
            Some("sk-test123".to_string()),
            &server.uri(),
            Duration::from_secs(5),
        )
        .with_organization(Some("org-123".to_string()))
        .with_project(Some("proj-456".to_string()));

        let result = ChatCompletionOpenAI::new(client).complete(&request()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_map_refused_connection_to_connection_error() {
        // Nothing listens on the discard port locally.
        let adapter = ChatCompletionOpenAI::new(OpenAIClient::new(
            Some("sk-test123".to_string()),
            "http://127.0.0.1:9",
            Duration::from_secs(5),
        ));

        let error = adapter.complete(&request()).await.unwrap_err();

        assert_eq!(error.kind(), "APIConnectionError");
    }
}
