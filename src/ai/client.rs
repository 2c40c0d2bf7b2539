//! AI chat-completion client
//!
//! One outbound HTTPS call per invocation, no retries, no caching. The
//! client enforces the single in-flight invariant with a compare-and-swap
//! on an atomic state flag: a second request while one is pending is
//! rejected immediately and produces no outbound call.
//!
//! TLS certificate validation is left on; certificate failures surface as a
//! distinct "insecure connection rejected" error instead of being trusted.

use crate::ai::classifier::{AnalysisResult, FitnessLevel, KeywordClassifier, ReplyClassifier};
use crate::ai::prompts::PromptKind;
use crate::ai::types::{ChatCompletionRequest, ChatCompletionResponse, RequestMessage};
use crate::config::AiConfig;
use crate::error::AppError;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::time::Duration;

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Fixed reply substituted for an empty or malformed completion
pub const FALLBACK_REPLY: &str = "抱歉，暂时无法获取AI回复，请稍后重试或转人工客服。";

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1000;
const TOP_P: f64 = 0.9;

const STATE_IDLE: u8 = 0;
const STATE_PENDING: u8 = 1;

/// Chat-completion client with single in-flight request semantics
pub struct AiClient {
    http: reqwest::Client,
    config: AiConfig,
    classifier: Box<dyn ReplyClassifier>,
    state: AtomicU8,
    connected: AtomicBool,
}

impl AiClient {
    /// Build a client with the default keyword classifier
    pub fn new(config: AiConfig) -> Self {
        Self::with_classifier(config, Box::new(KeywordClassifier::default()))
    }

    /// Build a client with a custom classification strategy
    pub fn with_classifier(config: AiConfig, classifier: Box<dyn ReplyClassifier>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            classifier,
            state: AtomicU8::new(STATE_IDLE),
            connected: AtomicBool::new(false),
        }
    }

    /// Whether the last transport attempt reached the upstream service
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    /// Whether a request is currently in flight
    pub fn is_pending(&self) -> bool {
        self.state.load(Ordering::Acquire) == STATE_PENDING
    }

    /// Run one request/response cycle and classify the reply.
    ///
    /// Fails fast with [`AppError::RequestPending`] if another request is in
    /// flight, and with [`AppError::RequestTimeout`] once the bounded wait
    /// elapses. An empty or malformed completion body is not an error: it
    /// yields the fixed fallback reply with `needs_human_handoff` set.
    pub async fn send_chat(
        &self,
        kind: PromptKind,
        user_text: &str,
        history: Option<&str>,
    ) -> Result<AnalysisResult, AppError> {
        if self.config.api_key.is_empty() {
            return Err(AppError::MissingApiKey);
        }

        self.state
            .compare_exchange(STATE_IDLE, STATE_PENDING, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| {
                tracing::debug!("request already in flight, dropping new request");
                AppError::RequestPending
            })?;
        let _guard = PendingGuard(&self.state);

        let result = self.execute(kind, user_text, history).await;

        match &result {
            Ok(_) => self.connected.store(true, Ordering::Release),
            Err(e) if e.connectivity_lost() => self.connected.store(false, Ordering::Release),
            Err(_) => {}
        }

        result
    }

    async fn execute(
        &self,
        kind: PromptKind,
        user_text: &str,
        history: Option<&str>,
    ) -> Result<AnalysisResult, AppError> {
        let url = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        );

        let body = ChatCompletionRequest {
            model: self.config.model.clone(),
            stream: false,
            messages: vec![
                RequestMessage::system(kind.system_prompt(user_text, history)),
                RequestMessage::user(user_text),
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
        };

        tracing::debug!(
            url = %url,
            model = %self.config.model,
            user_text_len = user_text.len(),
            "sending chat completion request"
        );

        let exchange = async {
            let response = self
                .http
                .post(&url)
                .bearer_auth(&self.config.api_key)
                .json(&body)
                .send()
                .await
                .map_err(transport_error)?;

            let status = response.status();
            if !status.is_success() {
                let error_body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<unreadable body>".to_string());
                tracing::error!(
                    status_code = status.as_u16(),
                    error_body = %error_body,
                    "chat completion returned error status"
                );
                return Err(AppError::Transport(format!(
                    "上游服务返回错误状态 {}",
                    status.as_u16()
                )));
            }

            let raw = response.text().await.map_err(transport_error)?;
            Ok(raw)
        };

        let raw = match tokio::time::timeout(
            Duration::from_secs(self.config.timeout_secs),
            exchange,
        )
        .await
        {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.config.timeout_secs,
                    "chat completion timed out, aborting in-flight call"
                );
                return Err(AppError::RequestTimeout);
            }
        };

        // Malformed or empty completion bodies degrade to the fallback reply
        // instead of failing the cycle.
        let parsed: ChatCompletionResponse = match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "chat completion body is not valid JSON");
                return Ok(fallback_result());
            }
        };

        let content = match parsed.first_content() {
            Some(content) => content.to_string(),
            None => {
                tracing::warn!("chat completion contains no usable content");
                return Ok(fallback_result());
            }
        };

        tracing::debug!(reply_len = content.len(), "chat completion received");
        Ok(self.classifier.classify(&content))
    }
}

/// Resets the pending flag when the cycle ends, on every exit path.
struct PendingGuard<'a>(&'a AtomicU8);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(STATE_IDLE, Ordering::Release);
    }
}

fn fallback_result() -> AnalysisResult {
    AnalysisResult {
        reply: FALLBACK_REPLY.to_string(),
        fitness_level: FitnessLevel::Low,
        recommended_department: None,
        needs_human_handoff: true,
    }
}

/// Map a reqwest failure onto the transport error taxonomy.
///
/// reqwest does not expose the failure class directly, so the error source
/// chain is inspected for the usual markers.
fn transport_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        return AppError::RequestTimeout;
    }

    let chain = error_chain(&e).to_lowercase();
    if chain.contains("certificate") || chain.contains("tls") || chain.contains("ssl") {
        AppError::InsecureConnectionRejected
    } else if chain.contains("connection refused") {
        AppError::ConnectionRefused
    } else if chain.contains("dns")
        || chain.contains("failed to lookup")
        || chain.contains("name or service not known")
    {
        AppError::HostNotFound
    } else {
        AppError::Transport(e.to_string())
    }
}

fn error_chain(e: &reqwest::Error) -> String {
    let mut parts = vec![e.to_string()];
    let mut source = std::error::Error::source(e);
    while let Some(inner) = source {
        parts.push(inner.to_string());
        source = inner.source();
    }
    parts.join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serial_test::serial;
    use std::sync::Arc;

    fn test_config(base_url: String) -> AiConfig {
        AiConfig {
            base_url,
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
            timeout_secs: 15,
        }
    }

    fn completion_body(content: &str) -> String {
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
        .to_string()
    }

    #[tokio::test]
    async fn empty_api_key_fails_without_a_call() {
        let mut config = test_config("http://127.0.0.1:9".to_string());
        config.api_key = String::new();
        let client = AiClient::new(config);
        let result = client.send_chat(PromptKind::HrChat, "你好", None).await;
        assert!(matches!(result, Err(AppError::MissingApiKey)));
        assert!(!client.is_pending());
    }

    #[tokio::test]
    #[serial]
    async fn successful_cycle_classifies_the_reply() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(completion_body(
                "经过评估您的状态为critical，建议立即前往惩戒部面试",
            ))
            .create_async()
            .await;

        let client = AiClient::new(test_config(server.url()));
        let result = client
            .send_chat(PromptKind::HrChat, "我很有勇气，也很正义，想报名", None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.fitness_level, FitnessLevel::Critical);
        assert_eq!(result.recommended_department.as_deref(), Some("惩戒部"));
        assert!(result.needs_human_handoff);
        assert!(client.is_connected());
        assert!(!client.is_pending());
    }

    #[tokio::test]
    #[serial]
    async fn empty_completion_yields_fallback_and_handoff() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let client = AiClient::new(test_config(server.url()));
        let result = client
            .send_chat(PromptKind::HrChat, "你好", None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.reply, FALLBACK_REPLY);
        assert!(result.needs_human_handoff);
        assert_eq!(result.fitness_level, FitnessLevel::Low);
    }

    #[tokio::test]
    #[serial]
    async fn malformed_body_yields_fallback_and_handoff() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body("this is not json")
            .create_async()
            .await;

        let client = AiClient::new(test_config(server.url()));
        let result = client
            .send_chat(PromptKind::HrChat, "你好", None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.reply, FALLBACK_REPLY);
        assert!(result.needs_human_handoff);
    }

    #[tokio::test]
    #[serial]
    async fn upstream_error_status_is_a_transport_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = AiClient::new(test_config(server.url()));
        let result = client.send_chat(PromptKind::HrChat, "你好", None).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(AppError::Transport(_))));
        assert!(!client.is_connected());
        assert!(!client.is_pending());
    }

    #[tokio::test]
    #[serial]
    async fn second_request_while_pending_is_rejected_without_a_call() {
        let mut server = Server::new_async().await;
        let body = completion_body("一般情况，欢迎继续咨询");
        let mock = server
            .mock("POST", "/chat/completions")
            .with_chunked_body(move |w| {
                std::thread::sleep(Duration::from_millis(500));
                w.write_all(body.as_bytes())
            })
            .expect(1)
            .create_async()
            .await;

        let client = Arc::new(AiClient::new(test_config(server.url())));

        let first = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.send_chat(PromptKind::HrChat, "第一条", None).await })
        };

        // Give the first request time to reach the pending state.
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(client.is_pending());

        let second = client.send_chat(PromptKind::HrChat, "第二条", None).await;
        assert!(matches!(second, Err(AppError::RequestPending)));

        let first = first.await.unwrap().unwrap();
        assert_eq!(first.fitness_level, FitnessLevel::Medium);

        // Exactly one outbound call was made.
        mock.assert_async().await;
        assert!(!client.is_pending());
    }

    #[tokio::test]
    #[serial]
    async fn timed_out_request_returns_to_idle_with_timeout_error() {
        let mut server = Server::new_async().await;
        let body = completion_body("too late");
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_chunked_body(move |w| {
                std::thread::sleep(Duration::from_millis(2500));
                w.write_all(body.as_bytes())
            })
            .create_async()
            .await;

        let mut config = test_config(server.url());
        config.timeout_secs = 1;
        let client = AiClient::new(config);

        let result = client.send_chat(PromptKind::HrChat, "你好", None).await;
        assert!(matches!(result, Err(AppError::RequestTimeout)));
        assert!(!client.is_pending());
        assert!(!client.is_connected());
    }

    #[test]
    fn connection_refused_maps_to_its_own_variant() {
        // Port 1 is reliably closed; drive the mapping through a real error.
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let err = rt
            .block_on(async {
                reqwest::Client::new()
                    .post("http://127.0.0.1:1/chat/completions")
                    .send()
                    .await
            })
            .unwrap_err();
        assert!(matches!(
            transport_error(err),
            AppError::ConnectionRefused | AppError::Transport(_)
        ));
    }
}
