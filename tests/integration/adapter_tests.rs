//! Wire-shape tests: each adapter's translation and extraction against a
//! stub vendor.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use whichmodel::core::providers::{
    AnthropicAdapter, CohereAdapter, GroqAdapter, MistralAdapter, OpenAiAdapter,
    PerplexityAdapter, TogetherAdapter,
};
use whichmodel::{AdapterError, Message};

use crate::common::fixtures::{
    anthropic_message_body, cohere_chat_body, openai_completion_body, openai_null_content_body,
    sample_conversation,
};
use crate::common::init_tracing;

#[tokio::test]
async fn openai_passes_conversation_through_with_bearer_auth() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "messages": [
                { "role": "system", "content": "You are a helpful assistant." },
                { "role": "user", "content": "What is the capital of France?" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_completion_body("Paris.")))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = OpenAiAdapter::with_api_base(server.uri());
    let output = adapter
        .run("gpt-4o", &sample_conversation(), "test-key")
        .await
        .unwrap();
    assert!(!output.error);
    assert_eq!(output.output, "Paris.");
    assert_eq!(output.speed, 0);
}

#[tokio::test]
async fn openai_omits_max_tokens() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_completion_body("ok")))
        .mount(&server)
        .await;

    let adapter = OpenAiAdapter::with_api_base(server.uri());
    adapter
        .run("gpt-4o", &sample_conversation(), "test-key")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert!(body.get("max_tokens").is_none());
}

#[tokio::test]
async fn together_sets_max_token_ceiling() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({ "max_tokens": 1024 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_completion_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = TogetherAdapter::with_api_base(server.uri());
    let output = adapter
        .run("meta-llama/Llama-3-8b-chat-hf", &sample_conversation(), "test-key")
        .await
        .unwrap();
    assert!(!output.error);
}

#[tokio::test]
async fn perplexity_collapses_to_a_single_user_turn() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [
                {
                    "role": "user",
                    "content": "You are a helpful assistant.\nWhat is the capital of France?"
                }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_completion_body("Paris.")))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = PerplexityAdapter::with_api_base(server.uri());
    let output = adapter
        .run("llama-3-sonar-small-32k-online", &sample_conversation(), "test-key")
        .await
        .unwrap();
    assert_eq!(output.output, "Paris.");
}

#[tokio::test]
async fn anthropic_lifts_system_and_remaps_later_system_turns() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": "claude-3-opus-20240229",
            "max_tokens": 1024,
            "system": "S",
            "messages": [
                { "role": "user", "content": "U1" },
                { "role": "assistant", "content": "X" },
                { "role": "assistant", "content": "A1" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(anthropic_message_body("hello")))
        .expect(1)
        .mount(&server)
        .await;

    let conversation = vec![
        Message::system("S"),
        Message::user("U1"),
        Message::system("X"),
        Message::assistant("A1"),
    ];
    let adapter = AnthropicAdapter::with_api_base(server.uri());
    let output = adapter
        .run("claude-3-opus-20240229", &conversation, "test-key")
        .await
        .unwrap();
    assert!(!output.error);
    assert_eq!(output.output, "hello");
}

#[tokio::test]
async fn cohere_splits_last_message_from_history() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_partial_json(json!({
            "model": "command-r-plus",
            "message": "What is the capital of France?",
            "chat_history": [
                { "role": "SYSTEM", "message": "You are a helpful assistant." }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(cohere_chat_body("Paris.")))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = CohereAdapter::with_api_base(server.uri());
    let output = adapter
        .run("command-r-plus", &sample_conversation(), "test-key")
        .await
        .unwrap();
    assert_eq!(output.output, "Paris.");
}

#[tokio::test]
async fn null_content_is_soft_failure_on_every_openai_shaped_adapter() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_null_content_body()))
        .mount(&server)
        .await;

    let conversation = sample_conversation();

    let groq = GroqAdapter::with_api_base(server.uri());
    let output = groq
        .run("llama3-70b-8192", &conversation, "test-key")
        .await
        .unwrap();
    assert!(output.error);
    assert!(output.output.contains("Groq"));

    let mistral = MistralAdapter::with_api_base(server.uri());
    let output = mistral
        .run("open-mistral-7b", &conversation, "test-key")
        .await
        .unwrap();
    assert!(output.error);
    assert!(output.output.contains("Mistral"));
}

#[tokio::test]
async fn vendor_http_error_raises_with_body_text() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let adapter = GroqAdapter::with_api_base(server.uri());
    let err = adapter
        .run("llama3-70b-8192", &sample_conversation(), "test-key")
        .await
        .unwrap_err();
    match err {
        AdapterError::Api {
            provider,
            status,
            message,
        } => {
            assert_eq!(provider, "Groq");
            assert_eq!(status, 429);
            assert_eq!(message, "slow down");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_body_raises_malformed_response() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let adapter = OpenAiAdapter::with_api_base(server.uri());
    let err = adapter
        .run("gpt-4o", &sample_conversation(), "test-key")
        .await
        .unwrap_err();
    assert!(matches!(err, AdapterError::MalformedResponse { .. }));
}
