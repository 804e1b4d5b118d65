//! Fan-out: independent completions, skips, and per-selection fatal errors.

use std::collections::HashMap;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use whichmodel::core::providers::{GroqAdapter, MistralAdapter, OpenAiAdapter};
use whichmodel::{
    Adapter, Dispatcher, ModelOutput, OutputStore, Selection, SelectionHandle, SelectionOutcome,
    run_selections,
};

use crate::common::fixtures::{
    openai_completion_body, openai_null_content_body, sample_conversation,
};
use crate::common::init_tracing;

fn credentials(providers: &[&str]) -> HashMap<String, String> {
    providers
        .iter()
        .map(|p| (p.to_string(), format!("{p}-key")))
        .collect()
}

/// One succeeding vendor, one answering with null content, one erroring:
/// all three selections complete independently.
#[tokio::test]
async fn mixed_outcomes_complete_independently() {
    init_tracing();

    let ok_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_completion_body("Paris.")))
        .mount(&ok_server)
        .await;

    let null_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_null_content_body()))
        .mount(&null_server)
        .await;

    let err_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&err_server)
        .await;

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(
        "OpenAI",
        Adapter::OpenAi(OpenAiAdapter::with_api_base(ok_server.uri())),
    );
    dispatcher.register(
        "Groq",
        Adapter::Groq(GroqAdapter::with_api_base(null_server.uri())),
    );
    dispatcher.register(
        "Mistral",
        Adapter::Mistral(MistralAdapter::with_api_base(err_server.uri())),
    );

    let ok = SelectionHandle::new("ok");
    let null = SelectionHandle::new("null");
    let err = SelectionHandle::new("err");
    let selections = vec![
        Selection::new(ok.clone(), "OpenAI", "gpt-4o"),
        Selection::new(null.clone(), "Groq", "llama3-70b-8192"),
        Selection::new(err.clone(), "Mistral", "open-mistral-7b"),
    ];
    let store = OutputStore::new();
    for handle in [&ok, &null, &err] {
        store.reset(handle.clone());
    }

    let conversation = sample_conversation();
    let outcomes = run_selections(
        &dispatcher,
        selections,
        &conversation,
        &credentials(&["OpenAI", "Groq", "Mistral"]),
        &store,
    )
    .await;

    assert_eq!(outcomes.len(), 3);
    assert!(
        outcomes
            .iter()
            .all(|(_, outcome)| matches!(outcome, SelectionOutcome::Completed))
    );

    match store.get(&ok).unwrap() {
        ModelOutput::Ready(result) => {
            assert!(!result.error);
            assert_eq!(result.output, "Paris.");
            assert!(result.cost > 0.0);
        }
        other => panic!("expected ready entry, got {other:?}"),
    }
    for handle in [&null, &err] {
        match store.get(handle).unwrap() {
            ModelOutput::Ready(result) => {
                assert!(result.error);
                assert_eq!(result.cost, 0.0);
                assert_eq!(result.speed, 0);
            }
            other => panic!("expected ready entry, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn missing_credential_skips_and_leaves_entry_pending() {
    init_tracing();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_completion_body("ok")))
        .mount(&server)
        .await;

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(
        "OpenAI",
        Adapter::OpenAi(OpenAiAdapter::with_api_base(server.uri())),
    );

    let keyed = SelectionHandle::new("keyed");
    let keyless = SelectionHandle::new("keyless");
    let selections = vec![
        Selection::new(keyed.clone(), "OpenAI", "gpt-4o"),
        Selection::new(keyless.clone(), "Anthropic", "claude-3-haiku-20240307"),
    ];
    let store = OutputStore::new();
    store.reset(keyed.clone());
    store.reset(keyless.clone());

    let conversation = sample_conversation();
    let outcomes = run_selections(
        &dispatcher,
        selections,
        &conversation,
        &credentials(&["OpenAI"]),
        &store,
    )
    .await;

    let outcome_for = |handle: &SelectionHandle| {
        outcomes
            .iter()
            .find(|(h, _)| h == handle)
            .map(|(_, o)| o)
            .unwrap()
    };
    assert!(matches!(outcome_for(&keyed), SelectionOutcome::Completed));
    assert!(matches!(outcome_for(&keyless), SelectionOutcome::Skipped));
    assert!(store.get(&keyless).unwrap().is_pending());
    assert!(!store.get(&keyed).unwrap().is_pending());
}

#[tokio::test]
async fn fatal_configuration_error_affects_only_its_own_selection() {
    init_tracing();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_completion_body("ok")))
        .mount(&server)
        .await;

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(
        "OpenAI",
        Adapter::OpenAi(OpenAiAdapter::with_api_base(server.uri())),
    );

    let good = SelectionHandle::new("good");
    let bad = SelectionHandle::new("bad");
    let selections = vec![
        Selection::new(good.clone(), "OpenAI", "gpt-4o"),
        // model id absent from the catalog: fatal for this selection only
        Selection::new(bad.clone(), "OpenAI", "gpt-99"),
    ];
    let store = OutputStore::new();
    store.reset(good.clone());
    store.reset(bad.clone());

    let conversation = sample_conversation();
    let outcomes = run_selections(
        &dispatcher,
        selections,
        &conversation,
        &credentials(&["OpenAI"]),
        &store,
    )
    .await;

    let outcome_for = |handle: &SelectionHandle| {
        outcomes
            .iter()
            .find(|(h, _)| h == handle)
            .map(|(_, o)| o)
            .unwrap()
    };
    assert!(matches!(outcome_for(&good), SelectionOutcome::Completed));
    assert!(matches!(outcome_for(&bad), SelectionOutcome::Fatal(_)));
    assert!(store.get(&bad).unwrap().is_pending());
    assert!(!store.get(&good).unwrap().is_pending());
}

/// The same model selected twice under different handles gets two
/// independently attributed completions.
#[tokio::test]
async fn duplicate_model_selections_are_attributed_by_handle() {
    init_tracing();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_completion_body("same")))
        .mount(&server)
        .await;

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(
        "OpenAI",
        Adapter::OpenAi(OpenAiAdapter::with_api_base(server.uri())),
    );

    let first = SelectionHandle::random();
    let second = SelectionHandle::random();
    let selections = vec![
        Selection::new(first.clone(), "OpenAI", "gpt-4o"),
        Selection::new(second.clone(), "OpenAI", "gpt-4o"),
    ];
    let store = OutputStore::new();

    let conversation = sample_conversation();
    run_selections(
        &dispatcher,
        selections,
        &conversation,
        &credentials(&["OpenAI"]),
        &store,
    )
    .await;

    assert_eq!(store.len(), 2);
    for handle in [&first, &second] {
        match store.get(handle).unwrap() {
            ModelOutput::Ready(result) => assert_eq!(result.output, "same"),
            other => panic!("expected ready entry, got {other:?}"),
        }
    }
}
