mod helpers;

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::json;

use medroute::application::services::{
    DispatchError, GENERIC_REPLIES, Outcome, RequestDispatcher,
};
use medroute::domain::{AudioBuffer, ChatMessage, DiagnosticDomain, Label};

use helpers::{
    FailingClassifier, FixedClassifier, StubLlmClient, StubReply, StubTranscriptionEngine,
    create_dispatcher, repo_classifiers, uniform_classifiers,
};

fn audio() -> AudioBuffer {
    AudioBuffer::linear16(vec![0, 0, 1, 0], 44_100, 1)
}

#[test]
fn given_valid_payload_when_diagnosing_then_returns_tagged_result() {
    let dispatcher = create_dispatcher(
        uniform_classifiers(Arc::new(FixedClassifier(1))),
        Arc::new(StubTranscriptionEngine::returning("")),
        Arc::new(StubLlmClient::replying("")),
    );

    let result = dispatcher
        .diagnose(DiagnosticDomain::Liver, &json!({"age": 40, "sgpt": 35, "sgot": 40}))
        .unwrap();

    assert_eq!(result.domain, DiagnosticDomain::Liver);
    assert_eq!(result.label, Label::Positive);
    assert_eq!(result.disease, "liver");
}

#[test]
fn given_missing_field_when_diagnosing_then_outcome_is_client_fault() {
    let dispatcher = create_dispatcher(
        repo_classifiers(),
        Arc::new(StubTranscriptionEngine::returning("")),
        Arc::new(StubLlmClient::replying("")),
    );

    let error = dispatcher
        .diagnose(DiagnosticDomain::Diabetes, &json!({"age": 40}))
        .unwrap_err();

    assert!(matches!(error, DispatchError::Validation(_)));
    assert_eq!(error.outcome(), Outcome::ClientFault);
}

#[test]
fn given_failing_model_when_diagnosing_then_outcome_is_server_fault() {
    let dispatcher = create_dispatcher(
        uniform_classifiers(Arc::new(FailingClassifier)),
        Arc::new(StubTranscriptionEngine::returning("")),
        Arc::new(StubLlmClient::replying("")),
    );

    let error = dispatcher
        .diagnose(DiagnosticDomain::Kidney, &json!({"age": 60, "bp": 90, "sugar": 2}))
        .unwrap_err();

    assert!(matches!(error, DispatchError::Classification(_)));
    assert_eq!(error.outcome(), Outcome::ServerFault);
}

#[tokio::test]
async fn given_transcript_when_advising_then_forwards_it_to_completion_client() {
    let llm = Arc::new(StubLlmClient::replying("Rest and hydrate."));
    let dispatcher = create_dispatcher(
        repo_classifiers(),
        Arc::new(StubTranscriptionEngine::returning("sore throat")),
        llm.clone(),
    );

    let advice = dispatcher.advise_from_speech(&audio()).await.unwrap();

    assert_eq!(advice.recognized_text.as_str(), "sore throat");
    assert_eq!(advice.suggested_medicines, "Rest and hydrate.");
    assert_eq!(llm.prompts(), vec!["sore throat".to_string()]);
}

#[tokio::test]
async fn given_empty_transcript_when_advising_then_still_calls_completion_client() {
    let llm = Arc::new(StubLlmClient::replying("Please describe your symptoms."));
    let dispatcher = create_dispatcher(
        repo_classifiers(),
        Arc::new(StubTranscriptionEngine::returning("")),
        llm.clone(),
    );

    let advice = dispatcher.advise_from_speech(&audio()).await.unwrap();

    assert!(advice.recognized_text.is_empty());
    assert_eq!(llm.prompts(), vec![String::new()]);
}

#[tokio::test]
async fn given_transcription_failure_when_advising_then_skips_completion() {
    let llm = Arc::new(StubLlmClient::replying("unused"));
    let dispatcher = create_dispatcher(
        repo_classifiers(),
        Arc::new(StubTranscriptionEngine::unreachable()),
        llm.clone(),
    );

    let error = dispatcher.advise_from_speech(&audio()).await.unwrap_err();

    assert!(matches!(error, DispatchError::Transcription(_)));
    assert_eq!(error.outcome(), Outcome::ServerFault);
    assert!(llm.prompts().is_empty());
}

#[tokio::test]
async fn given_malformed_completion_when_advising_then_outcome_is_server_fault() {
    let dispatcher = create_dispatcher(
        repo_classifiers(),
        Arc::new(StubTranscriptionEngine::returning("fever")),
        Arc::new(StubLlmClient::new(StubReply::Malformed)),
    );

    let error = dispatcher.advise_from_speech(&audio()).await.unwrap_err();

    assert!(matches!(error, DispatchError::Completion(_)));
    assert_eq!(error.outcome(), Outcome::ServerFault);
}

fn seeded_chat_dispatcher() -> RequestDispatcher {
    create_dispatcher(
        repo_classifiers(),
        Arc::new(StubTranscriptionEngine::returning("")),
        Arc::new(StubLlmClient::replying("")),
    )
}

fn unmatched_replies(dispatcher: &RequestDispatcher, count: usize) -> Vec<String> {
    let message = ChatMessage::new("hello");
    (0..count).map(|_| dispatcher.chat(&message)).collect()
}

#[test]
fn given_same_seed_when_chatting_without_topic_then_reply_sequence_is_reproducible() {
    let first = unmatched_replies(&seeded_chat_dispatcher(), 20);
    let second = unmatched_replies(&seeded_chat_dispatcher(), 20);

    assert_eq!(first, second);
    assert!(first.iter().all(|r| GENERIC_REPLIES.contains(&r.as_str())));
}

#[test]
fn given_seeded_dispatcher_when_chatting_repeatedly_then_generator_advances() {
    let replies = unmatched_replies(&seeded_chat_dispatcher(), 50);

    let distinct: HashSet<&str> = replies.iter().map(String::as_str).collect();
    assert!(distinct.len() > 1);
}
