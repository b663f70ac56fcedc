//! Delete flow of the snippet form.

mod common;

use std::sync::Arc;

use common::{navigator, stored_snippet, FailingTransport, RecordingTransport};
use snippet_editor::Method;
use snippet_editor::{DeleteOutcome, EditorConfig, Field, SnippetForm};

#[tokio::test]
async fn test_delete_sends_id_only() {
    let transport = RecordingTransport::new();
    let nav = navigator();
    let snippet = stored_snippet();
    let form = SnippetForm::new(Some(&snippet), Arc::clone(&transport), Arc::clone(&nav));
    assert!(form.can_delete());

    assert!(matches!(form.delete().await, DeleteOutcome::Deleted));

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Delete);
    assert_eq!(requests[0].path, "/api/deleteSnippet");
    assert_eq!(requests[0].get_header("content-type"), Some("application/json"));
    assert_eq!(
        requests[0].json_body::<serde_json::Value>().unwrap(),
        serde_json::json!({"id": "42"})
    );
    assert_eq!(nav.visited(), vec!["/".to_string()]);
}

#[tokio::test]
async fn test_delete_ignores_field_validation() {
    let transport = RecordingTransport::new();
    let nav = navigator();
    let snippet = stored_snippet();
    let mut form = SnippetForm::new(Some(&snippet), Arc::clone(&transport), Arc::clone(&nav));
    for field in Field::ALL {
        form.set(field, "");
    }

    assert!(matches!(form.delete().await, DeleteOutcome::Deleted));
    assert_eq!(transport.requests().len(), 1);
    assert_eq!(nav.current(), Some("/".to_string()));
}

#[tokio::test]
async fn test_delete_unavailable_for_new_snippet() {
    let transport = RecordingTransport::new();
    let nav = navigator();
    let form = SnippetForm::new(None, Arc::clone(&transport), Arc::clone(&nav));
    assert!(!form.can_delete());

    assert!(matches!(form.delete().await, DeleteOutcome::Unavailable));
    assert!(transport.requests().is_empty());
    assert!(nav.visited().is_empty());
}

#[tokio::test]
async fn test_delete_failure_does_not_navigate() {
    let transport = FailingTransport::new();
    let nav = navigator();
    let snippet = stored_snippet();
    let form = SnippetForm::new(Some(&snippet), Arc::clone(&transport), Arc::clone(&nav));

    assert!(matches!(form.delete().await, DeleteOutcome::Failed(_)));
    assert_eq!(transport.attempts(), 1);
    assert!(nav.visited().is_empty());
}

#[tokio::test]
async fn test_delete_failure_is_hidden_by_default() {
    let snippet = stored_snippet();
    let form = SnippetForm::new(Some(&snippet), FailingTransport::new(), navigator());

    let outcome = form.delete().await;
    assert!(form.errors_for_delete(&outcome).is_empty());
}

#[tokio::test]
async fn test_surfaced_delete_failure_renders_alert() {
    let transport = FailingTransport::new();
    let nav = navigator();
    let snippet = stored_snippet();
    let form = SnippetForm::new(Some(&snippet), Arc::clone(&transport), Arc::clone(&nav))
        .with_config(EditorConfig::new().surface_request_errors(true));

    let outcome = form.delete().await;
    assert!(matches!(outcome, DeleteOutcome::Failed(_)));
    let errors = form.errors_for_delete(&outcome);
    assert_eq!(errors.len(), 1);
    let html = form.render(&errors);
    assert!(html.contains("alert alert-danger"));
    assert!(html.contains("Could not delete the snippet"));
    assert!(nav.visited().is_empty());
}

#[tokio::test]
async fn test_successful_delete_has_nothing_to_render() {
    let snippet = stored_snippet();
    let form = SnippetForm::new(Some(&snippet), RecordingTransport::new(), navigator())
        .with_config(EditorConfig::new().surface_request_errors(true));

    let outcome = form.delete().await;
    assert!(matches!(outcome, DeleteOutcome::Deleted));
    assert!(form.errors_for_delete(&outcome).is_empty());
}
