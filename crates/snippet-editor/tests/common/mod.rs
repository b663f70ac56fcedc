//! Shared test doubles for the snippet form.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use snippet_editor::{ApiRequest, ApiResponse, BoxFuture, Transport};
use snippet_editor::{Language, RecordingNavigator, RequestError, Snippet, SnippetData};

/// Transport that records every request and answers with a fixed status.
#[derive(Debug)]
pub struct RecordingTransport {
    status: u16,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Self::with_status(200)
    }

    pub fn with_status(status: u16) -> Arc<Self> {
        Arc::new(Self {
            status,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    fn send<'a>(&'a self, request: ApiRequest) -> BoxFuture<'a, Result<ApiResponse, RequestError>> {
        Box::pin(async move {
            self.requests.lock().unwrap().push(request);
            Ok(ApiResponse::new(self.status))
        })
    }
}

/// Transport whose requests never reach the backend.
#[derive(Debug, Default)]
pub struct FailingTransport {
    attempts: Mutex<usize>,
}

impl FailingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

impl Transport for FailingTransport {
    fn send<'a>(&'a self, _request: ApiRequest) -> BoxFuture<'a, Result<ApiResponse, RequestError>> {
        Box::pin(async move {
            *self.attempts.lock().unwrap() += 1;
            Err(RequestError::Transport("connection refused".to_string()))
        })
    }
}

pub fn navigator() -> Arc<RecordingNavigator> {
    Arc::new(RecordingNavigator::new())
}

/// The stored snippet `{id: "42", data: {name: "Hi", language: "HTML", ...}}`.
pub fn stored_snippet() -> Snippet {
    Snippet::new(
        "42",
        SnippetData {
            name: "Hi".to_string(),
            language: Language::Html,
            description: "d".to_string(),
            code: "<p>x</p>".to_string(),
        },
    )
}
