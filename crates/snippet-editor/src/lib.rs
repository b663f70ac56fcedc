//! # snippet-editor
//!
//! A form for creating, editing and deleting code snippets stored behind a
//! REST API.
//!
//! The form holds four fields (name, language, description, code), refuses
//! to submit while any of them is empty, sends one JSON request per action
//! and navigates to the listing page once the request has completed:
//!
//! | Action | Request                     | Body                                      |
//! |--------|-----------------------------|-------------------------------------------|
//! | Create | `POST /api/createSnippet`   | `{code, language, description, name}`     |
//! | Update | `PUT /api/updateSnippet`    | `{code, language, description, name, id}` |
//! | Delete | `DELETE /api/deleteSnippet` | `{id}`                                    |
//!
//! A request that fails to reach the backend is logged and reported in the
//! returned outcome; the form does not navigate. Response statuses are not
//! inspected.
//!
//! ## Quick Start
//!
//! ```ignore
//! use snippet_editor::{Field, HttpTransport, RecordingNavigator, SnippetForm, SubmitOutcome};
//!
//! let navigator = RecordingNavigator::new();
//! let mut form = SnippetForm::new(None, HttpTransport::new("http://localhost:3000"), &navigator);
//! form.set(Field::Name, "Hello");
//! form.set(Field::Description, "Logs a greeting");
//! form.set(Field::Code, "console.log('hello')");
//!
//! match form.submit().await {
//!     SubmitOutcome::Saved => assert_eq!(navigator.current().as_deref(), Some("/")),
//!     SubmitOutcome::Invalid(errors) => println!("{}", form.render(&errors)),
//!     SubmitOutcome::Failed(_) => {}
//! }
//! ```

mod config;
mod dispatch;
mod error;
mod http;
mod model;
mod navigation;
mod render;
mod state;
mod transport;
mod validation;

pub use config::{EditorConfig, Operation};
pub use dispatch::{DeleteOutcome, FormMode, SnippetForm, SubmitOutcome};
pub use error::{EditorError, RequestError, Result};
pub use http::{ApiRequest, ApiResponse, Method};
pub use model::{
    load_snippet, DeletePayload, Language, Snippet, SnippetData, SnippetId, SnippetPayload,
    UnknownLanguage, UpdatePayload,
};
pub use navigation::{Navigator, RecordingNavigator};
pub use render::render_snippet_form;
pub use state::{Field, SnippetFormState};
pub use transport::{BoxFuture, HttpTransport, Transport};
pub use validation::{snippet_fields, validate};
