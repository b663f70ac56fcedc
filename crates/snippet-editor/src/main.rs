//! snippet-editor CLI
//!
//! Command-line front end for creating, updating, deleting and rendering
//! snippets through the snippet API.

use std::path::PathBuf;

use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use snippet_editor::{
    load_snippet, DeleteOutcome, EditorConfig, EditorError, Field, HttpTransport,
    RecordingNavigator, Snippet, SnippetData, SnippetForm, SubmitOutcome,
};
use snippet_forms::ValidationErrors;

/// Create, edit and delete code snippets.
#[derive(Parser)]
#[command(name = "snippet-editor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Origin of the snippet API.
    #[arg(short, long, env = "SNIPPET_API_URL", default_value = "http://localhost:3000")]
    base_url: String,

    /// Path prefix of the snippet endpoints.
    #[arg(long, default_value = "/api")]
    api_prefix: String,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// The four snippet fields. Omitted fields are submitted empty.
#[derive(Args)]
struct FieldArgs {
    /// Snippet name.
    #[arg(long, default_value = "")]
    name: String,

    /// Snippet language (JavaScript, HTML or CSS).
    #[arg(long, default_value = "JavaScript")]
    language: String,

    /// What the snippet does.
    #[arg(long, default_value = "")]
    description: String,

    /// The snippet source.
    #[arg(long, default_value = "")]
    code: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new snippet.
    Create {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Replace the content of a stored snippet.
    Update {
        /// Identifier of the snippet.
        #[arg(long)]
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a stored snippet.
    Delete {
        /// Identifier of the snippet.
        #[arg(long)]
        id: String,
    },

    /// Print the HTML form, optionally pre-filled from a snippet JSON file.
    Render {
        /// File holding `{"id": ..., "data": {...}}`.
        #[arg(long)]
        snippet: Option<PathBuf>,
    },
}

type CliForm<'a> = SnippetForm<HttpTransport, &'a RecordingNavigator>;

struct Endpoint {
    base_url: String,
    api_prefix: String,
}

impl Endpoint {
    fn form<'a>(
        &self,
        existing: Option<&Snippet>,
        navigator: &'a RecordingNavigator,
    ) -> CliForm<'a> {
        let config = EditorConfig::new().api_prefix(&self.api_prefix);
        SnippetForm::new(existing, HttpTransport::new(&self.base_url), navigator)
            .with_config(config)
    }
}

fn existing(id: String) -> Snippet {
    Snippet::new(id, SnippetData::default())
}

async fn save(
    endpoint: &Endpoint,
    existing: Option<&Snippet>,
    fields: FieldArgs,
) -> anyhow::Result<()> {
    let navigator = RecordingNavigator::new();
    let mut form = endpoint.form(existing, &navigator);
    form.set(Field::Name, fields.name);
    form.set(Field::Language, fields.language);
    form.set(Field::Description, fields.description);
    form.set(Field::Code, fields.code);

    info!(mode = ?form.mode(), "submitting snippet");
    match form.submit().await {
        SubmitOutcome::Saved => {
            println!("{}", navigator.current().unwrap_or_default());
            Ok(())
        }
        SubmitOutcome::Invalid(errors) => Err(EditorError::Invalid(errors).into()),
        SubmitOutcome::Failed(e) => Err(EditorError::Request(e).into()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let endpoint = Endpoint {
        base_url: cli.base_url,
        api_prefix: cli.api_prefix,
    };

    match cli.command {
        Commands::Create { fields } => save(&endpoint, None, fields).await?,

        Commands::Update { id, fields } => save(&endpoint, Some(&existing(id)), fields).await?,

        Commands::Delete { id } => {
            let navigator = RecordingNavigator::new();
            let snippet = existing(id);
            let form = endpoint.form(Some(&snippet), &navigator);
            match form.delete().await {
                DeleteOutcome::Deleted => {
                    println!("{}", navigator.current().unwrap_or_default());
                }
                DeleteOutcome::Unavailable => bail!("no snippet to delete"),
                DeleteOutcome::Failed(e) => return Err(EditorError::Request(e).into()),
            }
        }

        Commands::Render { snippet } => {
            let navigator = RecordingNavigator::new();
            let existing = snippet.as_deref().map(load_snippet).transpose()?;
            let form = endpoint.form(existing.as_ref(), &navigator);
            println!("{}", form.render(&ValidationErrors::new()));
        }
    }

    Ok(())
}
