use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use haven_api::{DEFAULT_BASE_URL, HttpChatBackend};
use haven_core::persona::PersonaCatalog;
use haven_core::session::{SessionCoordinator, UiEvent};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod config;
mod presenter;

use presenter::TerminalPresenter;

#[derive(Parser)]
#[command(name = "haven")]
#[command(about = "Haven - a supportive multi-persona chat client", long_about = None)]
struct Cli {
    /// Base URL of the chat service
    #[arg(long)]
    server: Option<String>,

    /// Path to an alternate configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let file_config = config::load_config(cli.config.as_deref())?;
    let base_url = cli
        .server
        .or(file_config.server_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    tracing::debug!("Using chat service at {}", base_url);

    let backend = Arc::new(HttpChatBackend::new(&base_url)?);
    // No catalog means no selectable personas; fail once at startup.
    let catalog = PersonaCatalog::load(backend.as_ref())
        .await
        .with_context(|| format!("Failed to load persona catalog from {base_url}"))?;
    tracing::info!("Loaded {} personas from {}", catalog.personas().len(), base_url);

    let presenter = Arc::new(TerminalPresenter::new());
    let coordinator = SessionCoordinator::new(catalog, backend, presenter.clone());

    coordinator.deselect().await?;
    run_repl(&coordinator, &presenter).await
}

async fn run_repl(
    coordinator: &SessionCoordinator,
    presenter: &TerminalPresenter,
) -> Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        let session = coordinator.session().await;
        let prompt = match session.active_persona_id() {
            Some(id) => format!("{id}> "),
            None => "haven> ".to_string(),
        };

        let prefill = presenter.take_prefill().unwrap_or_default();
        let line = match editor.readline_with_initial(&prompt, (prefill.as_str(), "")) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let input = line.trim().to_string();
        if input.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(&input);

        if input == "/quit" {
            break;
        }

        let event = match session.active_persona_id() {
            None => UiEvent::PersonaSelected {
                id: resolve_persona_id(coordinator, &input),
            },
            Some(_) if input == "/back" => UiEvent::BackRequested,
            Some(_) => match example_shortcut(presenter, &input) {
                Some(text) => UiEvent::ExampleChosen { text },
                None => UiEvent::SubmitRequested { text: input },
            },
        };

        if let Err(err) = coordinator.dispatch(event).await {
            eprintln!("{}", err.to_string().red());
        }
    }

    Ok(())
}

/// Accepts either a persona id or its 1-based position in the list view.
fn resolve_persona_id(coordinator: &SessionCoordinator, input: &str) -> String {
    if let Ok(index) = input.parse::<usize>() {
        if let Some(persona) = index
            .checked_sub(1)
            .and_then(|i| coordinator.catalog().personas().get(i))
        {
            return persona.id.clone();
        }
    }
    input.to_string()
}

/// Maps `/1`..`/3` onto the welcome example prompts, when present.
fn example_shortcut(presenter: &TerminalPresenter, input: &str) -> Option<String> {
    let index = input.strip_prefix('/')?.parse::<usize>().ok()?;
    presenter.example(index.checked_sub(1)?)
}
