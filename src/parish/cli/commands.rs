//! # CLI Layer
//!
//! This module is **one possible UI client** for parish; it is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//! - Installs the tracing subscriber
//!
//! ## Structure
//!
//! - `run()`: parses arguments, loads config, picks the data source
//! - `dispatch()`: generic over the source, routes to a handler
//! - `handle_*()`: per-command handlers that call the API and print results

use super::prompt::{TerminalGate, TerminalNavigator};
use super::render::{print_messages, render_config, render_summary, render_table, Tabular};
use super::setup::{Cli, Commands, EventAction, RecordAction};
use clap::Parser;
use parish::api::{Catalog, Controls, ParishApi};
use parish::commands::config::ConfigAction;
use parish::commands::CmdResult;
use parish::config::{config_dir, ParishConfig};
use parish::confirm::{AlwaysConfirm, ConfirmationGate};
use parish::error::Result;
use parish::failure::ErrorReporter;
use parish::filter::{EventSelectors, FilterState, Filterable};
use parish::model::{Event, Member, PastoralGroup, Post, Toggle, User};
use parish::source::seed::{SeedFile, SeedSource};
use parish::source::DataSource;
use std::sync::Arc;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dir = config_dir()?;
    let config = ParishConfig::load(&dir)?;
    debug!("Using config from {}", dir.display());
    let reporter = ErrorReporter::new(Arc::new(TerminalNavigator));

    let gate: Box<dyn ConfirmationGate> = if cli.yes {
        Box::new(AlwaysConfirm)
    } else {
        Box::new(TerminalGate)
    };

    match cli.data {
        Some(path) => {
            debug!("Loading records from {}", path.display());
            let api = ParishApi::new(SeedFile::new(path), &config, reporter, dir);
            dispatch(api, cli.command, gate.as_ref(), cli.verbose).await
        }
        None => {
            let source = SeedSource::demo().with_latency(config.latency());
            let api = ParishApi::new(source, &config, reporter, dir);
            dispatch(api, cli.command, gate.as_ref(), cli.verbose).await
        }
    }
}

fn init_tracing(verbose: bool) {
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn dispatch<S: Catalog>(
    mut api: ParishApi<S>,
    command: Option<Commands>,
    gate: &dyn ConfirmationGate,
    verbose: bool,
) -> Result<()> {
    if verbose {
        api.observe(|kind, event| debug!("{}: {:?}", kind, event));
    }

    match command {
        Some(Commands::Users { filter, action }) => {
            handle_records::<User, S>(&mut api, filter.into(), action, gate).await
        }
        Some(Commands::Posts { filter, action }) => {
            handle_records::<Post, S>(&mut api, filter.into(), action, gate).await
        }
        Some(Commands::Groups { filter, action }) => {
            handle_records::<PastoralGroup, S>(&mut api, filter.into(), action, gate).await
        }
        Some(Commands::Members { filter, action }) => {
            handle_records::<Member, S>(&mut api, filter.into(), action, gate).await
        }
        Some(Commands::Events { filter, action }) => {
            handle_events(&mut api, filter.into(), action, gate).await
        }
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
        Some(Commands::Summary) | None => handle_summary(&mut api).await,
    }
}

async fn handle_records<R, S>(
    api: &mut ParishApi<S>,
    filter: FilterState<R::Selectors>,
    action: Option<RecordAction>,
    gate: &dyn ConfirmationGate,
) -> Result<()>
where
    R: Filterable + Toggle + Tabular,
    S: Catalog + DataSource<R>,
    ParishApi<S>: Controls<R, S>,
{
    let result = match action.unwrap_or(RecordAction::List) {
        RecordAction::List => api.list::<R>(filter).await?,
        RecordAction::Delete { id } => api.delete::<R, _>(filter, id, gate).await?,
        RecordAction::Toggle { id } => api.toggle::<R>(filter, id).await?,
    };
    print_result(&result);
    Ok(())
}

async fn handle_events<S: Catalog>(
    api: &mut ParishApi<S>,
    filter: FilterState<EventSelectors>,
    action: Option<EventAction>,
    gate: &dyn ConfirmationGate,
) -> Result<()> {
    let result = match action.unwrap_or(EventAction::List) {
        EventAction::List => api.list::<Event>(filter).await?,
        EventAction::Delete { id } => api.delete::<Event, _>(filter, id, gate).await?,
        EventAction::Subscribe { id, participant } => {
            api.subscribe(filter, id, participant).await?
        }
        EventAction::Unsubscribe { id, participant } => {
            api.unsubscribe(filter, id, participant).await?
        }
    };
    print_result(&result);
    Ok(())
}

async fn handle_summary<S: Catalog>(api: &mut ParishApi<S>) -> Result<()> {
    let counts = api.summary().await?;
    print!("{}", render_summary(&counts));
    Ok(())
}

fn handle_config<S: Catalog>(
    api: &ParishApi<S>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_result<R: Tabular>(result: &CmdResult<R>) {
    print!("{}", render_table(&result.listed));
    print_messages(&result.messages);
}
