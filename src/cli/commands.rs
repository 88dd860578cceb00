//! CLI command implementations
//!
//! `serve` runs the HTTP adapter. The remaining commands each perform one
//! store operation and print a single JSON response line.

use std::io::{self, Write};

use serde_json::Value;

use crate::http_server::HttpServer;
use crate::observability::{init_logging, log_event, Event};
use crate::store::{Payload, ProductStore, RecordId};

use super::args::{Cli, Command};
use super::config::{Config, Overrides};
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let port = match cli.command {
        Command::Serve { port } => port,
        _ => None,
    };
    let overrides = Overrides {
        data_file: cli.data_file,
        log_format: cli.log_format,
        port,
    };
    let config = Config::load_or_default(cli.config.as_deref())?.apply(overrides)?;

    init_logging(config.log_format);
    let data_file = config.data_file.display().to_string();
    log_event(Event::ConfigLoaded, &[("data_file", data_file.as_str())]);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Io(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(run_command(cli.command, config, &mut io::stdout()))
}

/// Run the appropriate command based on CLI args
pub async fn run_command<W: Write>(cmd: Command, config: Config, out: &mut W) -> CliResult<()> {
    let store = ProductStore::new(&config.data_file);

    let result = match cmd {
        Command::Serve { .. } => return serve(config, store).await,
        Command::List { limit } => list(&store, limit, out).await,
        Command::Get { id } => get(&store, id, out).await,
        Command::Add { payload } => add(&store, &payload, out).await,
        Command::Update { id, payload } => update(&store, id, &payload, out).await,
        Command::Delete { id } => delete(&store, id, out).await,
    };

    if let Err(ref e) = result {
        write_error(out, e.code(), &e.to_string())?;
    }
    result
}

/// Serve the product API until interrupted
pub async fn serve(config: Config, store: ProductStore) -> CliResult<()> {
    let server = HttpServer::with_config(config.http, store);
    server.start().await.map_err(|e| {
        let message = e.to_string();
        log_event(Event::ServerFailed, &[("error", message.as_str())]);
        CliError::ServeFailed(message)
    })
}

/// Print all products, or the first `limit` when it is non-zero
pub async fn list<W: Write>(
    store: &ProductStore,
    limit: Option<usize>,
    out: &mut W,
) -> CliResult<()> {
    let mut products = store.list().await?;
    if let Some(limit) = limit.filter(|n| *n > 0) {
        products.truncate(limit);
    }
    write_response(out, serde_json::to_value(products)?)
}

/// Print one product
pub async fn get<W: Write>(store: &ProductStore, id: RecordId, out: &mut W) -> CliResult<()> {
    let product = store.get_by_id(id).await?.ok_or(CliError::NotFound(id))?;
    write_response(out, product.into())
}

/// Add a product and print it with its assigned id
pub async fn add<W: Write>(store: &ProductStore, payload: &str, out: &mut W) -> CliResult<()> {
    let payload = parse_payload(payload)?;
    let product = store.create(payload).await?;
    write_response(out, product.into())
}

/// Update a product and print the result
pub async fn update<W: Write>(
    store: &ProductStore,
    id: RecordId,
    payload: &str,
    out: &mut W,
) -> CliResult<()> {
    let patch = parse_payload(payload)?;
    let product = store.update(id, patch).await?.ok_or(CliError::NotFound(id))?;
    write_response(out, product.into())
}

/// Delete a product and print what was removed
pub async fn delete<W: Write>(store: &ProductStore, id: RecordId, out: &mut W) -> CliResult<()> {
    let product = store.delete(id).await?.ok_or(CliError::NotFound(id))?;
    write_response(out, product.into())
}

fn parse_payload(raw: &str) -> CliResult<Payload> {
    match serde_json::from_str(raw) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(CliError::InvalidInput("Payload must be a JSON object".to_string())),
        Err(e) => Err(CliError::InvalidInput(format!("Invalid payload JSON: {}", e))),
    }
}
