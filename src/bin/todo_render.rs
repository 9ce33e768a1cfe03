//! Renders the first page of a freshly seeded task collection.
//!
//! Usage:
//!
//! ```text
//! todo_render <format> [config-path]
//! ```
//!
//! The `format` must be `siren`, `hal` or `json`. The optional JSON document
//! at `config-path` deserialises into an [`ApiConfig`]; without it the
//! defaults apply. Set `RUST_LOG` to control log output on stderr.

use camino::Utf8PathBuf;
use hypertodo::api::{CollectionQuery, InMemoryTodoResource, ResourceInitError};
use hypertodo::config::{ApiConfig, ConfigError};
use hypertodo::hypermedia::negotiation::FormatRequest;
use std::env;
use std::io::{self, Write};
use thiserror::Error;
use tokio::runtime::Builder;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum RenderCliError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Init(#[from] ResourceInitError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
    #[error("request failed with status {0}")]
    Status(u16),
}

#[derive(Debug)]
struct Args {
    format: String,
    config_path: Option<Utf8PathBuf>,
}

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    run(env::args().skip(1)).map_err(Into::into)
}

fn run(args: impl Iterator<Item = String>) -> Result<(), RenderCliError> {
    let parsed = parse_args(args)?;
    let config = match parsed.config_path.as_deref() {
        Some(path) => ApiConfig::from_path(path)?,
        None => ApiConfig::default(),
    };
    let resource = InMemoryTodoResource::from_config(&config)?;
    let request = FormatRequest::new().with_format_override(parsed.format);

    let runtime = build_runtime()?;
    let reply = runtime.block_on(resource.get_collection(CollectionQuery::new(), &request));

    let mut stdout = io::stdout().lock();
    stdout.write_all(reply.body()).map_err(RenderCliError::Output)?;
    writeln!(stdout).map_err(RenderCliError::Output)?;

    if reply.status() == 200 {
        Ok(())
    } else {
        Err(RenderCliError::Status(reply.status()))
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, RenderCliError> {
    let format = args
        .next()
        .ok_or_else(|| RenderCliError::InvalidArgs("missing format argument".into()))?;
    if !matches!(format.as_str(), "siren" | "hal" | "json") {
        return Err(RenderCliError::InvalidArgs(format!(
            "unknown format '{format}'; expected siren, hal, or json"
        )));
    }
    let config_path = args.next().map(Utf8PathBuf::from);
    if let Some(extra) = args.next() {
        return Err(RenderCliError::InvalidArgs(format!(
            "unexpected extra argument: {extra}"
        )));
    }
    Ok(Args {
        format,
        config_path,
    })
}

fn build_runtime() -> Result<tokio::runtime::Runtime, RenderCliError> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(RenderCliError::RuntimeInit)
}
