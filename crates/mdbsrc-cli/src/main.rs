//! mdbsrc - movie and series catalog lookup CLI.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;
use url::Url;

use crate::config::{AppConfig, resolve_config_path};
use mdbsrc_api::justwatch::JustWatchClient;
use mdbsrc_api::{JUSTWATCH_INFO, JustWatchSource, Locale, MediaRecord, MediaSource};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Search JustWatch by title.
    Search(SearchArgs),
    /// Look up a single title by id (e.g. "tm12345", "ts999").
    Get(GetArgs),
    /// Show source information.
    Info,
    /// Show or edit the configuration.
    Config(ConfigCommand),
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Title to search for.
    #[arg(long)]
    query: String,

    /// Catalog locale (e.g. "en_AU", "de-DE"). Falls back to config if omitted.
    #[arg(long)]
    locale: Option<Locale>,

    /// Print records as JSON.
    #[arg(long)]
    json: bool,
}

/// Arguments for the `get` subcommand.
#[derive(clap::Args)]
struct GetArgs {
    /// Source id: `tm` (movie) or `ts` (series) followed by digits.
    #[arg(long)]
    id: String,

    /// Catalog locale. Falls back to config if omitted.
    #[arg(long)]
    locale: Option<Locale>,

    /// Print the record as JSON.
    #[arg(long)]
    json: bool,
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Print the effective configuration.
    Show,
    /// Validate and save the default catalog locale.
    SetLocale {
        /// Locale tag such as "en_US".
        locale: Locale,
    },
}

/// Builds a `JustWatchSource` from config and an optional locale override.
///
/// # Errors
///
/// Returns an error if the configured base URL is invalid or the client
/// fails to build.
#[instrument(skip_all)]
fn build_source(config: &AppConfig, locale: Option<&Locale>) -> Result<JustWatchSource> {
    let mut builder = JustWatchClient::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    if let Some(raw) = config.justwatch.base_url.as_deref() {
        let url = Url::parse(raw).with_context(|| format!("invalid base_url: {raw}"))?;
        builder = builder.base_url(url);
    }

    let client = builder.build().context("failed to build JustWatch client")?;
    Ok(JustWatchSource::new(client, config.effective_locale(locale)))
}

/// Loads the config at the resolved path.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved or the file is invalid.
fn load_config(dir: Option<&PathBuf>) -> Result<AppConfig> {
    let path = resolve_config_path(dir)?;
    AppConfig::load(&path)
}

/// Logs one record as a tab-separated row.
fn log_record_row(record: &MediaRecord) {
    tracing::info!(
        "{}\t{}\t{}\t{}",
        record.id(),
        record.kind(),
        record.year(),
        record.title()
    );
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the source fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let source = build_source(&config, args.locale.as_ref())?;

    let records = source
        .search_by_title(&args.query)
        .await
        .with_context(|| format!("search for {:?} failed", args.query))?;

    if args.json {
        let json = serde_json::to_string_pretty(&records).context("failed to encode records")?;
        tracing::info!("{json}");
        return Ok(());
    }

    tracing::info!("ID\tType\tYear\tTitle");
    for record in &records {
        log_record_row(record);
    }
    tracing::info!("Total: {} records", records.len());

    Ok(())
}

/// Runs the `get` subcommand.
///
/// # Errors
///
/// Returns an error if the id is not recognized, the source fails to build,
/// or the API request fails.
#[instrument(skip_all)]
async fn run_get(args: &GetArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let source = build_source(&config, args.locale.as_ref())?;

    let Some(record) = source
        .get_by_id(&args.id)
        .await
        .with_context(|| format!("lookup of {} failed", args.id))?
    else {
        tracing::info!("No title found for {}", args.id);
        return Ok(());
    };

    if args.json {
        let json = serde_json::to_string_pretty(&record).context("failed to encode record")?;
        tracing::info!("{json}");
        return Ok(());
    }

    tracing::info!("ID: {}", record.id());
    tracing::info!("Type: {}", record.kind());
    tracing::info!("Title: {}", record.title());
    tracing::info!("Year: {}", record.year());
    tracing::info!("Source: {}", record.data_source());

    Ok(())
}

/// Runs the `info` subcommand.
fn run_info() {
    let info = &JUSTWATCH_INFO;
    let types: Vec<String> = info.types.iter().map(ToString::to_string).collect();

    tracing::info!("Name: {}", info.name);
    tracing::info!("Description: {}", info.description);
    tracing::info!("URL: {}", info.url);
    tracing::info!("Types: {}", types.join(", "));
}

/// Runs the `config show` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or serialized.
fn run_config_show(dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_config_path(dir)?;
    let config = AppConfig::load(&path)?;
    let content = toml::to_string_pretty(&config).context("failed to serialize config to TOML")?;

    tracing::info!("# {}", path.display());
    for line in content.lines() {
        tracing::info!("{line}");
    }

    Ok(())
}

/// Runs the `config set-locale` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or saved.
fn run_config_set_locale(locale: Locale, dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_config_path(dir)?;
    let mut config = AppConfig::load(&path)?;
    config.justwatch.locale = locale;
    config.save(&path)?;

    tracing::info!(
        "Saved locale {} to {}",
        config.justwatch.locale,
        path.display()
    );

    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => run_search(&args, cli.dir.as_ref()).await,
        Commands::Get(args) => run_get(&args, cli.dir.as_ref()).await,
        Commands::Info => {
            run_info();
            Ok(())
        }
        Commands::Config(cmd) => match cmd.command {
            ConfigSubcommands::Show => run_config_show(cli.dir.as_ref()),
            ConfigSubcommands::SetLocale { locale } => {
                run_config_set_locale(locale, cli.dir.as_ref())
            }
        },
    }
}
