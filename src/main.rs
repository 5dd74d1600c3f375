// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

use std::io::Write;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::Result;
use lost_found_daemon::client::DEFAULT_SERVER_URL;
use lost_found_daemon::cors::{build_cors_layer, parse_origins, DEFAULT_CORS_ORIGINS};
use lost_found_daemon::http_logging::HttpLoggingLayer;
use lost_found_daemon::logging::{
    self, default_log_dir, init_cli_logging, init_logging, parse_rotation, LogConfig,
};
use lost_found_daemon::user_config::{load_user_config, UserConfig};
use lost_found_daemon::{
    router, AppState, HttpItemsClient, ItemKind, ItemRegistry, ItemService, ItemStore,
    MarkdownStore, MemoryStore, SearchFilters, ServiceConfig, ShutdownSignal, ALL_CATEGORIES,
};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn, Level};

const DEFAULT_ADDR: &str = "127.0.0.1:3001";

/// Lost & Found daemon - stores lost and found item reports and serves them over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP daemon (default)
    Serve(ServeArgs),
    /// Query a running daemon and print matching items as JSON lines
    Search(SearchArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind the server to
    #[arg(short, long, env = "LOST_FOUND_ADDR", default_value = DEFAULT_ADDR)]
    addr: String,

    /// Directory holding the item collections (default: ~/.lost-found/data)
    #[arg(long, env = "LOST_FOUND_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Keep items in memory only; nothing is written to disk
    #[arg(long, env = "LOST_FOUND_EPHEMERAL", default_value = "false")]
    ephemeral: bool,

    /// Comma-separated list of allowed CORS origins.
    /// Use "*" to allow all origins.
    #[arg(
        long,
        env = "LOST_FOUND_CORS_ORIGINS",
        default_value = DEFAULT_CORS_ORIGINS,
        value_delimiter = ','
    )]
    cors_origins: Vec<String>,

    /// Upper bound for each store call, in seconds (default: 10)
    #[arg(
        long,
        env = "LOST_FOUND_STORE_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    store_timeout_secs: Option<u64>,

    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "LOST_FOUND_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "LOST_FOUND_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.lost-found/logs)
    #[arg(long, env = "LOST_FOUND_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Base URL of the daemon
    #[arg(long, env = "LOST_FOUND_SERVER", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Text to look for in item names and descriptions
    #[arg(short, long, default_value = "")]
    query: String,

    /// Exact category, or "All"
    #[arg(short, long, default_value = ALL_CATEGORIES)]
    category: String,

    /// Text to look for in item locations
    #[arg(short, long, default_value = "")]
    location: String,

    /// Only lost or only found items
    #[arg(short, long)]
    kind: Option<ItemKind>,
}

fn report_server_error(addr: SocketAddr, log_file: &Path, e: &std::io::Error) {
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!();
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of lost-found-daemon may already be running.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  1. Kill the existing process:   pkill lost-found-daemon");
        eprintln!("  2. Use a different port:        lost-found-daemon --addr 127.0.0.1:3002");
        eprintln!("  3. Check what's using the port: lsof -i :{}", addr.port());
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return;
    }
    eprintln!();
    eprintln!("Error: Failed to start server: {e}");
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

async fn open_store(args: &ServeArgs, user_cfg: &UserConfig) -> Result<Arc<dyn ItemStore>> {
    if args.ephemeral {
        info!("Using in-memory store; items are lost on exit");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let store = MarkdownStore::new(user_cfg.resolve_data_dir(args.data_dir.clone()));
    store
        .init(&[ItemKind::Lost.collection(), ItemKind::Found.collection()])
        .await?;
    info!(data_dir = %store.root().display(), "Using Markdown store");
    Ok(Arc::new(store))
}

/// Resolves once a shutdown has been signalled.
async fn shutdown_requested(mut shutdown_rx: watch::Receiver<ShutdownSignal>) {
    loop {
        if shutdown_rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
        if *shutdown_rx.borrow() == ShutdownSignal::Shutdown {
            info!("Received shutdown signal, stopping server...");
            break;
        }
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    let log_config = LogConfig {
        log_dir: args.log_dir.clone().unwrap_or_else(default_log_dir),
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };
    let log_file = log_config.log_file();
    logging::set_log_file_path(log_file.to_string_lossy().to_string());

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // Optional ~/.lost-found/config.toml; CLI flags take precedence
    let user_cfg = load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });

    let addr: SocketAddr = args.addr.parse()?;
    let store = open_store(&args, &user_cfg).await?;
    let config = ServiceConfig::default()
        .with_store_timeout(user_cfg.resolve_store_timeout(args.store_timeout_secs));

    let cors_origins = parse_origins(&args.cors_origins);
    info!("CORS origins: {}", cors_origins.join(", "));

    let (shutdown_tx, shutdown_rx) = watch::channel(ShutdownSignal::None);
    let service = ItemService::new(store, config).with_shutdown(shutdown_rx.clone());
    let app = router(AppState::new(service))
        .layer(build_cors_layer(cors_origins))
        .layer(HttpLoggingLayer);

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_server_error(addr, &log_file, &e);
            return Err(e.into());
        }
    };

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() && shutdown_tx.send(ShutdownSignal::Shutdown).is_err() {
            warn!("Shutdown requested but the server is already gone");
        }
    });

    info!(
        addr = %addr,
        timeout = ?config.store_timeout,
        "Starting lost-found daemon"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_requested(shutdown_rx))
        .await?;

    info!("Lost-found daemon stopped");
    Ok(())
}

async fn search(args: SearchArgs) -> Result<()> {
    init_cli_logging(Level::WARN)?;

    let registry = ItemRegistry::new(Arc::new(HttpItemsClient::new(&args.server)));
    registry.load().await?;

    let mut filters = SearchFilters::new(&args.query, &args.category, &args.location);
    if let Some(kind) = args.kind {
        filters = filters.with_kind(kind);
    }
    let matches = filters.apply(&registry.items());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for item in &matches {
        serde_json::to_writer(&mut out, item)?;
        writeln!(out)?;
    }
    out.flush()?;

    info!(count = matches.len(), "Search complete");
    registry.dispose();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Search(args)) => search(args).await,
        Some(Command::Serve(args)) => serve(args).await,
        None => serve(cli.serve).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_serves_with_defaults() {
        let cli = Cli::try_parse_from(["lost-found-daemon"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.serve.addr, DEFAULT_ADDR);
        assert!(!cli.serve.ephemeral);
        assert!(cli.serve.store_timeout_secs.is_none());
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "lost-found-daemon",
            "serve",
            "--ephemeral",
            "--cors-origins",
            "http://a,http://b",
            "--store-timeout-secs",
            "3",
        ])
        .unwrap();
        let Some(Command::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        assert!(args.ephemeral);
        assert_eq!(args.cors_origins, vec!["http://a", "http://b"]);
        assert_eq!(args.store_timeout_secs, Some(3));
    }

    #[test]
    fn test_search_flags() {
        let cli = Cli::try_parse_from([
            "lost-found-daemon",
            "search",
            "--query",
            "wallet",
            "--kind",
            "found",
        ])
        .unwrap();
        let Some(Command::Search(args)) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.query, "wallet");
        assert_eq!(args.category, ALL_CATEGORIES);
        assert_eq!(args.kind, Some(ItemKind::Found));
    }

    #[test]
    fn test_zero_store_timeout_is_rejected() {
        let result = Cli::try_parse_from(["lost-found-daemon", "--store-timeout-secs", "0"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_shutdown_requested_resolves_on_shutdown() {
        let (shutdown_tx, shutdown_rx) = watch::channel(ShutdownSignal::None);
        let waiter = tokio::spawn(shutdown_requested(shutdown_rx));

        shutdown_tx.send(ShutdownSignal::Shutdown).unwrap();
        tokio::time::timeout(std::time::Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap();
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(Cli::try_parse_from(["lost-found-daemon", "search", "--kind", "stolen"]).is_err());
    }
}
