use anyhow::Result;
use clap::{Parser, Subcommand};
use procwatch::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[derive(Parser)]
#[command(name = "procwatch", version, about = "Linux /proc sampling agent, relay and viewer")]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, env = "CONFIG_FILE", default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    role: Role,
}

#[derive(Subcommand)]
enum Role {
    /// Hold the latest snapshot and serve it over HTTP/WebSocket.
    Relay,
    /// Sample /proc periodically and push snapshots to the relay.
    Agent,
    /// Pull the latest snapshot periodically and print it.
    Viewer,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; the viewer draws on stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app_config = config::AppConfig::load_from_path(&cli.config)?;

    match cli.role {
        Role::Relay => run_relay(app_config).await,
        Role::Agent => run_agent(app_config).await,
        Role::Viewer => run_viewer(app_config).await,
    }
}

async fn run_relay(app_config: config::AppConfig) -> Result<()> {
    let relay = Arc::new(relay::SnapshotRelay::new(
        app_config.relay.broadcast_capacity,
    ));
    let ws_connections = Arc::new(AtomicUsize::new(0));
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let stats_handle = relay::spawn_stats_log(
        relay.clone(),
        ws_connections.clone(),
        app_config.monitoring.stats_log_interval_secs,
        shutdown_rx,
    );

    let app = routes::app(relay, ws_connections);
    let addr = format!("{}:{}", app_config.relay.host, app_config.relay.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Relay listening on http://{}", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = shutdown_signal() => {
            tracing::info!("Received shutdown signal");
            let _ = shutdown_tx.send(());
            let _ = stats_handle.await;
        }
    }
    Ok(())
}

async fn run_agent(app_config: config::AppConfig) -> Result<()> {
    let host_name = app_config.agent.resolve_host_name();
    let client = client::RelayClient::new(&app_config.agent.relay_url)?;
    let sampler = sampler::Sampler::new(&app_config.agent.proc_root, host_name.clone());
    tracing::info!(
        host = %host_name,
        relay = %app_config.agent.relay_url,
        proc_root = %app_config.agent.proc_root,
        "Agent starting"
    );

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let handle = agent::spawn(
        agent::AgentDeps {
            sampler,
            sink: client,
            shutdown_rx,
        },
        agent::LoopConfig {
            sample_interval_ms: app_config.agent.sample_interval_ms,
            stats_log_interval_secs: app_config.monitoring.stats_log_interval_secs,
        },
    );

    shutdown_signal().await;
    tracing::info!("Received shutdown signal");
    let _ = shutdown_tx.send(());
    handle.await?;
    Ok(())
}

async fn run_viewer(app_config: config::AppConfig) -> Result<()> {
    let client = client::RelayClient::new(&app_config.viewer.relay_url)?;
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let handle = viewer::spawn(
        viewer::Viewer::new(client),
        std::io::stdout(),
        app_config.viewer.poll_interval_ms,
        shutdown_rx,
    );

    shutdown_signal().await;
    let _ = shutdown_tx.send(());
    handle.await?;
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
