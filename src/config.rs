use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_relay_host")]
    pub host: String,
    #[serde(default = "default_relay_port")]
    pub port: u16,
    /// Max number of snapshots queued per /ws/snapshot client (slow clients may lag).
    #[serde(default = "default_broadcast_capacity")]
    pub broadcast_capacity: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: default_relay_host(),
            port: default_relay_port(),
            broadcast_capacity: default_broadcast_capacity(),
        }
    }
}

fn default_relay_host() -> String {
    "0.0.0.0".into()
}

fn default_relay_port() -> u16 {
    50051
}

fn default_broadcast_capacity() -> usize {
    16
}

fn default_relay_url() -> String {
    "http://localhost:50051".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
    /// Identity reported in every snapshot. Resolved at startup when unset.
    #[serde(default)]
    pub host_name: Option<String>,
    /// Directory standing in for /proc.
    #[serde(default = "default_proc_root")]
    pub proc_root: String,
    #[serde(default = "default_sample_interval_ms")]
    pub sample_interval_ms: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            relay_url: default_relay_url(),
            host_name: None,
            proc_root: default_proc_root(),
            sample_interval_ms: default_sample_interval_ms(),
        }
    }
}

fn default_proc_root() -> String {
    "/proc".into()
}

fn default_sample_interval_ms() -> u64 {
    3000
}

impl AgentConfig {
    /// Configured host name, else `$USER`, else the system host name, else "unknown_host".
    pub fn resolve_host_name(&self) -> String {
        self.host_name
            .clone()
            .filter(|h| !h.is_empty())
            .or_else(|| std::env::var("USER").ok().filter(|u| !u.is_empty()))
            .or_else(sysinfo::System::host_name)
            .unwrap_or_else(|| "unknown_host".into())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            relay_url: default_relay_url(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    2000
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    /// How often agent and relay log their stats at INFO level.
    #[serde(default = "default_stats_log_interval_secs")]
    pub stats_log_interval_secs: u64,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            stats_log_interval_secs: default_stats_log_interval_secs(),
        }
    }
}

fn default_stats_log_interval_secs() -> u64 {
    60
}

impl AppConfig {
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("config {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.relay.port > 0,
            "relay.port must be between 1 and 65535, got {}",
            self.relay.port
        );
        anyhow::ensure!(!self.relay.host.is_empty(), "relay.host must be non-empty");
        anyhow::ensure!(
            self.relay.broadcast_capacity > 0,
            "relay.broadcast_capacity must be > 0, got {}",
            self.relay.broadcast_capacity
        );
        anyhow::ensure!(
            is_http_url(&self.agent.relay_url),
            "agent.relay_url must start with http://, got {:?}",
            self.agent.relay_url
        );
        anyhow::ensure!(
            !self.agent.proc_root.is_empty(),
            "agent.proc_root must be non-empty"
        );
        anyhow::ensure!(
            self.agent.sample_interval_ms > 0,
            "agent.sample_interval_ms must be > 0, got {}",
            self.agent.sample_interval_ms
        );
        anyhow::ensure!(
            is_http_url(&self.viewer.relay_url),
            "viewer.relay_url must start with http://, got {:?}",
            self.viewer.relay_url
        );
        anyhow::ensure!(
            self.viewer.poll_interval_ms > 0,
            "viewer.poll_interval_ms must be > 0, got {}",
            self.viewer.poll_interval_ms
        );
        anyhow::ensure!(
            self.monitoring.stats_log_interval_secs > 0,
            "monitoring.stats_log_interval_secs must be > 0, got {}",
            self.monitoring.stats_log_interval_secs
        );
        Ok(())
    }
}

/// The client carries no TLS backend and the relay serves plain HTTP.
fn is_http_url(url: &str) -> bool {
    url.starts_with("http://")
}
