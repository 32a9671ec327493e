//! Harness for tests running a real server on a random local port.

use std::time::Duration;

use anyhow::{anyhow, Result};
use gamestore_app::state::AppState;
use gamestore_server::config::{Parser, ServerConfig};
use rand::Rng as _;
use tempfile::TempDir;
use tokio::sync::oneshot;
use tracing::{debug, error};
use url::Url;

fn random_port() -> Result<u16> {
    let mut rng = rand::rng();

    let mut retries = 3;
    while retries > 0 {
        let port: u16 = rng.random_range(3030..4030);
        let addr: std::net::SocketAddr = format!("127.0.0.1:{}", port).parse()?;
        match std::net::TcpStream::connect_timeout(&addr, Duration::from_millis(100)) {
            Err(e) if e.kind() == std::io::ErrorKind::ConnectionRefused => return Ok(port),
            Err(_) | Ok(_) => retries -= 1,
        }
    }

    Err(anyhow!("Could not find a free port"))
}

/// Keeps the temporary data directory alive for the duration of a test.
pub struct ConfigGuard {
    #[allow(dead_code)]
    data_dir: TempDir,
}

pub fn test_config(test_name: &str) -> Result<(ServerConfig, ConfigGuard)> {
    let tmp_data_dir = TempDir::with_prefix(format!("{}_", test_name))?;
    let data_dir = tmp_data_dir.path().to_string_lossy().to_string();
    let port = random_port()?.to_string();
    let args = &["gamestore-e2e-tests", "--data-dir", &data_dir, "--port", &port];
    let config = ServerConfig::try_parse_from(args)?;
    Ok((
        config,
        ConfigGuard {
            data_dir: tmp_data_dir,
        },
    ))
}

/// Prepared database and config, the server is not started yet so tests
/// can seed data through the pool first.
pub async fn prepare_env(test_name: &str) -> Result<(ServerConfig, AppState, ConfigGuard)> {
    let (config, guard) = test_config(test_name)?;
    let state = gamestore_server::build_state(&config).await?;
    Ok((config, state, guard))
}

/// Stops the server when dropped.
pub struct ServerGuard {
    shutdown: Option<oneshot::Sender<()>>,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

pub fn base_url(config: &ServerConfig) -> Result<Url> {
    Ok(Url::parse(&format!("http://127.0.0.1:{}/", config.port))?)
}

pub async fn launch_env(config: ServerConfig, state: AppState) -> Result<(Url, ServerGuard)> {
    let base_url = base_url(&config)?;
    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        let shutdown = async {
            let _ = rx.await;
        };
        if let Err(e) = gamestore_server::run::run_graceful_with_state(config, state, shutdown).await
        {
            error!("Test server failed: {e}");
        }
    });
    let guard = ServerGuard { shutdown: Some(tx) };

    let client = reqwest::Client::new();
    let probe = base_url.join("genres")?;
    for _ in 0..50 {
        match client.get(probe.clone()).send().await {
            Ok(response) if response.status().is_success() => return Ok((base_url, guard)),
            Ok(response) => debug!("Server not ready: {}", response.status()),
            Err(e) => debug!("Server not ready: {e}"),
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    Err(anyhow!("Server did not start on {base_url}"))
}

pub async fn insert_genre(state: &AppState, name: &str) -> Result<i64> {
    let result = sqlx::query("INSERT INTO genre (name) VALUES (?)")
        .bind(name)
        .execute(state.pool())
        .await?;
    Ok(result.last_insert_rowid())
}
