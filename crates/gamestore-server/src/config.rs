use std::path::PathBuf;

use crate::error::Result;
use anyhow::Context as _;
pub use clap::Parser;

#[derive(Debug, Clone, clap::Parser)]
#[command(version, about = "Game catalog REST API server")]
pub struct ServerConfig {
    #[arg(
        short,
        long,
        default_value_t = 3000,
        env = "GAMESTORE_LISTEN_PORT",
        help = "Port to listen on"
    )]
    pub port: u16,
    #[arg(
        short,
        long,
        default_value = "127.0.0.1",
        env = "GAMESTORE_LISTEN_ADDRESS",
        help = "Address to listen on"
    )]
    pub listen_address: String,

    #[arg(
        long,
        env = "GAMESTORE_DATABASE_URL",
        help = "Database URL e.g. sqlite://file.db, default is sqlite://[data-dir]/gamestore.db, where data-dir is set by --data-dir"
    )]
    database_url: Option<String>,

    #[arg(
        long,
        env = "GAMESTORE_DATA_DIR",
        help = "Data directory for the database, default is system default like ~/.local/share/gamestore"
    )]
    data_dir: Option<PathBuf>,

    #[arg(long, env = "GAMESTORE_CORS", help = "Enable permissive CORS")]
    pub cors: bool,
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|p| p.join("gamestore"))
        .unwrap_or_else(|| PathBuf::from("gamestore"))
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        ServerConfig::try_parse().map_err(|e| e.into())
    }

    /// Data directory, created when missing.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let dir = self.data_dir.clone().unwrap_or_else(default_data_dir);
        if !dir.exists() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create data directory {dir:?}"))?;
        } else if !dir.is_dir() {
            anyhow::bail!("Data directory {dir:?} is not a directory");
        }
        Ok(dir)
    }

    pub fn database_url(&self) -> Result<String> {
        match self.database_url {
            Some(ref url) => Ok(url.clone()),
            None => Ok(format!(
                "sqlite://{}",
                self.data_dir()?.join("gamestore.db").to_string_lossy()
            )),
        }
    }
}
