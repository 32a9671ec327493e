pub mod config;
pub mod error;
pub mod run;

use config::ServerConfig;
pub use error::{Error, Result};
use gamestore_app::state::AppState;
use tracing::info;

pub async fn build_state(config: &ServerConfig) -> Result<AppState> {
    let database_url = config.database_url()?;
    let pool = gamestore_dal::new_pool(&database_url).await?;
    gamestore_dal::migrate(&pool).await?;
    info!("Database ready at {database_url}");
    Ok(AppState::new(pool))
}
