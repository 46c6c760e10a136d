use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;
use user_crud::api;
use user_crud::config::{CONFIG, StorageBackend};
use user_crud::{InMemoryStorage, SqliteStorage, UserService, UserStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&CONFIG.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    CONFIG.validate()?;
    info!("starting user-crud with {:?}", *CONFIG);

    let storage: Arc<dyn UserStorage> = match CONFIG.storage_backend {
        StorageBackend::Memory => Arc::new(InMemoryStorage::new()),
        StorageBackend::Sqlite => {
            Arc::new(SqliteStorage::connect(&CONFIG.database_url, CONFIG.database_max_connections).await?)
        }
    };
    let service = Arc::new(UserService::new(storage).with_password_cost(CONFIG.bcrypt_cost));

    let app = api::app(service, Duration::from_secs(CONFIG.request_timeout_secs));

    // Start server
    let addr: SocketAddr = format!("{}:{}", CONFIG.host, CONFIG.port).parse()?;
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
