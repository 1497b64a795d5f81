use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod config;
mod data;
mod features;
mod handlers;
mod schema;
#[cfg(all(test, not(feature = "mysql")))]
mod test_support;

use crate::{
    config::Config,
    data::{EntryStore, models::StartupError},
};

#[tokio::main]
async fn main() {
    // .env is optional; the variables may come from the environment instead
    let dotenv_result = dotenv::dotenv();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_kbbi=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = dotenv_result {
        log::debug!("No .env file loaded: {}", e);
    }

    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;

    let store = EntryStore::connect(&config.database)
        .await
        .map_err(StartupError::Pool)?;
    let has_entries = store.ping().await.map_err(StartupError::Connectivity)?;
    log::info!("Berhasil terhubung ke database");
    if !has_entries {
        log::warn!("Tabel api_kbbi_IV kosong");
    }

    let app = app::build_router(store);

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.clone(),
            source,
        })?;

    log::info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.map_err(StartupError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_configuration_is_startup_failure() {
        let err: StartupError = Config::from_lookup(|_| None).unwrap_err().into();

        assert!(matches!(err, StartupError::Config(_)));
        #[cfg(not(feature = "mysql"))]
        assert_eq!(
            err.to_string(),
            "Gagal memuat konfigurasi: variabel DB_NAME belum diatur"
        );
        #[cfg(feature = "mysql")]
        assert_eq!(
            err.to_string(),
            "Gagal memuat konfigurasi: variabel DB_USER belum diatur"
        );
    }
}
