use std::net::SocketAddr;
use std::sync::Arc;

use skyward_api::{app, app_config::Config, AppState};
use skyward_core::BookingRegistry;
use skyward_schedule::RandomFlightGenerator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyward_api=debug,skyward_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting Skyward API on port {}", config.server.port);

    let generator = Arc::new(RandomFlightGenerator::new().with_horizon(config.search.horizon_days));
    let registry = Arc::new(BookingRegistry::new(
        generator,
        config.search.flights_per_route,
    ));

    let app = app(AppState { registry });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
