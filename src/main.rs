use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_relay::{
    config::Config,
    delivery::DeliveryClient,
    display::DisplayHandle,
    pipeline::{auth::AuthOutcome, timezone, Pipeline},
    routes,
    state::AppState,
    store::MemoryHealthStore,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workout_relay=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let delivery = match DeliveryClient::new(&config.endpoint_url) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(error = %err, "Cannot start without a valid workout endpoint");
            std::process::exit(1);
        }
    };
    let device_tz = timezone::device_timezone(config.device_timezone.as_deref());
    tracing::info!(
        endpoint = %delivery.endpoint(),
        device_timezone = device_tz.name(),
        "Workout relay configured"
    );

    let store = Arc::new(MemoryHealthStore::new(config.health_data_available));
    let display = DisplayHandle::spawn();
    let pipeline = Pipeline::new(
        store.clone(),
        device_tz,
        delivery,
        display.clone(),
        config.background_frequency,
    );

    match pipeline.gate.request_authorization().await {
        AuthOutcome::Granted => tracing::info!("Workout ingestion running"),
        AuthOutcome::Unavailable => {
            tracing::warn!("Health data unavailable, serving status only")
        }
        AuthOutcome::Denied(reason) => {
            tracing::warn!(reason = %reason, "Workout access denied, serving status only")
        }
    }

    let state = AppState::new(store, display, pipeline.observer.clone());
    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::workout::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(addr = %addr, error = %err, "Failed to bind status server");
            std::process::exit(1);
        }
    };

    tracing::info!("Workout relay listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Latest workout: GET http://{}/api/workout/latest", addr);
    tracing::info!("Save workout: POST http://{}/api/samples", addr);

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(error = %err, "Status server stopped");
    }
}
