#[tokio::main]
async fn main() {
    railcast_observability::init();

    let config = railcast_api::config::ApiConfig::from_env();
    let state = railcast_api::state::build_state(&config);
    let app = railcast_api::app::build_app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {e}", config.bind));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
