mod config;
mod error;
mod models;
mod routes;
mod seed;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env();
    let state = state::AppState::new(config);

    if config.seed_demo_data {
        seed::load_demo_data(&state).await;
    } else {
        tracing::info!("starting with an empty directory (SEED_DEMO_DATA=false)");
    }

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "chronodesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
