use bias_survey::config::ServerConfig;
use bias_survey::routes;
use bias_survey::services::scoring::ResponseAgent;
use bias_survey::state::AppState;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().expect("invalid server configuration");
    let state = AppState::new(ResponseAgent::new(config.agent_name.clone()));

    let app = routes::leptos_app(state, config.site_root.clone()).expect("leptos app init failed");
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, agent = %config.agent_name, "bias-survey listening");
    axum::serve(listener, app).await.expect("server failed");
}
