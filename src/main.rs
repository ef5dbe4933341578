use shortlink::{AppState, IdGenerator, load_links, resolve_data_path, resolve_static_dir, router};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path();
    if let Some(parent) = data_path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let static_dir = resolve_static_dir();
    fs::create_dir_all(static_dir.join("qrcodes")).await?;

    let node_id = env::var("SHORTLINK_NODE_ID")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(1);
    let base_url = env::var("BASE_URL").ok().filter(|value| !value.is_empty());

    let links = load_links(&data_path).await;
    let state = AppState::new(
        data_path,
        static_dir,
        base_url,
        links,
        IdGenerator::new(node_id),
    );

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
