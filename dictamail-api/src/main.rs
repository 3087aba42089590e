mod app_state;
mod config;
mod router;
mod routes;
mod telemetry;

use app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename(".env.local").ok();
    telemetry::init();

    let settings = config::read_config()?;
    let normalizer = settings.normalizer.build_normalizer()?;
    tracing::info!(
        infer_domain = normalizer.infers_domain(),
        "normalizer ready"
    );

    let app = router::create(AppState::new(normalizer));

    let listener = tokio::net::TcpListener::bind(settings.application.address()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
