use landmark_match::api::service::{State, router};
use landmark_match::api::{image_host, map_service};
use landmark_match::config::{Config, VARIABLES};
use landmark_match::scorer;
use landmark_match::store::LocationStore;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{e}");
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::env().inspect_err(|e| {
        log::error!(
            "config: {e}. Check the environment variables ({}) hold valid values.",
            VARIABLES.join(", ")
        );
    })?;

    config.log();

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;

    let map_service = map_service::Client::new(http.clone(), &config.map_service_url)?;
    let images = image_host::Client::new(http);
    let scorer = scorer::Process::new(&config.scorer_command, config.scorer_timeout)?;

    let state = State::new(LocationStore::new(), map_service, images, scorer);

    let listen_addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;

    let router = router::router(state);

    log::info!("Listening on {listen_addr}");
    axum::serve(listener, router).await?;

    Ok(())
}
