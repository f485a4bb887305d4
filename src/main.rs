#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use fixdesk::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let session = startup::connect_to_session(&config).await?;
        let db = startup::connect_to_database(&config).await?;
        let directory = startup::build_directory(&config)?;
        let token_verifier = server::service::auth::TokenVerifier::new(&config.auth_jwt_secret);
        let (telemetry, _worker) = startup::start_telemetry_worker(&config, db.clone()).await?;
        let _scheduler = startup::start_scheduler(&config, db.clone(), telemetry.clone()).await?;

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(AppState {
                db,
                telemetry,
                directory,
                token_verifier,
            })
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
