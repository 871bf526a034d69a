//! Keyfacts HTTP server
//!
//! Single-endpoint actix-web app around the summarization pipeline.

pub mod routes;
pub mod state;
pub mod types;

use actix_web::{web, App, HttpServer};
use keyfacts_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::state::AppState;

/// Start the HTTP server and block until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_address = config.server_bind_address();
    let state = web::Data::new(Arc::new(AppState::new(config)?));

    info!("Starting HTTP server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .service(routes::summary::generate_summary)
    })
    .bind(bind_address.as_str())?
    .run()
    .await?;

    Ok(())
}
