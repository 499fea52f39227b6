// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::future::pending;
use std::net::IpAddr;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::signal::ctrl_c;
use tokio::time::sleep;

use crate::cmd::view::get::get_handler;
use crate::cmd::view::media::media_handler;
use crate::cmd::view::post::category_handler;
use crate::cmd::view::post::post_handler;
use crate::cmd::view::state::ServerState;
use crate::dataset::Dataset;
use crate::error::Fallible;

/// Where to listen, and whether to open a browser tab once listening.
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

pub async fn start_server(dataset: Dataset, config: ServerConfig) -> Fallible<()> {
    let ip: IpAddr = config.host.parse()?;
    let bind = SocketAddr::new(ip, config.port);

    log::info!(
        "Loaded {} categories with {} cards.",
        dataset.categories().len(),
        dataset.card_count()
    );

    let state = ServerState::new(dataset);
    let app = Router::new();
    let app = app.route("/", get(get_handler));
    let app = app.route("/", post(post_handler));
    let app = app.route("/category", post(category_handler));
    let app = app.route("/media/{*path}", get(media_handler));
    let app = app.route("/script.js", get(script));
    let app = app.route("/style.css", get(stylesheet));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);

    // Start a separate task to open the browser.
    if config.open_browser {
        let host = if ip.is_unspecified() || ip.is_loopback() {
            "localhost".to_string()
        } else {
            bind.ip().to_string()
        };
        let url = format!("http://{host}:{}/", config.port);
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(bind).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            if let Err(e) = open::that(&url) {
                log::warn!("Failed to open {url}: {e}");
            }
        });
    }

    // Start the server.
    log::info!("Starting server on {bind}");
    let listener = TcpListener::bind(bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    match ctrl_c().await {
        Ok(()) => log::debug!("Received Ctrl-C, shutting down."),
        Err(e) => {
            log::error!("Failed to listen for Ctrl-C: {e}");
            pending::<()>().await;
        }
    }
}

async fn script() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("script.js");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/javascript"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

async fn stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}
