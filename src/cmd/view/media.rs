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

use axum::extract::Path;
use axum::extract::State;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use tokio::fs::read;

use crate::cmd::view::state::ServerState;
use crate::media::load::content_type;

type MediaResponse = (StatusCode, [(HeaderName, &'static str); 2], Vec<u8>);

fn not_found() -> MediaResponse {
    (
        StatusCode::NOT_FOUND,
        [(CONTENT_TYPE, "text/plain"), (CACHE_CONTROL, "no-cache")],
        b"Not Found".to_vec(),
    )
}

/// Serve a file from the dataset directory. Failures are answered with a
/// 404 and left to the browser to display.
pub async fn media_handler(
    State(state): State<ServerState>,
    Path(path): Path<String>,
) -> MediaResponse {
    let Some(loader) = &state.media else {
        log::warn!("No dataset directory to serve {path} from.");
        return not_found();
    };
    let file = match loader.validate(&path) {
        Ok(file) => file,
        Err(e) => {
            log::warn!("Rejected media request {path}: {e:?}");
            return not_found();
        }
    };
    match read(&file).await {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (CONTENT_TYPE, content_type(&file)),
                (CACHE_CONTROL, "no-cache"),
            ],
            bytes,
        ),
        Err(e) => {
            log::warn!("Failed to read {}: {e}", file.display());
            not_found()
        }
    }
}
