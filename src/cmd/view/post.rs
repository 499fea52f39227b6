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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::cmd::view::state::ServerState;

#[derive(Debug, Deserialize, PartialEq)]
enum Action {
    Previous,
    Next,
    Flip,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
}

#[derive(Deserialize)]
pub struct CategoryForm {
    category: String,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    let mut mutable = state.lock();
    let session = &mut mutable.session;
    match form.action {
        Action::Previous => session.retreat(&state.dataset),
        Action::Next => session.advance(&state.dataset),
        Action::Flip => session.flip(&state.dataset),
    }
    let viewer = session.viewer();
    log::debug!(
        "{:?}: category={} index={} flipped={}",
        form.action,
        session.selected(),
        viewer.index(),
        viewer.is_flipped()
    );
    Redirect::to("/")
}

pub async fn category_handler(
    State(state): State<ServerState>,
    Form(form): Form<CategoryForm>,
) -> Redirect {
    let mut mutable = state.lock();
    if state.dataset.find(&form.category).is_none() {
        log::debug!("Selected unknown category: {}", form.category);
    }
    mutable.session.select(&form.category);
    log::debug!("Selected category: {}", mutable.session.selected());
    Redirect::to("/")
}
