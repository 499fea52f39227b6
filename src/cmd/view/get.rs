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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::cmd::view::state::ServerState;
use crate::cmd::view::template::page_template;
use crate::dataset::Dataset;
use crate::markdown::markdown_to_html_inline;
use crate::types::flashcard::Flashcard;
use crate::viewer::Progress;
use crate::viewer::Session;

const SPEAKER_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5"/><path d="M15.54 8.46a5 5 0 0 1 0 7.07"/><path d="M19.07 4.93a10 10 0 0 1 0 14.14"/></svg>"#;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let session = state.lock().session.clone();
    let html = page_template(render(&state.dataset, &session));
    (StatusCode::OK, Html(html.into_string()))
}

pub fn render(dataset: &Dataset, session: &Session) -> Markup {
    html! {
        div.root {
            (render_selector(dataset, session))
            @match session.current(dataset) {
                Some(card) => {
                    @let viewer = session.viewer();
                    @let len = session.cards(dataset).len();
                    (render_deck(card, viewer.progress(len), viewer.is_flipped()))
                }
                None => {
                    div.empty {
                        p { "No flashcards available" }
                    }
                }
            }
        }
    }
}

fn render_selector(dataset: &Dataset, session: &Session) -> Markup {
    html! {
        form.selector action="/category" method="post" {
            label for="category" { "Select Category" }
            select #category name="category" {
                @for category in dataset.categories() {
                    option value=(category.id()) selected[category.id() == session.selected()] {
                        (category.name())
                    }
                }
            }
            input #select type="submit" value="Select";
        }
    }
}

fn render_deck(card: &Flashcard, progress: Option<Progress>, flipped: bool) -> Markup {
    let face = if flipped {
        let meaning = markdown_to_html_inline(card.meaning());
        html! {
            span.back {
                span.meaning { (PreEscaped(meaning)) }
            }
        }
    } else {
        html! {
            span.front {
                span.image {
                    img src=(card.image().href()) alt=(card.word());
                }
                span.word { (card.word()) }
                span.pronunciation { (card.pronunciation()) }
            }
        }
    };
    html! {
        div.deck {
            @if let Some(progress) = progress {
                div.progress {
                    div.progress-label {
                        span { "Progress" }
                        span.progress-count {
                            (progress.position) " / " (progress.total)
                        }
                    }
                    div.progress-track {
                        div.progress-bar style=(format!("width: {:.2}%", progress.percent())) {}
                    }
                }
            }
            form action="/" method="post" {
                button #card .card .flipped[flipped] type="submit" name="action" value="Flip" {
                    (face)
                }
            }
            div.controls {
                form action="/" method="post" {
                    input #previous type="submit" name="action" value="Previous";
                    button #play type="button" title="Play pronunciation" {
                        (PreEscaped(SPEAKER_ICON))
                    }
                    input #next type="submit" name="action" value="Next";
                }
            }
            audio #pronunciation preload="none" src=(card.audio().href()) {}
            p.instructions {
                "Click the card to flip • Use buttons to navigate • Click speaker to hear pronunciation"
            }
        }
    }
}
