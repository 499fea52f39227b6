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

use serde::Deserialize;

use crate::types::flashcard::Flashcard;

/// A named, ordered group of flashcards.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Category {
    id: String,
    name: String,
    #[serde(rename = "flashcard", default)]
    flashcards: Vec<Flashcard>,
}

impl Category {
    #[cfg(test)]
    pub fn new(id: impl Into<String>, name: impl Into<String>, flashcards: Vec<Flashcard>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            flashcards,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }
}
