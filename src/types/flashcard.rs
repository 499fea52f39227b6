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

use crate::media::Locator;

/// A single vocabulary item.
///
/// The front face shows the image, the word and its pronunciation. The back
/// face shows the meaning.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Flashcard {
    word: String,
    pronunciation: String,
    /// Markdown.
    meaning: String,
    image: String,
    audio: String,
}

impl Flashcard {
    #[cfg(test)]
    pub fn new(
        word: impl Into<String>,
        pronunciation: impl Into<String>,
        meaning: impl Into<String>,
        image: impl Into<String>,
        audio: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            pronunciation: pronunciation.into(),
            meaning: meaning.into(),
            image: image.into(),
            audio: audio.into(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    pub fn image_url(&self) -> &str {
        &self.image
    }

    pub fn audio_url(&self) -> &str {
        &self.audio
    }

    pub fn image(&self) -> Locator {
        Locator::parse(&self.image)
    }

    pub fn audio(&self) -> Locator {
        Locator::parse(&self.audio)
    }
}
