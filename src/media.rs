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

pub mod load;

use std::collections::BTreeSet;
use std::path::Path;

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::utf8_percent_encode;

use crate::dataset::Dataset;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::media::load::MediaLoader;

/// Characters escaped when a dataset-relative path is turned into a URL
/// path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Where a flashcard's image or audio lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Locator {
    /// An absolute URL, handed to the browser untouched.
    Remote(String),
    /// A path relative to the dataset directory, served under `/media`.
    Local(String),
}

impl Locator {
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.contains("://") {
            Locator::Remote(s.to_string())
        } else {
            Locator::Local(s.to_string())
        }
    }

    /// The URL the browser should use to fetch this resource.
    pub fn href(&self) -> String {
        match self {
            Locator::Remote(url) => url.clone(),
            Locator::Local(path) => {
                let segments: Vec<String> = path
                    .split('/')
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
                    .collect();
                format!("/media/{}", segments.join("/"))
            }
        }
    }
}

/// Represents a local media file that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MissingMedia {
    pub file_path: String,
    pub category_id: String,
    pub word: String,
}

/// Collect the dataset-relative paths of every local media file referenced
/// by the dataset.
pub fn referenced_media_paths(dataset: &Dataset) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    for category in dataset.categories() {
        for card in category.flashcards() {
            for locator in [card.image(), card.audio()] {
                if let Locator::Local(path) = locator {
                    paths.insert(path);
                }
            }
        }
    }
    paths
}

/// Validate that all local media files referenced by flashcards exist.
pub fn validate_media_files(dataset: &Dataset, base_dir: &Path) -> Fallible<()> {
    // Judge each file the way `/media` will when the browser asks for it.
    let loader = MediaLoader::new(base_dir.to_path_buf());
    let mut missing = BTreeSet::new();

    for category in dataset.categories() {
        for card in category.flashcards() {
            for locator in [card.image(), card.audio()] {
                // Remote resources are the browser's business.
                let Locator::Local(path) = locator else {
                    continue;
                };
                if loader.validate(&path).is_err() {
                    missing.insert(MissingMedia {
                        file_path: path,
                        category_id: category.id().to_string(),
                        word: card.word().to_string(),
                    });
                }
            }
        }
    }

    if !missing.is_empty() {
        let mut msg = String::from("Missing media files referenced in flashcards:\n");
        for m in missing {
            msg.push_str(&format!(
                "  - {} (referenced in {}/{})\n",
                m.file_path, m.category_id, m.word
            ));
        }
        return Err(ErrorReport::new(&msg));
    }

    Ok(())
}
