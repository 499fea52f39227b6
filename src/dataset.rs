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

use std::collections::HashSet;
use std::env::current_dir;
use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use serde::Deserialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::category::Category;

/// The name of the dataset file inside a dataset directory.
pub const DATASET_FILE: &str = "categories.toml";

const SAMPLE: &str = include_str!("sample.toml");

#[derive(Deserialize)]
struct DatasetFile {
    #[serde(rename = "category", default)]
    categories: Vec<Category>,
}

/// The static list of categories. Loaded once at startup and never mutated.
pub struct Dataset {
    /// The directory local media paths are relative to. `None` for the
    /// built-in sample.
    directory: Option<PathBuf>,
    categories: Vec<Category>,
}

impl Dataset {
    /// Load the dataset from a directory, defaulting to the current
    /// directory.
    pub fn open(directory: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };
        let path = directory.join(DATASET_FILE);
        if !path.exists() {
            return Err(ErrorReport::new(&format!(
                "no {DATASET_FILE} in {}.",
                directory.display()
            )));
        }

        log::debug!("Loading dataset...");
        let start = Instant::now();
        let text = read_to_string(&path)?;
        let categories = parse_categories(&text)?;
        let duration = Instant::now().duration_since(start).as_millis();
        log::debug!("Dataset loaded in {duration}ms.");

        Ok(Self {
            directory: Some(directory),
            categories,
        })
    }

    /// The dataset compiled into the binary.
    pub fn sample() -> Fallible<Self> {
        Ok(Self {
            directory: None,
            categories: parse_categories(SAMPLE)?,
        })
    }

    #[cfg(test)]
    pub fn from_categories(categories: Vec<Category>) -> Self {
        Self {
            directory: None,
            categories,
        }
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The category selected when the viewer starts.
    pub fn first(&self) -> Option<&Category> {
        self.categories.first()
    }

    pub fn find(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id() == id)
    }

    pub fn card_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.flashcards().len())
            .sum()
    }
}

/// Parse and check a dataset file.
fn parse_categories(text: &str) -> Fallible<Vec<Category>> {
    let file: DatasetFile = toml::from_str(text)?;
    if file.categories.is_empty() {
        return fail("dataset has no categories.");
    }
    let mut seen: HashSet<&str> = HashSet::new();
    for category in &file.categories {
        if category.id().trim().is_empty() {
            return fail("category id is empty.");
        }
        if !seen.insert(category.id()) {
            return Err(ErrorReport::new(&format!(
                "duplicate category id: {}.",
                category.id()
            )));
        }
    }
    Ok(file.categories)
}
