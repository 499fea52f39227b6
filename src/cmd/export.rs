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

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::Fallible;

pub fn export_dataset(directory: Option<String>) -> Fallible<()> {
    let dataset: Dataset = Dataset::open(directory)?;
    let export: Export = get_export(&dataset);
    let json: String = serde_json::to_string_pretty(&export)?;
    println!("{json}");
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Export {
    categories: Vec<CategoryExport>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryExport {
    id: String,
    name: String,
    flashcards: Vec<FlashcardExport>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FlashcardExport {
    word: String,
    pronunciation: String,
    meaning: String,
    image_url: String,
    audio_url: String,
}

fn get_export(dataset: &Dataset) -> Export {
    let categories = dataset
        .categories()
        .iter()
        .map(|category| CategoryExport {
            id: category.id().to_owned(),
            name: category.name().to_owned(),
            flashcards: category
                .flashcards()
                .iter()
                .map(|card| FlashcardExport {
                    word: card.word().to_owned(),
                    pronunciation: card.pronunciation().to_owned(),
                    meaning: card.meaning().to_owned(),
                    image_url: card.image_url().to_owned(),
                    audio_url: card.audio_url().to_owned(),
                })
                .collect(),
        })
        .collect();
    Export { categories }
}
