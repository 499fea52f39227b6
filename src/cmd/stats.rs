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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::Fallible;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_dataset_stats(directory: Option<String>, format: StatsFormat) -> Fallible<()> {
    let dataset = Dataset::open(directory)?;
    let stats = get_stats(&dataset);
    match format {
        StatsFormat::Text => {
            println!("Categories: {}", stats.category_count);
            println!("Cards: {}", stats.card_count);
            for category in &stats.categories {
                println!("  {}: {}", category.name, category.card_count);
            }
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{}", stats_json);
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    category_count: usize,
    card_count: usize,
    categories: Vec<CategoryStats>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    id: String,
    name: String,
    card_count: usize,
}

fn get_stats(dataset: &Dataset) -> Stats {
    Stats {
        category_count: dataset.categories().len(),
        card_count: dataset.card_count(),
        categories: dataset
            .categories()
            .iter()
            .map(|category| CategoryStats {
                id: category.id().to_string(),
                name: category.name().to_string(),
                card_count: category.flashcards().len(),
            })
            .collect(),
    }
}
