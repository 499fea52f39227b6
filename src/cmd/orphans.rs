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

use std::path::Path;

use walkdir::WalkDir;

use crate::dataset::DATASET_FILE;
use crate::dataset::Dataset;
use crate::error::Fallible;
use crate::media::referenced_media_paths;

pub fn list_orphans(directory: Option<String>) -> Fallible<()> {
    let dataset = Dataset::open(directory)?;
    let Some(root) = dataset.directory() else {
        return Ok(());
    };
    for orphan in find_orphans(&dataset, root)? {
        println!("{orphan}");
    }
    Ok(())
}

/// Files under the dataset directory that no flashcard refers to, as sorted
/// dataset-relative paths.
fn find_orphans(dataset: &Dataset, root: &Path) -> Fallible<Vec<String>> {
    let referenced = referenced_media_paths(dataset);
    let mut orphans = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative: String = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if relative == DATASET_FILE || referenced.contains(&relative) {
            continue;
        }
        orphans.push(relative);
    }
    Ok(orphans)
}

#[cfg(test)]
mod tests {
    use std::fs::create_dir;
    use std::fs::write;

    use super::*;
    use crate::helper::create_tmp_dataset;

    const DATASET: &str = r#"
[[category]]
id = "animals"
name = "Animals"

[[category.flashcard]]
word = "Dog"
pronunciation = "/dɔːɡ/"
meaning = "A dog."
image = "images/dog.jpg"
audio = "https://example.com/dog.mp3"
"#;

    #[test]
    fn test_find_orphans() -> Fallible<()> {
        let dir = create_tmp_dataset(DATASET)?;
        create_dir(dir.join("images"))?;
        write(dir.join("images").join("dog.jpg"), "")?;
        write(dir.join("images").join("cat.jpg"), "")?;
        write(dir.join("notes.txt"), "")?;
        let dataset = Dataset::open(Some(dir.display().to_string()))?;
        let orphans = find_orphans(&dataset, &dir)?;
        assert_eq!(orphans, vec!["images/cat.jpg", "notes.txt"]);
        Ok(())
    }

    #[test]
    fn test_no_orphans() -> Fallible<()> {
        let dir = create_tmp_dataset(DATASET)?;
        let dataset = Dataset::open(Some(dir.display().to_string()))?;
        assert!(find_orphans(&dataset, &dir)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_non_existent_directory() {
        assert!(list_orphans(Some("./derpherp".to_string())).is_err());
    }
}
