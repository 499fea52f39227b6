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

use crate::dataset::Dataset;
use crate::error::Fallible;
use crate::media::validate_media_files;

pub fn check_dataset(directory: Option<String>) -> Fallible<()> {
    let dataset = Dataset::open(directory)?;
    if let Some(dir) = dataset.directory() {
        validate_media_files(&dataset, dir)?;
    }
    println!("ok");
    Ok(())
}
