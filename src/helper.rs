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

use std::path::PathBuf;

use tempfile::tempdir;

use crate::error::Fallible;

/// Create a temporary directory that outlives the call, and return its
/// canonical path.
pub fn create_tmp_directory() -> Fallible<PathBuf> {
    let dir: PathBuf = tempdir()?.keep();
    Ok(dir.canonicalize()?)
}

/// Create a temporary dataset directory containing the given
/// `categories.toml` contents.
pub fn create_tmp_dataset(toml: &str) -> Fallible<PathBuf> {
    let dir = create_tmp_directory()?;
    std::fs::write(dir.join("categories.toml"), toml)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tmp_directory() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        assert!(dir.exists());
        assert!(dir.is_absolute());
        Ok(())
    }

    #[test]
    fn test_create_tmp_dataset() -> Fallible<()> {
        let dir = create_tmp_dataset("")?;
        assert!(dir.join("categories.toml").exists());
        Ok(())
    }
}
