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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::dataset::Dataset;
use crate::media::load::MediaLoader;
use crate::viewer::Session;

#[derive(Clone)]
pub struct ServerState {
    pub dataset: Arc<Dataset>,
    /// `None` when the dataset has no directory to serve files from.
    pub media: Option<MediaLoader>,
    pub mutable: Arc<Mutex<MutableState>>,
}

pub struct MutableState {
    pub session: Session,
}

impl ServerState {
    pub fn new(dataset: Dataset) -> Self {
        let media = dataset
            .directory()
            .map(|dir| MediaLoader::new(dir.to_path_buf()));
        let session = Session::new(&dataset);
        Self {
            dataset: Arc::new(dataset),
            media,
            mutable: Arc::new(Mutex::new(MutableState { session })),
        }
    }

    /// Lock the mutable state. The state is plain data, so a panic in
    /// another handler cannot leave it half-updated, and a poisoned lock is
    /// recovered.
    pub fn lock(&self) -> MutexGuard<'_, MutableState> {
        self.mutable.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
