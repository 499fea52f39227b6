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

//! Viewer state: which category is selected, which card is shown, and which
//! face of it is up.
//!
//! All transitions are pure functions of the current state and the length
//! of the active flashcard list. An empty list has no current card, and
//! every transition on it is a no-op.

use crate::dataset::Dataset;
use crate::types::flashcard::Flashcard;

/// Position and orientation within one flashcard list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewer {
    index: usize,
    flipped: bool,
}

/// How far through the list the viewer is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// One-based position of the current card.
    pub position: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        (self.position as f64 / self.total as f64) * 100.0
    }
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Move to the next card, wrapping from the last to the first.
    pub fn advance(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
        self.flipped = false;
    }

    /// Move to the previous card, wrapping from the first to the last.
    pub fn retreat(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + len - 1) % len;
        self.flipped = false;
    }

    pub fn flip(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.flipped = !self.flipped;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn current<'a>(&self, cards: &'a [Flashcard]) -> Option<&'a Flashcard> {
        cards.get(self.index)
    }

    pub fn progress(&self, len: usize) -> Option<Progress> {
        if self.index < len {
            Some(Progress {
                position: self.index + 1,
                total: len,
            })
        } else {
            None
        }
    }
}

/// A category selection together with the viewer over its cards.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    selected: String,
    viewer: Viewer,
}

impl Session {
    /// Start on the first category of the dataset.
    pub fn new(dataset: &Dataset) -> Self {
        let selected = dataset
            .first()
            .map(|category| category.id().to_string())
            .unwrap_or_default();
        Self {
            selected,
            viewer: Viewer::new(),
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn viewer(&self) -> Viewer {
        self.viewer
    }

    /// Change the selected category. Switching to a different id swaps the
    /// flashcard list, so the viewer starts over.
    pub fn select(&mut self, id: &str) {
        if self.selected != id {
            self.selected = id.to_string();
            self.viewer.reset();
        }
    }

    /// The active flashcard list. An unknown selection yields no cards.
    pub fn cards<'a>(&self, dataset: &'a Dataset) -> &'a [Flashcard] {
        match dataset.find(&self.selected) {
            Some(category) => category.flashcards(),
            None => &[],
        }
    }

    pub fn current<'a>(&self, dataset: &'a Dataset) -> Option<&'a Flashcard> {
        self.viewer.current(self.cards(dataset))
    }

    pub fn advance(&mut self, dataset: &Dataset) {
        let len = self.cards(dataset).len();
        self.viewer.advance(len);
    }

    pub fn retreat(&mut self, dataset: &Dataset) {
        let len = self.cards(dataset).len();
        self.viewer.retreat(len);
    }

    pub fn flip(&mut self, dataset: &Dataset) {
        let len = self.cards(dataset).len();
        self.viewer.flip(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::category::Category;

    fn card(word: &str) -> Flashcard {
        Flashcard::new(
            word,
            format!("/{word}/"),
            format!("Meaning of {word}."),
            format!("{word}.jpg"),
            format!("{word}.mp3"),
        )
    }

    fn dataset() -> Dataset {
        Dataset::from_categories(vec![
            Category::new("a", "A", vec![card("Dog"), card("Cat"), card("Bird")]),
            Category::new("b", "B", vec![card("Apple"), card("Banana")]),
            Category::new("empty", "Empty", vec![]),
        ])
    }

    #[test]
    fn test_new_viewer() {
        let viewer = Viewer::new();
        assert_eq!(viewer.index(), 0);
        assert!(!viewer.is_flipped());
    }

    /// Advancing N times over a list of length N comes back to the start.
    #[test]
    fn test_advance_cycles() {
        for len in 1..=7 {
            for start in 0..len {
                let mut viewer = Viewer::new();
                for _ in 0..start {
                    viewer.advance(len);
                }
                assert_eq!(viewer.index(), start);
                for _ in 0..len {
                    viewer.advance(len);
                }
                assert_eq!(viewer.index(), start);
            }
        }
    }

    #[test]
    fn test_retreat_wraps() {
        for len in 1..=7 {
            let mut viewer = Viewer::new();
            viewer.retreat(len);
            assert_eq!(viewer.index(), len - 1);
        }
    }

    #[test]
    fn test_retreat_undoes_advance() {
        let mut viewer = Viewer::new();
        viewer.advance(4);
        viewer.advance(4);
        viewer.retreat(4);
        assert_eq!(viewer.index(), 1);
    }

    #[test]
    fn test_double_flip() {
        let mut viewer = Viewer::new();
        viewer.flip(3);
        assert!(viewer.is_flipped());
        viewer.flip(3);
        assert!(!viewer.is_flipped());
        assert_eq!(viewer.index(), 0);
    }

    #[test]
    fn test_navigation_unflips() {
        let mut viewer = Viewer::new();
        viewer.flip(3);
        viewer.advance(3);
        assert!(!viewer.is_flipped());
        viewer.flip(3);
        viewer.retreat(3);
        assert!(!viewer.is_flipped());
    }

    #[test]
    fn test_empty_list_is_inert() {
        let mut viewer = Viewer::new();
        viewer.advance(0);
        viewer.retreat(0);
        viewer.flip(0);
        assert_eq!(viewer, Viewer::new());
        assert_eq!(viewer.progress(0), None);
        assert_eq!(viewer.current(&[]), None);
    }

    #[test]
    fn test_progress() {
        let mut viewer = Viewer::new();
        viewer.advance(4);
        let progress = viewer.progress(4).unwrap();
        assert_eq!(
            progress,
            Progress {
                position: 2,
                total: 4
            }
        );
        assert_eq!(progress.percent(), 50.0);
    }

    #[test]
    fn test_session_starts_on_first_category() {
        let dataset = dataset();
        let session = Session::new(&dataset);
        assert_eq!(session.selected(), "a");
        assert_eq!(session.current(&dataset).unwrap().word(), "Dog");
    }

    /// Next, Next, Flip, Next over [Dog, Cat, Bird].
    #[test]
    fn test_scenario() {
        let dataset = dataset();
        let mut session = Session::new(&dataset);
        session.advance(&dataset);
        session.advance(&dataset);
        assert_eq!(session.viewer().index(), 2);
        assert_eq!(session.current(&dataset).unwrap().word(), "Bird");
        assert!(!session.viewer().is_flipped());
        session.flip(&dataset);
        assert!(session.viewer().is_flipped());
        assert_eq!(
            session.current(&dataset).unwrap().meaning(),
            "Meaning of Bird."
        );
        session.advance(&dataset);
        assert_eq!(session.viewer().index(), 0);
        assert_eq!(session.current(&dataset).unwrap().word(), "Dog");
        assert!(!session.viewer().is_flipped());
    }

    #[test]
    fn test_select_resets() {
        let dataset = dataset();
        let mut session = Session::new(&dataset);
        session.advance(&dataset);
        session.flip(&dataset);
        session.select("b");
        assert_eq!(session.viewer(), Viewer::new());
        assert_eq!(session.current(&dataset).unwrap().word(), "Apple");
    }

    #[test]
    fn test_reselect_keeps_position() {
        let dataset = dataset();
        let mut session = Session::new(&dataset);
        session.advance(&dataset);
        session.flip(&dataset);
        session.select("a");
        assert_eq!(session.viewer().index(), 1);
        assert!(session.viewer().is_flipped());
    }

    #[test]
    fn test_select_unknown_is_empty() {
        let dataset = dataset();
        let mut session = Session::new(&dataset);
        session.select("nope");
        assert!(session.cards(&dataset).is_empty());
        assert!(session.current(&dataset).is_none());
        session.advance(&dataset);
        session.retreat(&dataset);
        session.flip(&dataset);
        assert_eq!(session.viewer(), Viewer::new());
    }

    #[test]
    fn test_select_empty_category() {
        let dataset = dataset();
        let mut session = Session::new(&dataset);
        session.select("empty");
        session.flip(&dataset);
        assert!(!session.viewer().is_flipped());
        assert!(session.current(&dataset).is_none());
    }
}
