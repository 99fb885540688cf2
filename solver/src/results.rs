//! Search results and aggregation
//!
//! The search records a [`PathHit`] for every traversal that spells a
//! dictionary word. The same word can be spelled by several different
//! traversals, so `words_by_character` usually holds fewer entries than
//! `words_found`. [`SearchResults::finalize`] removes duplicate paths and
//! derives the per-word views handed to the caller.

use std::collections::{BTreeSet, HashSet};

use crate::grid::Coord;

/// A snapshot of one successful traversal: the word it spells and the
/// ordered cell coordinates that spell it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathHit {
    /// The dictionary word spelled by the path
    pub word: String,
    /// The (column, row) coordinates traversed, in order
    pub path: Vec<Coord>,
}

/// Holds all relevant data from one grid search
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResults {
    words_found: Vec<PathHit>,
    longest_word: Option<PathHit>,
    words_by_character: BTreeSet<String>,
    words_by_coordinates: Vec<Vec<Coord>>,
}

impl SearchResults {
    /// Creates an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a hit in discovery order, tracking the longest word.
    /// Only a strictly longer hit replaces the current longest, so ties
    /// resolve to the first one found.
    pub(crate) fn add(&mut self, hit: PathHit) {
        let longer = match &self.longest_word {
            Some(longest) => hit.path.len() > longest.path.len(),
            None => true,
        };

        if longer {
            self.longest_word = Some(hit.clone());
        }

        self.words_found.push(hit);
    }

    /// Finalizes the raw results: removes hits duplicating an earlier hit's
    /// coordinate sequence, derives the by-character and by-coordinate views
    /// and revalidates the longest word against the deduplicated set.
    /// Idempotent - finalizing a finalized result changes nothing.
    pub fn finalize(mut self) -> Self {
        let mut seen: HashSet<Vec<Coord>> = HashSet::new();

        self.words_found
            .retain(|hit| seen.insert(hit.path.clone()));

        self.words_by_character = self
            .words_found
            .iter()
            .map(|hit| hit.word.clone())
            .collect();

        self.words_by_coordinates = self
            .words_found
            .iter()
            .map(|hit| hit.path.clone())
            .collect();

        // Strictly-greater scan keeps the earliest of any tied hits
        self.longest_word = self
            .words_found
            .iter()
            .fold(None::<&PathHit>, |longest, hit| match longest {
                Some(cur) if hit.path.len() <= cur.path.len() => Some(cur),
                _ => Some(hit),
            })
            .cloned();

        self
    }

    /// Returns the recorded hits, one per distinct coordinate path after
    /// finalization
    pub fn words_found(&self) -> &[PathHit] {
        &self.words_found
    }

    /// Returns the longest word found, if any
    pub fn longest_word(&self) -> Option<&PathHit> {
        self.longest_word.as_ref()
    }

    /// Returns the distinct words found, in alphabetical order
    pub fn words_by_character(&self) -> &BTreeSet<String> {
        &self.words_by_character
    }

    /// Returns the coordinate path of each hit, aligned with
    /// [`words_found`](Self::words_found)
    pub fn words_by_coordinates(&self) -> &[Vec<Coord>] {
        &self.words_by_coordinates
    }

    /// Looks up the first recorded path spelling the given word
    pub fn path_for(&self, word: &str) -> Option<&[Coord]> {
        self.words_found
            .iter()
            .find(|hit| hit.word == word)
            .map(|hit| hit.path.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(word: &str, path: &[Coord]) -> PathHit {
        PathHit {
            word: word.to_string(),
            path: path.to_vec(),
        }
    }

    #[test]
    fn duplicate_paths_removed_keeping_first() {
        let mut results = SearchResults::new();

        results.add(hit("cat", &[(0, 0), (1, 0), (1, 1)]));
        results.add(hit("cat", &[(0, 0), (1, 0), (1, 1)]));
        results.add(hit("cat", &[(0, 0), (0, 1), (1, 1)]));

        let results = results.finalize();

        assert_eq!(results.words_found().len(), 2);
        assert_eq!(results.words_found()[0].path, vec![(0, 0), (1, 0), (1, 1)]);
        assert_eq!(results.words_found()[1].path, vec![(0, 0), (0, 1), (1, 1)]);

        // Two paths, one distinct word
        assert_eq!(results.words_by_character().len(), 1);
        assert_eq!(results.words_by_coordinates().len(), 2);
    }

    #[test]
    fn finalize_idempotent() {
        let mut results = SearchResults::new();

        results.add(hit("coat", &[(0, 0), (0, 1), (1, 0), (1, 1)]));
        results.add(hit("cat", &[(0, 0), (1, 0), (1, 1)]));
        results.add(hit("cat", &[(0, 0), (1, 0), (1, 1)]));

        let once = results.finalize();
        let twice = once.clone().finalize();

        assert_eq!(once, twice);
    }

    #[test]
    fn longest_word_strictly_greater() {
        let mut results = SearchResults::new();

        results.add(hit("cot", &[(0, 0), (0, 1), (1, 1)]));
        results.add(hit("tac", &[(1, 1), (1, 0), (0, 0)]));
        results.add(hit("coat", &[(0, 0), (0, 1), (1, 0), (1, 1)]));
        results.add(hit("taco", &[(1, 1), (1, 0), (0, 0), (0, 1)]));

        // First of the two 4-letter words wins
        assert_eq!(results.longest_word().unwrap().word, "coat");

        let results = results.finalize();

        assert_eq!(results.longest_word().unwrap().word, "coat");
    }

    #[test]
    fn longest_word_revalidated_after_dedup() {
        let mut results = SearchResults::new();

        results.add(hit("coat", &[(0, 0), (0, 1), (1, 0), (1, 1)]));
        results.add(hit("coat", &[(0, 0), (0, 1), (1, 0), (1, 1)]));

        let results = results.finalize();

        assert_eq!(results.words_found().len(), 1);
        assert_eq!(results.longest_word().unwrap().word, "coat");
    }

    #[test]
    fn empty_results() {
        let results = SearchResults::new().finalize();

        assert!(results.words_found().is_empty());
        assert!(results.longest_word().is_none());
        assert!(results.words_by_character().is_empty());
        assert!(results.words_by_coordinates().is_empty());
    }

    #[test]
    fn path_lookup() {
        let mut results = SearchResults::new();

        results.add(hit("cat", &[(0, 0), (1, 0), (1, 1)]));

        let results = results.finalize();

        assert_eq!(
            results.path_for("cat"),
            Some(&[(0, 0), (1, 0), (1, 1)][..])
        );
        assert_eq!(results.path_for("dog"), None);
    }
}
