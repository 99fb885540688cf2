#![warn(missing_docs)]

//! Game session for the grid word search
//!
//! A [`Game`] owns the dictionary and the finalized results of every search
//! run during the session. It is the seam between front ends (which collect
//! and normalize the grid) and the solver (which does the work).

use std::collections::BTreeSet;

use dictionary::Dictionary;
use solver::{find_words, Grid, GridError, SearchResults, SolverArgs};

/// Holds the dictionary and the running history of search results
pub struct Game {
    /// Dictionary
    dictionary: Dictionary,
    /// Finalized results of each search, in the order they were run
    searches: Vec<SearchResults>,
}

impl Game {
    /// Creates a game session around a loaded dictionary
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            searches: Vec::new(),
        }
    }

    /// Solves one grid. The matrix is row-major and must be square with
    /// lower case letters only; case normalization is the caller's job.
    /// The finalized results are appended to the session history and
    /// returned.
    pub fn find_words(&mut self, rows: &[Vec<char>]) -> Result<&SearchResults, GridError> {
        let grid = Grid::new(rows)?;

        let results = find_words(SolverArgs {
            grid: &grid,
            dictionary: &self.dictionary,
            debug: false,
        })
        .finalize();

        let idx = self.searches.len();
        self.searches.push(results);

        Ok(&self.searches[idx])
    }

    /// Returns every search run this session
    pub fn searches(&self) -> &[SearchResults] {
        &self.searches
    }

    /// Returns the number of searches run this session
    pub fn search_count(&self) -> usize {
        self.searches.len()
    }

    /// Returns the distinct words found across every search this session
    pub fn found_words(&self) -> BTreeSet<&str> {
        self.searches
            .iter()
            .flat_map(|results| results.words_by_character())
            .map(String::as_str)
            .collect()
    }

    /// Returns a reference to the dictionary
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(strs: &[&str]) -> Vec<Vec<char>> {
        strs.iter().map(|s| s.chars().collect()).collect()
    }

    fn game() -> Game {
        let dictionary =
            Dictionary::new_from_string("cat\ncoat\ntaco\noat\ndog", false).unwrap();

        Game::new(dictionary)
    }

    #[test]
    fn search_appends_to_history() {
        let mut game = game();

        let words = game
            .find_words(&rows(&["ca", "ot"]))
            .unwrap()
            .words_by_character()
            .clone();

        assert!(words.contains("cat"));
        assert_eq!(game.search_count(), 1);

        game.find_words(&rows(&["do", "gx"])).unwrap();

        assert_eq!(game.search_count(), 2);
        assert!(game.searches()[1].words_by_character().contains("dog"));
    }

    #[test]
    fn found_words_union_across_searches() {
        let mut game = game();

        game.find_words(&rows(&["ca", "ot"])).unwrap();
        game.find_words(&rows(&["do", "gx"])).unwrap();

        let all = game.found_words();

        assert!(all.contains("cat"));
        assert!(all.contains("dog"));
    }

    #[test]
    fn bad_grid_rejected_without_polluting_history() {
        let mut game = game();

        assert!(game.find_words(&rows(&["ab", "cde"])).is_err());
        assert_eq!(game.search_count(), 0);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let mut game = game();

        let results = game.find_words(&rows(&["qx", "zj"])).unwrap();

        assert!(results.words_found().is_empty());
        assert_eq!(game.search_count(), 1);
    }
}
