#![warn(missing_docs)]

//! Word hunt grid solver
//!
//! Exhaustive depth first search from every grid cell. A path may not
//! revisit a cell, adjacency is 8-directional, and only dictionary words of
//! 3 or more letters count. Prefix membership prunes branches that cannot
//! reach any word; for stems past the prefix length the live-candidate test
//! scans the stem's 3 letter bucket instead.
//!
//! Raw results contain one hit per traversal that spelled a word. Callers
//! pass them through [`SearchResults::finalize`] to drop duplicate paths and
//! derive the per-word views.

use dictionary::{Dictionary, MIN_WORD_LEN, PREFIX_LEN};

mod grid;
mod results;

pub use grid::{Coord, Grid, GridError};
pub use results::{PathHit, SearchResults};

/// Arguments for the grid solver
pub struct SolverArgs<'a> {
    /// Grid to search
    pub grid: &'a Grid,
    /// Dictionary to use
    pub dictionary: &'a Dictionary,
    /// Debug output
    pub debug: bool,
}

/// Mutable state for one traversal, rooted at a single start cell. The
/// visited flags live here rather than on the grid cells, so the grid stays
/// immutable and traversals from different start cells are independent.
struct Traversal {
    word: String,
    path: Vec<usize>,
    visited: Vec<bool>,
}

impl Traversal {
    fn start(grid: &Grid, cell: usize) -> Self {
        let mut visited = vec![false; grid.cell_count()];
        visited[cell] = true;

        Self {
            word: String::from(grid.letter(cell)),
            path: vec![cell],
            visited,
        }
    }

    fn push(&mut self, grid: &Grid, cell: usize) {
        self.word.push(grid.letter(cell));
        self.path.push(cell);
        self.visited[cell] = true;
    }

    fn pop(&mut self) {
        self.word.pop();

        if let Some(cell) = self.path.pop() {
            self.visited[cell] = false;
        }
    }

    /// Value snapshot of the current path, independent of later mutation
    fn snapshot(&self, grid: &Grid) -> PathHit {
        PathHit {
            word: self.word.clone(),
            path: self.path.iter().map(|&cell| grid.coord(cell)).collect(),
        }
    }
}

/// Finds every dictionary word spelled by a non-repeating path of adjacent
/// cells, starting from each cell in turn. Returns raw results - callers
/// finalize them to deduplicate and derive the word views.
pub fn find_words(args: SolverArgs) -> SearchResults {
    let mut results = SearchResults::new();

    for start in 0..args.grid.cell_count() {
        let mut traversal = Traversal::start(args.grid, start);

        find_words_rec(&args, start, &mut traversal, &mut results);
    }

    results
}

fn find_words_rec(
    args: &SolverArgs,
    cell: usize,
    traversal: &mut Traversal,
    results: &mut SearchResults,
) {
    // Any node can complete a word, whether or not it can be extended
    if traversal.word.len() >= MIN_WORD_LEN && args.dictionary.contains(&traversal.word) {
        if args.debug {
            debug_hit(&traversal.word, traversal.path.len());
        }

        results.add(traversal.snapshot(args.grid));
    }

    // A path cannot be longer than the number of cells on the grid
    if traversal.word.len() == args.grid.cell_count() {
        return;
    }

    // Short stems must be a prefix of some word. The stem is identical for
    // every candidate tried from this node, so one check abandons them all.
    if traversal.word.len() <= PREFIX_LEN && !args.dictionary.is_prefix(&traversal.word) {
        return;
    }

    for &next in args.grid.neighbours(cell) {
        if traversal.visited[next] {
            continue;
        }

        traversal.word.push(args.grid.letter(next));

        // Stems within the prefix length are checked on entry to the child;
        // longer stems must still lead to at least one bucket word
        let viable = traversal.word.len() <= PREFIX_LEN
            || args.dictionary.has_extension(&traversal.word);

        traversal.word.pop();

        if viable {
            traversal.push(args.grid, next);
            find_words_rec(args, next, traversal, results);
            traversal.pop();
        }
    }
}

#[cold]
fn debug_hit(word: &str, depth: usize) {
    println!("{:indent$}{}", "", word, indent = depth);
}
