use std::cmp::max;

use numformat::NumFormat;
use solver::{Coord, SearchResults};
#[cfg(any(unix, windows))]
use terminal_size::{terminal_size, Width};

/// Prints the finalized results of one grid search
pub fn print_results(results: &SearchResults, paths: bool) {
    let words = results.words_by_character();

    println!(
        "{} {} found",
        words.len().num_format(),
        if words.len() == 1 { "word" } else { "words" }
    );

    if words.is_empty() {
        return;
    }

    // Column layout sized to the longest word and the terminal
    let word_width = words.iter().map(|word| word.len()).max().unwrap_or(0);
    let term_width = terminal_width();

    let cols = if term_width > 0 {
        max(1, term_width as usize / (word_width + 2))
    } else {
        1
    };

    let words = words
        .iter()
        .map(|word| format!("{word:word_width$}"))
        .collect::<Vec<_>>();

    for line in words.chunks(cols) {
        println!("{}", line.join("  ").trim_end());
    }

    if let Some(longest) = results.longest_word() {
        println!(
            "Longest word: {} {}",
            longest.word,
            format_path(&longest.path)
        );
    }

    if paths {
        println!("Paths:");

        for hit in results.words_found() {
            println!("  {} {}", hit.word, format_path(&hit.path));
        }
    }
}

/// Formats a coordinate path as (col,row) pairs
fn format_path(path: &[Coord]) -> String {
    let coords = path
        .iter()
        .map(|(col, row)| format!("({col},{row})"))
        .collect::<Vec<_>>();

    coords.join(" ")
}

#[cfg(any(unix, windows))]
fn terminal_width() -> u16 {
    if let Some((Width(w), _)) = terminal_size() {
        w
    } else {
        0
    }
}

#[cfg(not(any(unix, windows)))]
fn terminal_width() -> u16 {
    0
}
