use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use clap::Parser;
use dictionary::Dictionary;
use solveapp::Game;

mod results;

use results::print_results;

/// Word hunt grid solver
#[derive(Parser, Default)]
#[clap(author, version, about)]
struct Args {
    /// Word list file
    #[clap(
        short = 'd',
        long = "dictionary",
        default_value_t = default_dict().into(),
    )]
    dictionary_file: String,

    /// Grid file with one row of letters per line (reads stdin if omitted)
    grid_file: Option<String>,

    /// Print the coordinate path of every word found
    #[clap(short = 'p', long = "paths")]
    paths: bool,

    /// Verbose output
    #[clap(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Check we have a dictionary
    if args.dictionary_file.is_empty() {
        eprintln!("No dictionary file given and none of the default dictionaries could be found.");
        eprintln!("Default dictionaries are:");

        for d in DICTS {
            eprintln!("  {d}");
        }

        std::process::exit(1);
    }

    // Load words
    let dictionary = Dictionary::new_from_file(&args.dictionary_file, args.verbose)?;

    // Read the grid rows
    let rows = match &args.grid_file {
        Some(file) => read_grid(&mut BufReader::new(File::open(file)?))?,
        None => read_grid(&mut io::stdin().lock())?,
    };

    // Solve
    let mut game = Game::new(dictionary);
    let results = game.find_words(&rows)?;

    print_results(results, args.paths);

    Ok(())
}

/// Reads grid rows from a reader, one row of letters per line.
/// Lines are trimmed and lower cased; blank lines are skipped. Shape and
/// letter validation is left to the grid itself.
fn read_grid(bufread: &mut dyn BufRead) -> io::Result<Vec<Vec<char>>> {
    let mut rows = Vec::new();

    for line in bufread.lines() {
        let line = line?;
        let row = line.trim();

        if row.is_empty() {
            continue;
        }

        rows.push(row.to_lowercase().chars().collect());
    }

    Ok(rows)
}

const DICTS: [&str; 3] = [
    "words.txt",
    "words.txt.gz",
    "/etc/dictionaries-common/words",
];

fn default_dict() -> &'static str {
    DICTS
        .iter()
        .find(|d| dict_valid(d).is_some())
        .unwrap_or(&"")
}

fn dict_valid(dict: &str) -> Option<String> {
    if Path::new(dict).is_file() {
        Some(dict.into())
    } else {
        None
    }
}
