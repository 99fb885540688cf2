#![warn(missing_docs)]

//! Word list loading and prefix indexing
//!
//! Words shorter than [`MIN_WORD_LEN`] letters never count in the game, so
//! they are skipped at load time. Every accepted word registers its 1, 2 and
//! 3 letter prefixes, and the word itself is filed in a bucket keyed by its
//! first [`PREFIX_LEN`] letters. The search uses the prefix set to abandon
//! hopeless branches and the buckets to test whole words and longer stems.

use std::collections::{HashMap, HashSet};
use std::fs::{read_link, symlink_metadata, File};
use std::io::prelude::*;
use std::io::{self, BufReader};
use std::path::PathBuf;

use flate2::bufread::GzDecoder;
use numformat::NumFormat;

/// Shortest word the game accepts
pub const MIN_WORD_LEN: usize = 3;

/// Length of the prefix used to bucket words
pub const PREFIX_LEN: usize = 3;

/// Dictionary structure
pub struct Dictionary {
    words: usize,
    prefixes: HashSet<String>,
    buckets: HashMap<String, HashSet<String>>,
}

impl Dictionary {
    /// Loads a dictionary from a file
    pub fn new_from_file(file: &str, verbose: bool) -> io::Result<Self> {
        let path_buf = PathBuf::from(file);

        if verbose {
            println!("Loading words from file {}", Self::file_spec(&path_buf)?);
        }

        // Create buf reader for the file
        Self::new_from_bufread(&mut BufReader::new(File::open(&path_buf)?), verbose)
    }

    /// Loads a dictionary from a string
    #[allow(dead_code)]
    pub fn new_from_string(string: &str, verbose: bool) -> io::Result<Self> {
        if verbose {
            println!("Loading words from string '{string}'");
        }

        Self::new_from_bufread(&mut BufReader::new(string.as_bytes()), verbose)
    }

    /// Loads a dictionary from a byte array
    #[allow(dead_code)]
    pub fn new_from_bytes(bytes: &[u8], verbose: bool) -> io::Result<Self> {
        if verbose {
            println!("Loading words from byte array (length {})", bytes.len());
        }

        Self::new_from_bufread(&mut BufReader::new(bytes), verbose)
    }

    /// Loads a dictionary from an entity implementing BufRead
    /// Handles gzip compressed buffers
    pub fn new_from_bufread(bufread: &mut dyn BufRead, verbose: bool) -> io::Result<Self> {
        // Fill the bufreader buffer
        let buf = bufread.fill_buf()?;

        // Check for gzip signature
        if buf.len() >= 2 && buf[0] == 0x1f && buf[1] == 0x8b {
            // gzip compressed file
            if verbose {
                println!("Decompressing word list");
            }

            Self::new_from_bufread_internal(&mut BufReader::new(GzDecoder::new(bufread)), verbose)
        } else {
            Self::new_from_bufread_internal(bufread, verbose)
        }
    }

    /// Loads a dictionary from an entity implementing BufRead
    fn new_from_bufread_internal(bufread: &mut dyn BufRead, verbose: bool) -> io::Result<Self> {
        let mut prefixes = HashSet::new();
        let mut buckets: HashMap<String, HashSet<String>> = HashMap::new();

        let mut lines: usize = 0;
        let mut words: usize = 0;
        let mut too_short: usize = 0;
        let mut wrong_case: usize = 0;

        // Iterate file lines
        for line in bufread.lines() {
            let line = line?;
            let word = line.trim();

            lines += 1;

            // Words below the minimum length can never be found
            if word.len() < MIN_WORD_LEN {
                too_short += 1;
                continue;
            }

            // Make sure word consists of all lower case ascii characters
            if !Self::is_ascii_lower(word) {
                wrong_case += 1;
                continue;
            }

            // Add this word to the index
            words += 1;

            for len in 1..=PREFIX_LEN {
                if !prefixes.contains(&word[..len]) {
                    prefixes.insert(word[..len].to_string());
                }
            }

            buckets
                .entry(word[..PREFIX_LEN].to_string())
                .or_default()
                .insert(word.to_string());
        }

        let dictionary = Self {
            words,
            prefixes,
            buckets,
        };

        if verbose {
            println!(
                "{} total lines, ({} too short, {} not all lower case)",
                lines.num_format(),
                too_short.num_format(),
                wrong_case.num_format()
            );

            println!(
                "Dictionary words {}, prefixes {}, prefix buckets {}",
                dictionary.word_count().num_format(),
                dictionary.prefix_count().num_format(),
                dictionary.bucket_count().num_format(),
            );
        }

        Ok(dictionary)
    }

    /// Returns the number of words stored in the dictionary
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Returns the number of distinct 1-3 letter prefixes
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    /// Returns the number of 3 letter prefix buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Tests whether a 1-3 letter string starts at least one dictionary word
    #[inline]
    pub fn is_prefix(&self, s: &str) -> bool {
        self.prefixes.contains(s)
    }

    /// Tests whether a string is a dictionary word
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        if word.len() < MIN_WORD_LEN {
            return false;
        }

        match self.buckets.get(&word[..PREFIX_LEN]) {
            Some(bucket) => bucket.contains(word),
            None => false,
        }
    }

    /// Tests whether any dictionary word extends the given stem.
    /// Stems no longer than the bucket prefix fall back to the prefix set.
    pub fn has_extension(&self, stem: &str) -> bool {
        if stem.len() <= PREFIX_LEN {
            return self.is_prefix(stem);
        }

        match self.buckets.get(&stem[..PREFIX_LEN]) {
            Some(bucket) => bucket
                .iter()
                .any(|word| word.len() >= stem.len() && word.starts_with(stem)),
            None => false,
        }
    }

    /// Returns the words sharing a 3 letter prefix, if any
    pub fn bucket(&self, prefix: &str) -> Option<&HashSet<String>> {
        self.buckets.get(prefix)
    }

    #[inline]
    fn is_ascii_lower(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_lowercase())
    }

    fn file_spec(path: &PathBuf) -> io::Result<String> {
        let meta = symlink_metadata(path)?;

        if meta.is_symlink() {
            let target = read_link(path)?;

            Ok(format!(
                "{} -> {}",
                path.to_string_lossy(),
                Self::file_spec(&target)?
            ))
        } else {
            Ok(format!("{}", path.to_string_lossy()))
        }
    }
}
