use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};

use crate::cli::Cli;

/// Read one word per line, trimming blanks and skipping empty lines.
///
/// # Errors
/// Returns an error if the reader fails.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.context("Erreur de lecture")?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Collect the words to encode: positional args, then `--file`, then stdin.
///
/// # Errors
/// Returns an error if the input file or stdin cannot be read.
pub fn load_words(cli: &Cli) -> Result<Vec<String>> {
    if !cli.words.is_empty() {
        return Ok(cli.words.clone());
    }
    if let Some(ref path) = cli.file {
        let file =
            File::open(path).with_context(|| format!("Impossible de lire {}", path.display()))?;
        let words = read_words(BufReader::new(file))?;
        log::info!("{} mots lus depuis {}", words.len(), path.display());
        return Ok(words);
    }
    log::debug!("Lecture des mots sur l'entrée standard");
    read_words(io::stdin().lock())
}
