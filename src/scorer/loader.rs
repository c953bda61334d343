use super::dictionary::Dictionary;
use super::tables::FrequencyTable;
use crate::error::CfResult;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Reads `ngram,frequency` rows into a table for n-grams of length `n`.
///
/// A header row is optional. Rows with the wrong n-gram length, non-letters,
/// or a frequency that is not a finite non-negative number are skipped.
pub fn load_frequency_table<R: Read>(reader: R, n: usize) -> CfResult<FrequencyTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut table = FrequencyTable::new(n);
    let mut skipped = 0;
    let mut rows = 0;

    for result in rdr.records() {
        let rec = result?;
        rows += 1;
        if rec.len() < 2 {
            skipped += 1;
            continue;
        }
        let freq: f64 = match rec[1].parse() {
            Ok(v) => v,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        if !table.insert(&rec[0], freq) {
            skipped += 1;
        }
    }

    debug!(
        "   -> Scanned {} rows. Loaded {} {}-grams ({} skipped).",
        rows,
        table.len(),
        n,
        skipped
    );

    Ok(table)
}

pub fn load_frequency_table_from_path<P: AsRef<Path>>(path: P, n: usize) -> CfResult<FrequencyTable> {
    debug!("   Loading {}-grams from: {}", n, path.as_ref().display());
    let file = File::open(path)?;
    load_frequency_table(file, n)
}

/// Reads a word list: one word per line, `#` comments and blank lines ignored.
pub fn load_dictionary<R: Read>(reader: R) -> CfResult<Dictionary> {
    let mut dict = Dictionary::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        dict.insert(word);
    }
    debug!("   -> Loaded {} dictionary words.", dict.len());
    Ok(dict)
}

pub fn load_dictionary_from_path<P: AsRef<Path>>(path: P) -> CfResult<Dictionary> {
    debug!("   Loading dictionary from: {}", path.as_ref().display());
    let file = File::open(path)?;
    load_dictionary(file)
}
