use cipherforge::scorer::loader::{
    load_dictionary, load_dictionary_from_path, load_frequency_table,
    load_frequency_table_from_path,
};
use cipherforge::scorer::ReferenceData;
use std::fs::File;
use std::io::{Cursor, Write};
use tempfile::TempDir;

#[test]
fn test_frequency_csv_with_header_and_junk() {
    let csv = "ngram,frequency\n\
               th, 3.88\n\
               he,3.68\n\
               # comment\n\
               t1,9.0\n\
               abc,1.0\n\
               in,-2\n\
               an,oops\n\
               er\n";
    let table = load_frequency_table(Cursor::new(csv), 2).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("TH"), Some(3.88));
    assert_eq!(table.get("he"), Some(3.68));
    assert_eq!(table.entries()[0].0, "TH");
}

#[test]
fn test_dictionary_lowercases_and_skips_comments() {
    let list = "The\n  Quick \n\n# not a word\nfox\n";
    let dict = load_dictionary(Cursor::new(list)).unwrap();
    assert_eq!(dict.len(), 3);
    assert!(dict.contains("the"));
    assert!(dict.contains("quick"));
    assert!(!dict.contains("# not a word"));
}

#[test]
fn test_reference_data_from_disk() {
    let dir = TempDir::new().unwrap();
    let uni = dir.path().join("uni.csv");
    let words = dir.path().join("words.txt");

    let mut f = File::create(&uni).unwrap();
    writeln!(f, "T,20.0").unwrap();
    writeln!(f, "E,12.0").unwrap();
    let mut f = File::create(&words).unwrap();
    writeln!(f, "zebra").unwrap();

    let data = ReferenceData::load_from_disk(Some(&uni), None, None, Some(&words)).unwrap();
    assert_eq!(data.top_letter(), b'T');
    assert_eq!(data.dictionary.len(), 1);
    // Unset tables keep the embedded English defaults.
    assert_eq!(data.bigrams.len(), ReferenceData::english().bigrams.len());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.csv");
    assert!(load_frequency_table_from_path(&missing, 1).is_err());
    assert!(load_dictionary_from_path(&missing).is_err());
}
