//! Built-in English statistics, used when no reference files are supplied.

use super::dictionary::Dictionary;
use super::tables::FrequencyTable;

#[rustfmt::skip]
pub const ENGLISH_UNIGRAMS: &[(&str, f64)] = &[
    ("E", 12.02), ("T", 9.10), ("A", 8.12), ("O", 7.68), ("I", 7.31),
    ("N", 6.95), ("S", 6.28), ("R", 6.02), ("H", 5.92), ("D", 4.32),
    ("L", 3.98), ("U", 2.88), ("C", 2.71), ("M", 2.61), ("F", 2.30),
    ("Y", 2.11), ("W", 2.09), ("G", 2.03), ("P", 1.82), ("B", 1.49),
    ("V", 1.11), ("K", 0.69), ("X", 0.17), ("Q", 0.11), ("J", 0.10),
    ("Z", 0.07),
];

#[rustfmt::skip]
pub const ENGLISH_BIGRAMS: &[(&str, f64)] = &[
    ("TH", 1.52), ("HE", 1.28), ("IN", 0.94), ("ER", 0.94), ("AN", 0.82),
    ("RE", 0.68), ("ND", 0.63), ("AT", 0.59), ("ON", 0.57), ("NT", 0.56),
    ("HA", 0.56), ("ES", 0.56), ("ST", 0.55), ("EN", 0.55), ("ED", 0.53),
    ("TO", 0.52), ("IT", 0.50), ("OU", 0.50), ("EA", 0.47), ("HI", 0.46),
    ("IS", 0.46), ("OR", 0.43), ("TI", 0.34), ("AS", 0.33), ("TE", 0.27),
    ("ET", 0.19), ("NG", 0.18), ("OF", 0.16), ("AL", 0.09), ("DE", 0.09),
    ("SE", 0.08), ("LE", 0.08), ("SA", 0.06), ("SI", 0.05), ("AR", 0.04),
];

#[rustfmt::skip]
pub const ENGLISH_TRIGRAMS: &[(&str, f64)] = &[
    ("THE", 1.81), ("AND", 0.73), ("ING", 0.72), ("ENT", 0.42), ("ION", 0.42),
    ("HER", 0.36), ("FOR", 0.34), ("THA", 0.33), ("NTH", 0.33), ("INT", 0.32),
    ("ERE", 0.31), ("TIO", 0.31), ("TER", 0.30), ("EST", 0.28), ("ERS", 0.28),
    ("ATI", 0.26), ("HAT", 0.26), ("ATE", 0.25), ("ALL", 0.24), ("ETH", 0.22),
    ("HES", 0.21), ("VER", 0.21), ("HIS", 0.20), ("OFT", 0.20), ("ITH", 0.20),
    ("FTH", 0.18), ("STH", 0.18), ("OTH", 0.18), ("RES", 0.18), ("ONT", 0.17),
];

/// Compact list of frequent English words. A full word list should be
/// loaded with `loader::load_dictionary` for real cryptograms.
pub const COMMON_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "again", "against", "all", "almost", "alone",
    "along", "already", "also", "always", "am", "among", "an", "and", "another", "any",
    "anything", "are", "around", "as", "ask", "at", "away", "back", "be", "became",
    "because", "become", "been", "before", "began", "behind", "being", "below", "best",
    "better", "between", "big", "black", "body", "book", "both", "boy", "bring", "brown",
    "but", "by", "call", "came", "can", "cannot", "car", "case", "change", "child",
    "children", "city", "close", "come", "could", "country", "course", "day", "days",
    "did", "different", "do", "does", "dog", "done", "door", "down", "during", "each",
    "early", "earth", "end", "enough", "even", "ever", "every", "eye", "eyes", "face",
    "fact", "family", "far", "father", "feel", "few", "find", "first", "five", "for",
    "found", "four", "fox", "friend", "from", "gave", "get", "girl", "give", "go",
    "going", "good", "got", "great", "group", "had", "half", "hand", "hard", "has",
    "have", "he", "head", "hear", "heard", "help", "her", "here", "high", "him",
    "himself", "his", "home", "house", "how", "however", "i", "if", "important", "in",
    "into", "is", "it", "its", "itself", "jumps", "just", "keep", "kind", "knew",
    "know", "land", "large", "last", "later", "lazy", "learn", "least", "left", "less",
    "let", "life", "light", "like", "line", "little", "live", "long", "look", "made",
    "make", "man", "many", "may", "me", "mean", "men", "might", "mind", "more",
    "morning", "most", "mother", "much", "must", "my", "name", "near", "need", "never",
    "new", "next", "night", "no", "not", "nothing", "now", "number", "of", "off",
    "often", "old", "on", "once", "one", "only", "open", "or", "order", "other",
    "our", "out", "over", "own", "part", "people", "place", "play", "point", "power",
    "put", "quick", "read", "real", "right", "room", "run", "said", "same", "saw",
    "say", "school", "sea", "second", "secret", "see", "seem", "seen", "sent", "set",
    "she", "should", "show", "side", "simple", "since", "small", "so", "some",
    "something", "soon", "sound", "speak", "stand", "start", "state", "still", "stood",
    "story", "study", "such", "sun", "sure", "system", "take", "tell", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "thing", "things", "think",
    "this", "those", "though", "thought", "three", "through", "time", "times", "to",
    "today", "together", "told", "too", "took", "toward", "turn", "two", "under",
    "until", "up", "upon", "us", "use", "used", "very", "want", "was", "water", "way",
    "we", "well", "went", "were", "what", "when", "where", "which", "while", "white",
    "who", "whole", "why", "will", "with", "within", "without", "word", "words", "work",
    "world", "would", "write", "year", "years", "yes", "yet", "you", "young", "your",
];

pub fn english_unigrams() -> FrequencyTable {
    FrequencyTable::from_entries(1, ENGLISH_UNIGRAMS.iter().copied())
}

pub fn english_bigrams() -> FrequencyTable {
    FrequencyTable::from_entries(2, ENGLISH_BIGRAMS.iter().copied())
}

pub fn english_trigrams() -> FrequencyTable {
    FrequencyTable::from_entries(3, ENGLISH_TRIGRAMS.iter().copied())
}

pub fn common_words() -> Dictionary {
    COMMON_WORDS.iter().collect()
}
