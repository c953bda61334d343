use super::dictionary::Dictionary;
use super::loader::{load_dictionary_from_path, load_frequency_table_from_path};
use super::reference;
use super::tables::FrequencyTable;
use crate::error::CfResult;
use std::path::Path;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

/// Read-only statistics shared by every scoring task of a process.
///
/// Any table left unset falls back to the embedded English defaults.
#[derive(Debug, Clone, TypedBuilder)]
pub struct ReferenceData {
    #[builder(default = reference::english_unigrams())]
    pub unigrams: FrequencyTable,
    #[builder(default = reference::english_bigrams())]
    pub bigrams: FrequencyTable,
    #[builder(default = reference::english_trigrams())]
    pub trigrams: FrequencyTable,
    #[builder(default = reference::common_words())]
    pub dictionary: Dictionary,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::english()
    }
}

impl ReferenceData {
    pub fn english() -> Self {
        Self::builder().build()
    }

    /// Loads each table from disk when a path is given, otherwise keeps the
    /// embedded default for it.
    pub fn load_from_disk(
        unigrams: Option<&Path>,
        bigrams: Option<&Path>,
        trigrams: Option<&Path>,
        dictionary: Option<&Path>,
    ) -> CfResult<Self> {
        let unigrams = match unigrams {
            Some(p) => load_frequency_table_from_path(p, 1)?,
            None => reference::english_unigrams(),
        };
        let bigrams = match bigrams {
            Some(p) => load_frequency_table_from_path(p, 2)?,
            None => reference::english_bigrams(),
        };
        let trigrams = match trigrams {
            Some(p) => load_frequency_table_from_path(p, 3)?,
            None => reference::english_trigrams(),
        };
        let dictionary = match dictionary {
            Some(p) => load_dictionary_from_path(p)?,
            None => {
                debug!("   No word list given, using the embedded common-word list.");
                reference::common_words()
            }
        };

        info!(
            "📚 Reference data: {} unigrams, {} bigrams, {} trigrams, {} words",
            unigrams.len(),
            bigrams.len(),
            trigrams.len(),
            dictionary.len()
        );

        Ok(Self::builder()
            .unigrams(unigrams)
            .bigrams(bigrams)
            .trigrams(trigrams)
            .dictionary(dictionary)
            .build())
    }

    /// Most frequent plaintext letter according to the unigram table.
    pub fn top_letter(&self) -> u8 {
        self.unigrams
            .top()
            .and_then(|(g, _)| g.bytes().next())
            .unwrap_or(crate::alphabet::FALLBACK_TOP_LETTER)
    }
}
