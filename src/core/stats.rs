use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

use super::vocabulary::AnalyzedVocabulary;
use crate::persistence::KeyValueStore;

/// Exposure weight for a correct visual-quiz answer. The visual mode rewards
/// only the guessed target word, not the surrounding sentence.
const VISUAL_SUCCESS_WEIGHT: u32 = 3;

/// Per-word exposure counts for one practice mode.
///
/// Counts only ever grow; a word the user has never seen has an implicit
/// count of zero. Each practice mode owns an independent instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordStats {
    counts: HashMap<String, u32>,
}

impl WordStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Scans revealed text and credits every vocabulary word by how many
    /// times it occurs. Used by the reading and writing modes.
    pub fn record_text(&mut self, vocab: &AnalyzedVocabulary, text: &str) {
        for word in vocab.valid_words() {
            let occurrences = count_occurrences(text, word);
            if occurrences > 0 {
                *self.counts.entry(word.clone()).or_insert(0) += occurrences;
            }
        }
    }

    /// Credits a correct visual-quiz answer with a fixed weight.
    pub fn record_visual_success(&mut self, word: &str) {
        *self.counts.entry(word.to_string()).or_insert(0) += VISUAL_SUCCESS_WEIGHT;
    }

    /// Restores stats from the store. A missing or unparseable entry falls
    /// back to empty stats, never an error.
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Self {
        match store.read(key) {
            Some(json) => match serde_json::from_str(&json) {
                Ok(stats) => stats,
                Err(e) => {
                    eprintln!("Failed to parse stats for '{}': {}. Using defaults.", key, e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Persists the current counts. Called after every mutation so a reload
    /// resumes from the last totals.
    pub fn save(&self, store: &dyn KeyValueStore, key: &str) {
        match serde_json::to_string(self) {
            Ok(json) => store.write(key, &json),
            Err(e) => eprintln!("Failed to serialize stats for '{}': {}", key, e),
        }
    }
}

/// Non-overlapping occurrence count, scanning left to right.
pub fn count_occurrences(text: &str, word: &str) -> u32 {
    if word.is_empty() {
        return 0;
    }
    text.matches(word).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_count_occurrences_non_overlapping() {
        assert_eq!(count_occurrences("ねこがねこをみる", "ねこ"), 2);
        assert_eq!(count_occurrences("ねこがねこをみる", "いぬ"), 0);
        assert_eq!(count_occurrences("ああああ", "ああ"), 2);
    }

    #[test]
    fn test_record_text_credits_every_vocabulary_word() {
        let vocab = AnalyzedVocabulary::analyze("ねこ みる", "みず");
        let mut stats = WordStats::new();

        stats.record_text(&vocab, "ねこがねこをみる");

        assert_eq!(stats.count("ねこ"), 2);
        assert_eq!(stats.count("みる"), 1);
        assert_eq!(stats.count("みず"), 0);
    }

    #[test]
    fn test_counts_are_monotonic() {
        let vocab = AnalyzedVocabulary::analyze("ねこ", "");
        let mut stats = WordStats::new();

        stats.record_text(&vocab, "ねこ");
        let first = stats.count("ねこ");
        stats.record_text(&vocab, "ねこだ");
        stats.record_text(&vocab, "いぬだ"); // no match, no decrease

        assert!(stats.count("ねこ") >= first);
        assert_eq!(stats.count("ねこ"), 2);
    }

    #[test]
    fn test_visual_success_weight() {
        let mut stats = WordStats::new();

        stats.record_visual_success("みず");
        stats.record_visual_success("みず");

        assert_eq!(stats.count("みず"), 6);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = MemoryStore::new();
        let mut stats = WordStats::new();
        stats.record_visual_success("ねこ");
        stats.save(&store, "visual_stats");

        let restored = WordStats::load(&store, "visual_stats");
        assert_eq!(restored.count("ねこ"), 3);
    }

    #[test]
    fn test_corrupt_stored_stats_fall_back_to_empty() {
        let store = MemoryStore::new();
        store.write("reading_stats", "{not valid json");

        let stats = WordStats::load(&store, "reading_stats");
        assert_eq!(stats.count("ねこ"), 0);
    }
}
