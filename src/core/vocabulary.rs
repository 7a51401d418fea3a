use std::collections::HashSet;

use wana_kana::IsJapaneseChar;

/// Vocabulary derived from the user's known/learning word lists.
///
/// Built once when a practice session starts and never mutated afterwards;
/// every generation request for the session draws from the same snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedVocabulary {
    valid_words: HashSet<String>,
    learning_words: HashSet<String>,
    allowed_characters: HashSet<char>,
}

impl AnalyzedVocabulary {
    /// Tokenizes both blobs on whitespace and derives the word and character
    /// sets. Learning words are always a subset of valid words, even when a
    /// word appears only in the learning list.
    pub fn analyze(known_text: &str, learning_text: &str) -> Self {
        let known: HashSet<String> = tokenize(known_text).collect();
        let learning_words: HashSet<String> = tokenize(learning_text).collect();

        let mut valid_words = known;
        valid_words.extend(learning_words.iter().cloned());

        let allowed_characters = valid_words
            .iter()
            .flat_map(|word| word.chars())
            .filter(|c| c.is_hiragana())
            .collect();

        Self { valid_words, learning_words, allowed_characters }
    }

    pub fn valid_words(&self) -> &HashSet<String> {
        &self.valid_words
    }

    pub fn learning_words(&self) -> &HashSet<String> {
        &self.learning_words
    }

    pub fn allowed_characters(&self) -> &HashSet<char> {
        &self.allowed_characters
    }

    /// Valid words that are not flagged as learning words.
    pub fn known_words(&self) -> impl Iterator<Item = &String> {
        self.valid_words.iter().filter(|w| !self.learning_words.contains(*w))
    }

    /// Callers must not start a practice session with an empty vocabulary.
    pub fn is_empty(&self) -> bool {
        self.valid_words.is_empty()
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter(|t| !t.is_empty()).map(|t| t.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learning_words_are_subset_of_valid_words() {
        let vocab = AnalyzedVocabulary::analyze("わたし ねこ", "みず ねこ");

        assert!(vocab.learning_words().is_subset(vocab.valid_words()));
        assert_eq!(vocab.valid_words().len(), 3);
        assert_eq!(vocab.learning_words().len(), 2);
    }

    #[test]
    fn test_learning_only_word_is_valid() {
        // みず appears only in the learning list but must still count as valid
        let vocab = AnalyzedVocabulary::analyze("わたし", "みず");

        assert!(vocab.valid_words().contains("みず"));
        assert!(vocab.learning_words().contains("みず"));
    }

    #[test]
    fn test_tokenization_handles_newlines_and_duplicates() {
        let vocab = AnalyzedVocabulary::analyze("ねこ\nねこ  いぬ\n", "");

        assert_eq!(vocab.valid_words().len(), 2);
        assert!(vocab.learning_words().is_empty());
    }

    #[test]
    fn test_allowed_characters_are_exactly_in_range_chars() {
        // テスト is katakana and 猫 is kanji; neither belongs in the set
        let vocab = AnalyzedVocabulary::analyze("ねこ テスト 猫だ", "");

        let expected: HashSet<char> = ['ね', 'こ', 'だ'].into_iter().collect();
        assert_eq!(vocab.allowed_characters(), &expected);
    }

    #[test]
    fn test_known_words_excludes_learning_pool() {
        let vocab = AnalyzedVocabulary::analyze("わたし ねこ みず", "みず");

        let known: HashSet<&String> = vocab.known_words().collect();
        assert_eq!(known.len(), 2);
        assert!(!known.contains(&"みず".to_string()));
    }

    #[test]
    fn test_empty_inputs_yield_empty_vocabulary() {
        let vocab = AnalyzedVocabulary::analyze("   \n ", "\t");

        assert!(vocab.is_empty());
        assert!(vocab.allowed_characters().is_empty());
    }
}
