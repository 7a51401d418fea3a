pub mod gemini;
pub mod prompt;

use futures::future::BoxFuture;
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    AnalyzedVocabulary,
    ManabiError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeMode {
    Reading,
    Writing,
    Visual,
}

/// Everything the external generator needs for one item: the vocabulary
/// constraints plus the words the scheduler wants reinforced.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub allowed_words: Vec<String>,
    pub allowed_characters: Vec<char>,
    pub priority_words: Vec<String>,
    pub mode: PracticeMode,
}

impl GenerationRequest {
    pub fn new(
        vocab: &AnalyzedVocabulary,
        priority_words: Vec<String>,
        mode: PracticeMode,
    ) -> Self {
        let mut allowed_words: Vec<String> = vocab.valid_words().iter().cloned().collect();
        allowed_words.sort();
        let mut allowed_characters: Vec<char> =
            vocab.allowed_characters().iter().copied().collect();
        allowed_characters.sort();

        Self { allowed_words, allowed_characters, priority_words, mode }
    }
}

/// A short passage for the reading screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPassage {
    pub text: String,
    pub reading: String,
    pub translation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingChallenge {
    pub english: String,
    pub japanese: String,
    pub reading: String,
}

/// One batch of writing challenges. The generator is asked for a fixed batch
/// size but whatever size comes back is iterated as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingChallengeSet {
    pub challenges: Vec<WritingChallenge>,
}

/// A picture quiz item. `image` is filled by the second generation step;
/// the sentence is split around the hidden target word for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualQuiz {
    pub sentence: String,
    pub target_word: String,
    pub sentence_before: String,
    pub sentence_after: String,
    pub reading: String,
    pub translation: String,
    pub image_description: String,
    #[serde(skip)]
    pub image: Vec<u8>,
}

/// The seam between the prefetch pipeline and the hosted generator. Screens
/// hold a trait object so tests can substitute controllable fakes.
pub trait PracticeGenerator<T>: Send + Sync {
    fn generate(&self, request: GenerationRequest) -> BoxFuture<'static, Result<T, ManabiError>>;
}
