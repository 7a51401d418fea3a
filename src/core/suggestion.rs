use rand::{
    seq::SliceRandom,
    Rng,
};

use super::{
    stats::WordStats,
    vocabulary::AnalyzedVocabulary,
};

/// Upper bound on words suggested per generation request.
pub const MAX_SUGGESTIONS: usize = 5;

/// At most this many suggestions come from the learning pool; the rest are
/// filled from the known pool so passages keep some familiar context.
pub const MAX_LEARNING_SUGGESTIONS: usize = 3;

/// Picks up to five words to bias the next generation request toward,
/// favoring learning-pool words and least-practiced words first.
///
/// Each pool is shuffled before a stable sort by exposure count, so words
/// with equal counts come out in random order. Called fresh for every
/// request; the only state consulted is the stats snapshot.
pub fn suggest_words<R: Rng + ?Sized>(
    vocab: &AnalyzedVocabulary,
    stats: &WordStats,
    rng: &mut R,
) -> Vec<String> {
    let learning_pool = rank_pool(vocab.learning_words().iter().cloned().collect(), stats, rng);
    let known_pool = rank_pool(vocab.known_words().cloned().collect(), stats, rng);

    let learning_taken = learning_pool.len().min(MAX_LEARNING_SUGGESTIONS);
    let known_taken = MAX_SUGGESTIONS.saturating_sub(learning_taken).min(known_pool.len());

    let mut suggestions = Vec::with_capacity(learning_taken + known_taken);
    suggestions.extend(learning_pool.into_iter().take(learning_taken));
    suggestions.extend(known_pool.into_iter().take(known_taken));
    suggestions
}

fn rank_pool<R: Rng + ?Sized>(
    mut pool: Vec<String>,
    stats: &WordStats,
    rng: &mut R,
) -> Vec<String> {
    pool.shuffle(rng);
    // Stable sort keeps the shuffled order among equal counts
    pool.sort_by_key(|word| stats.count(word));
    pool
}
