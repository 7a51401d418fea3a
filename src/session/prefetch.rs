use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::{
    core::{
        suggestion::suggest_words,
        AnalyzedVocabulary,
        ManabiError,
        WordStats,
    },
    generator::{
        GenerationRequest,
        PracticeGenerator,
        PracticeMode,
    },
    persistence::KeyValueStore,
};

/// Observable state of a practice screen. `Transitioning` is only visible
/// while an `advance` call is awaiting the buffered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    InitialLoading,
    Ready,
    Transitioning,
    Error(String),
}

/// Double-buffered item pipeline for one practice screen.
///
/// Holds the current item the user is interacting with plus at most one
/// in-flight background request for the next item. The vocabulary snapshot
/// is fixed for the lifetime of the screen; word suggestions are recomputed
/// from the live stats on every request so under-practiced words keep
/// floating to the front.
pub struct PracticeScreen<T> {
    vocab: Arc<AnalyzedVocabulary>,
    mode: PracticeMode,
    generator: Arc<dyn PracticeGenerator<T>>,
    store: Arc<dyn KeyValueStore>,
    stats_key: &'static str,
    stats: WordStats,
    current: Option<T>,
    prefetch: Option<JoinHandle<Result<T, ManabiError>>>,
    state: ScreenState,
}

impl<T: Send + 'static> PracticeScreen<T> {
    pub fn new(
        vocab: Arc<AnalyzedVocabulary>,
        mode: PracticeMode,
        generator: Arc<dyn PracticeGenerator<T>>,
        store: Arc<dyn KeyValueStore>,
        stats_key: &'static str,
    ) -> Self {
        let stats = WordStats::load(store.as_ref(), stats_key);
        Self {
            vocab,
            mode,
            generator,
            store,
            stats_key,
            stats,
            current: None,
            prefetch: None,
            state: ScreenState::InitialLoading,
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn stats(&self) -> &WordStats {
        &self.stats
    }

    /// Loads the first item on screen mount. On success the item becomes
    /// current and one background prefetch is started immediately. On
    /// failure the screen lands in `Error`; the user must retry explicitly.
    pub async fn load_first(&mut self) -> Result<(), ManabiError> {
        self.state = ScreenState::InitialLoading;
        let handle = self.spawn_generation();
        match Self::settle(handle).await {
            Ok(item) => {
                self.current = Some(item);
                self.start_prefetch();
                self.state = ScreenState::Ready;
                Ok(())
            }
            Err(e) => {
                self.state = ScreenState::Error(e.to_string());
                Err(e)
            }
        }
    }

    /// Swaps the buffered item in as current. If no prefetch is pending
    /// (first attempt after a failure), one is issued on the spot. On
    /// success a new background prefetch is started; on failure the slot
    /// stays empty so the next advance re-issues from scratch.
    pub async fn advance(&mut self) -> Result<(), ManabiError> {
        self.state = ScreenState::Transitioning;
        let handle = match self.prefetch.take() {
            Some(handle) => handle,
            None => self.spawn_generation(),
        };
        match Self::settle(handle).await {
            Ok(item) => {
                self.current = Some(item);
                self.start_prefetch();
                self.state = ScreenState::Ready;
                Ok(())
            }
            Err(e) => {
                self.state = ScreenState::Error(e.to_string());
                Err(e)
            }
        }
    }

    /// Credits every vocabulary word occurring in revealed text and saves
    /// the stats. Reading and writing modes call this on reveal/confirm.
    pub fn record_reveal(&mut self, text: &str) {
        self.stats.record_text(&self.vocab, text);
        self.stats.save(self.store.as_ref(), self.stats_key);
    }

    /// Credits only the guessed target word, with a fixed weight. The
    /// visual mode calls this on a correct answer.
    pub fn record_visual_success(&mut self, word: &str) {
        self.stats.record_visual_success(word);
        self.stats.save(self.store.as_ref(), self.stats_key);
    }

    fn start_prefetch(&mut self) {
        // The slot was either consumed or never filled; this is the only
        // place a prefetch is spawned, so at most one is ever in flight.
        debug_assert!(self.prefetch.is_none());
        let handle = self.spawn_generation();
        self.prefetch = Some(handle);
    }

    fn spawn_generation(&self) -> JoinHandle<Result<T, ManabiError>> {
        let suggestions = suggest_words(&self.vocab, &self.stats, &mut rand::rng());
        let request = GenerationRequest::new(&self.vocab, suggestions, self.mode);
        tokio::spawn(self.generator.generate(request))
    }

    async fn settle(handle: JoinHandle<Result<T, ManabiError>>) -> Result<T, ManabiError> {
        match handle.await {
            Ok(result) => result,
            Err(join_error) => Err(ManabiError::from(join_error)),
        }
    }
}
