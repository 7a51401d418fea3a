pub mod config;
pub mod core;
pub mod generator;
pub mod persistence;
pub mod session;

pub use crate::{
    core::{
        normalize::check_answer,
        suggestion::suggest_words,
        AnalyzedVocabulary,
        ManabiError,
        WordStats,
    },
    generator::{
        gemini::GeminiClient,
        GenerationRequest,
        PracticeMode,
    },
    session::{
        PracticeScreen,
        ScreenState,
    },
};
