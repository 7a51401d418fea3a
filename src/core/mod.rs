pub mod errors;
pub mod normalize;
pub mod stats;
pub mod suggestion;
pub mod vocabulary;

pub use errors::ManabiError;
pub use stats::WordStats;
pub use vocabulary::AnalyzedVocabulary;
