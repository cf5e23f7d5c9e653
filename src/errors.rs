use std::io;

use thiserror::Error;

use crate::models::language::Language;

#[derive(Error, Debug)]
pub enum WordError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Word list for {language} could not be read: {source}")]
    ResourceUnavailable {
        language: Language,
        #[source]
        source: io::Error,
    },

    #[error("Word list for {0} contains no usable words")]
    EmptyDictionary(Language),

    #[error("Custom word chance must be between 0 and 100, got {0}")]
    InvalidCustomWordChance(u8),

    #[error("Lobby has no standard or custom words to pick from")]
    EmptyWordPool,

    #[error("Env error: {0}")]
    EnvError(String),
}

impl WordError {
    /// Errors that leave a language without a word source. The game cannot run
    /// a lobby in that language, so startup should stop on these.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            WordError::ResourceUnavailable { .. } | WordError::EmptyDictionary(_)
        )
    }
}
