use std::sync::Arc;

use uuid::Uuid;

use crate::{
    errors::WordError,
    models::{language::Language, lobby::LobbyWords},
    words::{DictionaryCache, WORDS_PER_ROUND, WordSelector},
};

#[derive(Clone)]
pub struct AppState {
    pub dictionaries: Arc<DictionaryCache>,
    pub selector: Arc<WordSelector>,
}

impl AppState {
    pub fn new(dictionaries: DictionaryCache, selector: WordSelector) -> Self {
        Self {
            dictionaries: Arc::new(dictionaries),
            selector: Arc::new(selector),
        }
    }

    pub fn lobby_words(
        &self,
        lobby_id: Uuid,
        language: Language,
    ) -> Result<LobbyWords, WordError> {
        let words = self.dictionaries.get(language)?;
        Ok(LobbyWords::new(lobby_id, language, words))
    }

    /// Swaps the lobby's standard words after the owner picks another language.
    /// Custom words and the used words of the session are kept.
    pub fn change_language(
        &self,
        lobby: &mut LobbyWords,
        language: Language,
    ) -> Result<(), WordError> {
        lobby.words = self.dictionaries.get(language)?;
        lobby.language = language;
        Ok(())
    }

    pub fn select_round(
        &self,
        lobby: &LobbyWords,
    ) -> Result<[String; WORDS_PER_ROUND], WordError> {
        self.selector.select_round(lobby)
    }
}
