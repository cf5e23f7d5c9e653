use std::{collections::HashSet, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, de};
use uuid::Uuid;

use crate::{errors::WordError, models::language::Language};

/// Word configuration of a single lobby, as seen by the word selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyWords {
    pub lobby_id: Uuid,
    pub language: Language,
    /// Standard words for `language`, shared with every lobby using it.
    pub words: Arc<[String]>,
    pub custom_words: Vec<String>,
    #[serde(deserialize_with = "deserialize_chance")]
    custom_words_chance: u8,
    pub already_used_words: Vec<String>,
}

impl LobbyWords {
    pub fn new(lobby_id: Uuid, language: Language, words: Arc<[String]>) -> Self {
        Self {
            lobby_id,
            language,
            words,
            custom_words: Vec::new(),
            custom_words_chance: 0,
            already_used_words: Vec::new(),
        }
    }

    pub fn custom_words_chance(&self) -> u8 {
        self.custom_words_chance
    }

    pub fn set_custom_words_chance(&mut self, chance: u8) -> Result<(), WordError> {
        if chance > 100 {
            return Err(WordError::InvalidCustomWordChance(chance));
        }
        self.custom_words_chance = chance;
        Ok(())
    }

    pub fn with_custom_words(
        mut self,
        custom_words: Vec<String>,
        chance: u8,
    ) -> Result<Self, WordError> {
        self.set_custom_words_chance(chance)?;
        self.custom_words = custom_words;
        Ok(self)
    }

    /// Records a word picked for a finished round so later rounds avoid it.
    pub fn mark_used(&mut self, word: impl Into<String>) {
        let word = word.into();
        if !self.already_used_words.contains(&word) {
            self.already_used_words.push(word);
        }
    }
}

fn deserialize_chance<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let chance = u8::deserialize(deserializer)?;
    if chance > 100 {
        return Err(de::Error::custom(WordError::InvalidCustomWordChance(chance)));
    }
    Ok(chance)
}

/// Parses the comma separated custom word input of a lobby owner.
///
/// Entries are trimmed and lowercased; empty entries and repeats are dropped.
pub fn parse_custom_words(input: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    input
        .split(',')
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
