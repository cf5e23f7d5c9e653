use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::WordError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Italian,
    German,
    French,
    Dutch,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Italian,
        Language::German,
        Language::French,
        Language::Dutch,
    ];

    /// Short code, also the file name of the language's word list.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Italian => "it",
            Language::German => "de",
            Language::French => "fr",
            Language::Dutch => "nl",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Italian => "italian",
            Language::German => "german",
            Language::French => "french",
            Language::Dutch => "dutch",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|language| language.name() == name)
            .ok_or_else(|| WordError::UnknownLanguage(s.to_string()))
    }
}
