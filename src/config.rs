use std::{env, path::PathBuf};

use crate::{errors::WordError, models::language::Language};

#[derive(Debug, Clone)]
pub struct Config {
    /// Read word lists from this directory instead of the bundled ones.
    pub words_dir: Option<PathBuf>,
    pub preload_languages: Vec<Language>,
}

impl Config {
    pub fn from_env() -> Result<Self, WordError> {
        let words_dir = read_var("WORDS_DIR")?.map(PathBuf::from);

        let preload_languages = match read_var("PRELOAD_LANGUAGES")? {
            Some(names) => parse_languages(&names)?,
            None => Language::ALL.to_vec(),
        };

        Ok(Self {
            words_dir,
            preload_languages,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_dir: None,
            preload_languages: Language::ALL.to_vec(),
        }
    }
}

pub fn parse_languages(names: &str) -> Result<Vec<Language>, WordError> {
    names
        .split(',')
        .filter(|name| !name.trim().is_empty())
        .map(str::parse::<Language>)
        .collect()
}

fn read_var(key: &str) -> Result<Option<String>, WordError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(WordError::EnvError(format!("{key} is not valid unicode")))
        }
    }
}
