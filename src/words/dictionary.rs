use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError, RwLock},
};

use crate::{
    errors::WordError,
    models::language::Language,
    words::source::{BundledSource, DictionarySource},
};

// "i" marks a word as impossible to draw
const IMPOSSIBLE_TAG: &str = "i";

/// Normalizes raw word list text into drawable words.
///
/// One word per line. Blank lines are skipped, `word#i` lines are dropped and
/// any other `#tag` suffix is cut off at the last `#`.
pub fn parse_word_list(raw: &str) -> Vec<String> {
    raw.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let word = match line.rsplit_once('#') {
        Some((_, tag)) if tag == IMPOSSIBLE_TAG => return None,
        Some((word, _)) => word.trim(),
        None => line,
    };

    if word.is_empty() {
        None
    } else {
        Some(word.to_string())
    }
}

/// Per-language word lists, loaded on first use and kept for the life of the
/// process.
pub struct DictionaryCache {
    source: Box<dyn DictionarySource>,
    entries: RwLock<HashMap<Language, Arc<[String]>>>,
    fill_locks: Mutex<HashMap<Language, Arc<Mutex<()>>>>,
}

impl DictionaryCache {
    pub fn new(source: impl DictionarySource + 'static) -> Self {
        Self {
            source: Box::new(source),
            entries: RwLock::new(HashMap::new()),
            fill_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn bundled() -> Self {
        Self::new(BundledSource)
    }

    pub fn get(&self, language: Language) -> Result<Arc<[String]>, WordError> {
        if let Some(words) = self.cached(language) {
            return Ok(words);
        }

        let fill_lock = self.fill_lock(language);
        let _fill = fill_lock.lock().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have filled it while we waited
        if let Some(words) = self.cached(language) {
            return Ok(words);
        }

        let raw = self
            .source
            .read(language)
            .map_err(|source| WordError::ResourceUnavailable { language, source })?;

        let words: Arc<[String]> = parse_word_list(&raw).into();
        if words.is_empty() {
            return Err(WordError::EmptyDictionary(language));
        }

        tracing::info!("Loaded {} words for {}", words.len(), language);

        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(language, Arc::clone(&words));

        Ok(words)
    }

    pub fn get_by_name(&self, name: &str) -> Result<Arc<[String]>, WordError> {
        let language: Language = name.parse()?;
        self.get(language)
    }

    /// Loads every given language, stopping at the first failure.
    pub fn preload(&self, languages: &[Language]) -> Result<(), WordError> {
        for language in languages {
            self.get(*language)?;
        }
        tracing::info!("Preloaded word lists for {} languages", languages.len());
        Ok(())
    }

    pub fn is_cached(&self, language: Language) -> bool {
        self.cached(language).is_some()
    }

    // Fills of different languages never wait on each other
    fn fill_lock(&self, language: Language) -> Arc<Mutex<()>> {
        let mut locks = self.fill_locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(language).or_default())
    }

    fn cached(&self, language: Language) -> Option<Arc<[String]>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&language)
            .cloned()
    }
}
