use std::{fs, io, path::PathBuf};

use crate::models::language::Language;

/// Backing store for the raw word list text of each language.
pub trait DictionarySource: Send + Sync {
    fn read(&self, language: Language) -> io::Result<String>;
}

/// Word lists compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledSource;

impl DictionarySource for BundledSource {
    fn read(&self, language: Language) -> io::Result<String> {
        let text = match language {
            Language::English => include_str!("../../resources/words/en"),
            Language::Italian => include_str!("../../resources/words/it"),
            Language::German => include_str!("../../resources/words/de"),
            Language::French => include_str!("../../resources/words/fr"),
            Language::Dutch => include_str!("../../resources/words/nl"),
        };
        Ok(text.to_string())
    }
}

/// Reads `<root>/<language code>` from disk on every call.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, language: Language) -> PathBuf {
        self.root.join(language.code())
    }
}

impl DictionarySource for DirectorySource {
    fn read(&self, language: Language) -> io::Result<String> {
        fs::read_to_string(self.path_for(language))
    }
}
