pub mod dictionary;
pub mod selector;
pub mod source;

pub use dictionary::{DictionaryCache, parse_word_list};
pub use selector::{WORDS_PER_ROUND, WordSelector, select_round_with};
pub use source::{BundledSource, DictionarySource, DirectorySource};
