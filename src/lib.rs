pub mod config;
pub mod errors;
pub mod models;
pub mod state;
pub mod words;

use config::Config;
use errors::WordError;
use state::AppState;
use words::{DictionaryCache, DirectorySource, WordSelector};

pub fn start() -> Result<AppState, WordError> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    start_with_config(&config)
}

pub fn start_with_config(config: &Config) -> Result<AppState, WordError> {
    let dictionaries = match &config.words_dir {
        Some(dir) => {
            tracing::info!("Reading word lists from {}", dir.display());
            DictionaryCache::new(DirectorySource::new(dir.clone()))
        }
        None => {
            tracing::info!("Using bundled word lists");
            DictionaryCache::bundled()
        }
    };

    // A lobby can't run without words, so surface broken lists before serving
    if let Err(e) = dictionaries.preload(&config.preload_languages) {
        tracing::error!("Failed to load word lists: {}", e);
        return Err(e);
    }

    Ok(AppState::new(dictionaries, WordSelector::new()))
}
