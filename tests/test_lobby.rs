use std::sync::Arc;

use scribble_words::{
    config::{Config, parse_languages},
    errors::WordError,
    models::{Language, LobbyWords, lobby::parse_custom_words},
    start_with_config,
    state::AppState,
    words::{DictionaryCache, WordSelector},
};
use uuid::Uuid;

fn create_test_state() -> AppState {
    AppState::new(DictionaryCache::bundled(), WordSelector::seeded(17))
}

#[test]
fn test_language_mapping() {
    assert_eq!("english".parse::<Language>().unwrap(), Language::English);
    assert_eq!(" German ".parse::<Language>().unwrap(), Language::German);
    assert_eq!(Language::Italian.code(), "it");
    assert_eq!(Language::French.code(), "fr");
    assert_eq!(Language::Dutch.code(), "nl");
    assert_eq!(Language::English.to_string(), "english");

    let result = "esperanto".parse::<Language>();
    assert!(matches!(result, Err(WordError::UnknownLanguage(_))));
}

#[test]
fn test_language_serde() {
    assert_eq!(serde_json::to_string(&Language::Dutch).unwrap(), "\"dutch\"");
    let language: Language = serde_json::from_str("\"french\"").unwrap();
    assert_eq!(language, Language::French);
}

#[test]
fn test_parse_custom_words() {
    assert_eq!(parse_custom_words(" Cat, dog,,CAT "), vec!["cat", "dog"]);
    assert_eq!(parse_custom_words("ice cream , Hot Dog"), vec!["ice cream", "hot dog"]);
    assert!(parse_custom_words(" , ,").is_empty());
}

#[test]
fn test_custom_word_chance_bounds() {
    let mut lobby = LobbyWords::new(Uuid::new_v4(), Language::English, Arc::from(vec![]));

    assert!(lobby.set_custom_words_chance(100).is_ok());
    assert_eq!(lobby.custom_words_chance(), 100);

    let result = lobby.set_custom_words_chance(101);
    assert!(matches!(result, Err(WordError::InvalidCustomWordChance(101))));
    assert_eq!(lobby.custom_words_chance(), 100);
}

#[test]
fn test_mark_used_skips_duplicates() {
    let mut lobby = LobbyWords::new(Uuid::new_v4(), Language::English, Arc::from(vec![]));
    lobby.mark_used("apple");
    lobby.mark_used("apple".to_string());
    lobby.mark_used("pear");
    assert_eq!(lobby.already_used_words, vec!["apple", "pear"]);
}

#[test]
fn test_lobby_words_serialize_camel_case() {
    let lobby = LobbyWords::new(Uuid::nil(), Language::German, Arc::from(vec!["Hund".to_string()]))
        .with_custom_words(vec!["katze".to_string()], 25)
        .unwrap();

    let value = serde_json::to_value(&lobby).unwrap();
    assert_eq!(value["language"], "german");
    assert_eq!(value["customWordsChance"], 25);
    assert_eq!(value["customWords"][0], "katze");
    assert_eq!(value["words"][0], "Hund");
    assert!(value["alreadyUsedWords"].as_array().unwrap().is_empty());
}

#[test]
fn test_state_resolves_lobby_words() {
    let state = create_test_state();
    let lobby = state.lobby_words(Uuid::new_v4(), Language::Italian).unwrap();

    let cached = state.dictionaries.get(Language::Italian).unwrap();
    assert!(Arc::ptr_eq(&lobby.words, &cached));

    let round = state.select_round(&lobby).unwrap();
    assert!(round.iter().all(|w| cached.contains(w)));
}

#[test]
fn test_change_language_keeps_session_words() {
    let state = create_test_state();
    let mut lobby = state
        .lobby_words(Uuid::new_v4(), Language::English)
        .unwrap()
        .with_custom_words(vec!["doodle".to_string()], 10)
        .unwrap();
    lobby.mark_used("apple");

    state.change_language(&mut lobby, Language::German).unwrap();

    assert_eq!(lobby.language, Language::German);
    assert!(Arc::ptr_eq(&lobby.words, &state.dictionaries.get(Language::German).unwrap()));
    assert_eq!(lobby.already_used_words, vec!["apple"]);
    assert_eq!(lobby.custom_words, vec!["doodle"]);
}

#[test]
fn test_parse_languages() {
    assert_eq!(
        parse_languages("english, dutch,").unwrap(),
        vec![Language::English, Language::Dutch]
    );
    assert!(matches!(
        parse_languages("english,klingon"),
        Err(WordError::UnknownLanguage(_))
    ));
}

#[test]
fn test_start_with_bundled_words() {
    let state = start_with_config(&Config::default()).unwrap();
    for language in Language::ALL {
        assert!(state.dictionaries.is_cached(language));
    }
}

#[test]
fn test_start_fails_on_missing_words_dir() {
    let config = Config {
        words_dir: Some(std::env::temp_dir().join(format!("missing-{}", Uuid::new_v4()))),
        preload_languages: vec![Language::English],
    };

    let err = start_with_config(&config).err().unwrap();
    assert!(err.is_fatal());
}

#[test]
fn test_lobby_words_reject_out_of_range_chance() {
    let json = |chance: u32| {
        format!(
            r#"{{"lobbyId":"{}","language":"english","words":["cat"],"customWords":["dog"],"customWordsChance":{},"alreadyUsedWords":[]}}"#,
            Uuid::nil(),
            chance
        )
    };

    let lobby: LobbyWords = serde_json::from_str(&json(100)).unwrap();
    assert_eq!(lobby.custom_words_chance(), 100);

    let result = serde_json::from_str::<LobbyWords>(&json(101));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("between 0 and 100"), "{err}");

    assert!(serde_json::from_str::<LobbyWords>(&json(250)).is_err());
}
