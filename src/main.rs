use std::process::ExitCode;

use scribble_words::models::Language;
use serde_json::json;
use uuid::Uuid;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let state = match scribble_words::start() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Startup failed (fatal: {}): {}", e.is_fatal(), e);
            return ExitCode::FAILURE;
        }
    };

    let language = match std::env::args().nth(1) {
        Some(name) => match name.parse::<Language>() {
            Ok(language) => language,
            Err(e) => {
                tracing::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Language::English,
    };

    let round = state
        .lobby_words(Uuid::new_v4(), language)
        .and_then(|lobby| state.select_round(&lobby));

    match round {
        Ok(words) => {
            println!("{}", json!({ "language": language, "words": words }));
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to pick words: {}", e);
            ExitCode::FAILURE
        }
    }
}
