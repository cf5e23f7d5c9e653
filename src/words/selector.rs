use std::{
    collections::HashSet,
    sync::{Mutex, PoisonError},
};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IteratorRandom};

use crate::{errors::WordError, models::lobby::LobbyWords};

pub const WORDS_PER_ROUND: usize = 3;

/// Picks the word choices offered to the drawer at the start of a round.
///
/// One RNG is seeded when the selector is built and shared by every lobby.
pub struct WordSelector {
    rng: Mutex<StdRng>,
}

impl WordSelector {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn select_round(
        &self,
        lobby: &LobbyWords,
    ) -> Result<[String; WORDS_PER_ROUND], WordError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        select_round_with(&mut *rng, lobby)
    }
}

impl Default for WordSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws the words of one round using the caller's RNG.
///
/// Each draw avoids the lobby's already used words and the words drawn
/// before it in this round. When every standard word is excluded a repeat
/// is picked instead, so a round always gets its words.
pub fn select_round_with<R: Rng + ?Sized>(
    rng: &mut R,
    lobby: &LobbyWords,
) -> Result<[String; WORDS_PER_ROUND], WordError> {
    let mut excluded: HashSet<&str> = lobby
        .already_used_words
        .iter()
        .map(String::as_str)
        .collect();

    let first = pick_word(rng, lobby, &excluded).ok_or(WordError::EmptyWordPool)?;
    excluded.insert(first);
    let second = pick_word(rng, lobby, &excluded).ok_or(WordError::EmptyWordPool)?;
    excluded.insert(second);
    let third = pick_word(rng, lobby, &excluded).ok_or(WordError::EmptyWordPool)?;

    Ok([first.to_string(), second.to_string(), third.to_string()])
}

fn pick_word<'a, R: Rng + ?Sized>(
    rng: &mut R,
    lobby: &'a LobbyWords,
    excluded: &HashSet<&str>,
) -> Option<&'a str> {
    let chance = lobby.custom_words_chance();
    if chance > 0 && rng.random_range(1..=100u8) <= chance {
        if let Some(word) = pick_unused(rng, &lobby.custom_words, excluded) {
            return Some(word);
        }
    }

    if let Some(word) = pick_unused(rng, &lobby.words, excluded) {
        return Some(word);
    }

    tracing::debug!(
        "All standard words used in lobby {}, allowing a repeat",
        lobby.lobby_id
    );

    // Without standard words, repeat a custom one; None only when both are empty
    let pool = if lobby.words.is_empty() {
        &lobby.custom_words[..]
    } else {
        &lobby.words[..]
    };
    pool.iter().map(String::as_str).choose(rng)
}

fn pick_unused<'a, R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &'a [String],
    excluded: &HashSet<&str>,
) -> Option<&'a str> {
    candidates
        .iter()
        .map(String::as_str)
        .filter(|word| !excluded.contains(word))
        .choose(rng)
}
