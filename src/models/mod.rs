pub mod language;
pub mod lobby;

pub use language::Language;
pub use lobby::LobbyWords;
