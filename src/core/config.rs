//! Table configuration.
//!
//! `TableConfig` gathers everything a table needs at startup:
//! - where the counters are stored (`storage_key`)
//! - which language the text view speaks (`Locale`)
//! - an optional fixed seed for reproducible rounds

use serde::{Deserialize, Serialize};

use crate::rules::{Outcome, Side};

/// Default key under which counters are persisted.
pub const DEFAULT_STORAGE_KEY: &str = "baccarat_counts";

/// Display language for rendered text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

impl Locale {
    /// Result banner for an outcome.
    #[must_use]
    pub fn outcome_text(self, outcome: Outcome) -> &'static str {
        match (self, outcome) {
            (Locale::English, Outcome::PlayerWin) => "Player wins!",
            (Locale::English, Outcome::BankerWin) => "Banker wins!",
            (Locale::English, Outcome::Tie) => "Tie.",
            (Locale::Spanish, Outcome::PlayerWin) => "¡Gana el Jugador!",
            (Locale::Spanish, Outcome::BankerWin) => "¡Gana la Banca!",
            (Locale::Spanish, Outcome::Tie) => "Empate.",
        }
    }

    /// Score line, e.g. `Points: 7`.
    #[must_use]
    pub fn score_text(self, score: u8) -> String {
        match self {
            Locale::English => format!("Points: {}", score),
            Locale::Spanish => format!("Puntos: {}", score),
        }
    }

    /// Side name.
    #[must_use]
    pub fn side_name(self, side: Side) -> &'static str {
        match (self, side) {
            (Locale::English, Side::Player) => "Player",
            (Locale::English, Side::Banker) => "Banker",
            (Locale::Spanish, Side::Player) => "Jugador",
            (Locale::Spanish, Side::Banker) => "Banca",
        }
    }

    /// Labels for the counters panel, in player/banker/ties order.
    #[must_use]
    pub fn counter_labels(self) -> [&'static str; 3] {
        match self {
            Locale::English => ["Player wins", "Banker wins", "Ties"],
            Locale::Spanish => ["Victorias Jugador", "Victorias Banca", "Empates"],
        }
    }
}

/// Configuration for a `Table`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Fixed identifier the counters are stored under.
    pub storage_key: String,

    /// Language used by text rendering.
    pub locale: Locale,

    /// RNG seed. `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            locale: Locale::default(),
            seed: None,
        }
    }
}

impl TableConfig {
    /// Use a custom storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Use a custom locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Use a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TableConfig::default();
        assert_eq!(config.storage_key, "baccarat_counts");
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = TableConfig::default()
            .with_storage_key("other")
            .with_locale(Locale::Spanish)
            .with_seed(123);

        assert_eq!(config.storage_key, "other");
        assert_eq!(config.locale, Locale::Spanish);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_localized_text() {
        assert_eq!(Locale::English.score_text(7), "Points: 7");
        assert_eq!(Locale::Spanish.score_text(0), "Puntos: 0");
        assert_eq!(Locale::Spanish.outcome_text(Outcome::BankerWin), "¡Gana la Banca!");
        assert_eq!(Locale::English.outcome_text(Outcome::Tie), "Tie.");
    }

    #[test]
    fn test_serialization() {
        let config = TableConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TableConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
