use ::config::{Config, ConfigError, Environment};
use once_cell::sync::Lazy;
use serde::Deserialize;

pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    AppConfig::load().unwrap_or_else(|e| panic!("Failed to load configuration: {}", e))
});

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub bank: BankConfig,
    pub game: GameLimits,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BankConfig {
    pub directory: String,
}

/// Board dimensions and player caps enforced by the setup and start flows.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct GameLimits {
    pub max_categories: usize,
    pub max_players: usize,
    pub board_rows: usize,
}

impl Default for GameLimits {
    fn default() -> Self {
        Self {
            max_categories: 5,
            max_players: 4,
            board_rows: 7,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub idle_timeout_minutes: i64,
    pub sweep_interval_secs: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let limits = GameLimits::default();

        Config::builder()
            .set_default("server.address", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("bank.directory", "question_banks")?
            .set_default("game.max_categories", limits.max_categories as u64)?
            .set_default("game.max_players", limits.max_players as u64)?
            .set_default("game.board_rows", limits.board_rows as u64)?
            .set_default("session.idle_timeout_minutes", 120)?
            .set_default("session.sweep_interval_secs", 300)?
            .add_source(
                Environment::with_prefix("TRIVIA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
