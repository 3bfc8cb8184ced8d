pub mod error;
pub mod game_state;
pub mod models;
