use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    bank::models::SetupRequest,
    game::{game_state::GameState, models::BoardColumn},
};

#[derive(Debug)]
pub struct GameSession {
    pub id: Uuid,
    pub bank: Option<String>,
    pub state: GameState,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl GameSession {
    pub fn new(bank: Option<String>, state: GameState) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            bank,
            state,
            created_at: now,
            last_active: now,
        }
    }

    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }

    pub fn to_view(&self) -> SessionView {
        SessionView {
            id: self.id,
            bank: self.bank.clone(),
            board: self.state.board(),
            scores: PlayerScore::collect(&self.state),
            board_control: self.state.current_player().to_string(),
            finished: self.state.is_finished(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    pub name: String,
    pub score: i64,
}

impl PlayerScore {
    pub fn collect(state: &GameState) -> Vec<Self> {
        state
            .current_scores()
            .map(|(name, score)| PlayerScore {
                name: name.to_string(),
                score,
            })
            .collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionView {
    pub id: Uuid,
    pub bank: Option<String>,
    pub board: Vec<BoardColumn>,
    pub scores: Vec<PlayerScore>,
    pub board_control: String,
    pub finished: bool,
    pub created_at: DateTime<Utc>,
}

/// Start a game either from a saved bank or from an inline setup.
#[derive(Debug, Serialize, Deserialize)]
pub struct StartSessionRequest {
    pub bank: Option<String>,
    pub setup: Option<SetupRequest>,
    pub players: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionRef {
    pub category: String,
    pub index: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AwardRequest {
    pub category: String,
    pub index: usize,
    pub player: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreEditRequest {
    pub player: String,
    pub score: String,
}
