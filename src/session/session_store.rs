use std::{sync::Arc, time::Duration};

use chrono::Utc;
use dashmap::DashMap;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    bank::models::QuestionBank,
    config::config::GameLimits,
    game::{error::GameError, game_state::GameState},
    session::models::{GameSession, SessionView},
};

/// Live games keyed by session id.
///
/// Each `GameState` is only touched while its entry guard is held, so two
/// requests for the same session never interleave. Guards must not be held
/// across an `.await`.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<Uuid, GameSession>>,
    limits: GameLimits,
}

impl SessionStore {
    pub fn new(limits: GameLimits) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            limits,
        }
    }

    pub fn start(
        &self,
        bank: &QuestionBank,
        bank_name: Option<String>,
        players: Vec<String>,
    ) -> Result<SessionView, GameError> {
        if players.len() > self.limits.max_players {
            return Err(GameError::InvalidConfiguration(format!(
                "At most {} players can join a game, got {}",
                self.limits.max_players,
                players.len()
            )));
        }

        let state = GameState::initialize(bank.to_categories(), players)?;
        let session = GameSession::new(bank_name, state);
        let view = session.to_view();

        info!("Started game session {}", session.id);
        self.sessions.insert(session.id, session);

        Ok(view)
    }

    /// Runs `f` against one session while holding its entry exclusively.
    pub fn with_session<T, F>(&self, id: &Uuid, f: F) -> Result<T, GameError>
    where
        F: FnOnce(&mut GameState) -> Result<T, GameError>,
    {
        let mut session = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| GameError::NotFound(format!("Session {} does not exist", id)))?;

        session.touch();
        f(&mut session.state)
    }

    pub fn view(&self, id: &Uuid) -> Result<SessionView, GameError> {
        self.sessions
            .get(id)
            .map(|s| s.to_view())
            .ok_or_else(|| GameError::NotFound(format!("Session {} does not exist", id)))
    }

    pub fn end(&self, id: &Uuid) -> Result<(), GameError> {
        self.sessions
            .remove(id)
            .map(|_| info!("Ended game session {}", id))
            .ok_or_else(|| GameError::NotFound(format!("Session {} does not exist", id)))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Drops sessions idle for longer than `max_idle`. Returns how many went.
    pub fn purge_idle(&self, max_idle: chrono::Duration) -> usize {
        let cutoff = Utc::now() - max_idle;
        let before = self.sessions.len();
        self.sessions.retain(|_, s| s.last_active > cutoff);

        before.saturating_sub(self.sessions.len())
    }

    pub fn spawn_sweeper(&self, every: Duration, max_idle: chrono::Duration) {
        let store = self.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                debug!("SessionStore is sweeping idle sessions");
                let purged = store.purge_idle(max_idle);
                if purged > 0 {
                    info!("Purged {} idle game sessions", purged);
                }
            }
        });
    }
}
