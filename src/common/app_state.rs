use std::{sync::Arc, time::Duration};

use crate::{
    bank::store::BankStore,
    config::config::{AppConfig, GameLimits},
    session::session_store::SessionStore,
};

pub struct AppState {
    bank_store: BankStore,
    sessions: SessionStore,
    limits: GameLimits,
}

impl AppState {
    pub fn new(bank_store: BankStore, limits: GameLimits) -> Arc<Self> {
        Arc::new(Self {
            bank_store,
            sessions: SessionStore::new(limits),
            limits,
        })
    }

    pub fn from_config(config: &AppConfig) -> Arc<Self> {
        let state = Self::new(BankStore::new(&config.bank.directory), config.game);
        state.sessions.spawn_sweeper(
            Duration::from_secs(config.session.sweep_interval_secs),
            chrono::Duration::minutes(config.session.idle_timeout_minutes),
        );

        state
    }

    pub fn get_bank_store(&self) -> &BankStore {
        &self.bank_store
    }

    pub fn get_sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn get_limits(&self) -> &GameLimits {
        &self.limits
    }
}
