use std::collections::HashSet;

use tracing::debug;

use crate::game::{
    error::GameError,
    models::{BoardCell, BoardColumn, Category, Player, Question, QuestionStatus, RevealOutcome},
};

/// Categories, players and scores for one play session.
///
/// Not internally synchronised. Whoever owns a `GameState` must serialise
/// access to it; the session store does this by holding the entry guard for
/// the whole duration of an operation.
#[derive(Debug, Clone)]
pub struct GameState {
    categories: Vec<Category>,
    players: Vec<Player>,
    board_control: usize,
}

impl GameState {
    pub fn initialize<I, S>(categories: Vec<Category>, players: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if categories.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "At least one category is required".into(),
            ));
        }

        let mut category_names = HashSet::new();
        for category in &categories {
            if !category_names.insert(category.name.as_str()) {
                return Err(GameError::InvalidConfiguration(format!(
                    "Duplicate category name '{}'",
                    category.name
                )));
            }
        }

        let mut seen = HashSet::new();
        let mut roster = Vec::new();
        for name in players {
            let name: String = name.into();
            if name.trim().is_empty() {
                return Err(GameError::InvalidConfiguration(
                    "Player names can not be blank".into(),
                ));
            }
            if !seen.insert(name.clone()) {
                return Err(GameError::InvalidConfiguration(format!(
                    "Duplicate player name '{}'",
                    name
                )));
            }
            roster.push(Player::new(name));
        }

        if roster.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "At least one player is required".into(),
            ));
        }

        let categories = categories
            .into_iter()
            .map(|mut category| {
                category
                    .questions
                    .iter_mut()
                    .for_each(|q| q.status = QuestionStatus::Unrevealed);
                category
            })
            .collect();

        Ok(Self {
            categories,
            players: roster,
            board_control: 0,
        })
    }

    pub fn reveal_question(
        &mut self,
        category: &str,
        index: usize,
    ) -> Result<RevealOutcome, GameError> {
        let question = self.question_mut(category, index)?;

        if question.status == QuestionStatus::Locked {
            return Err(GameError::AlreadyLocked {
                category: category.into(),
                index,
            });
        }

        if question.is_empty() {
            debug!("Reveal on empty slot {} in '{}'", index, category);
            return Ok(RevealOutcome::Empty);
        }

        question.status = QuestionStatus::Revealed;
        debug!("Revealed question {} in '{}'", index, category);

        Ok(RevealOutcome::Question {
            text: question.text.clone(),
            answer: question.answer.clone(),
            points: question.points,
        })
    }

    pub fn award_points(
        &mut self,
        category: &str,
        index: usize,
        player: &str,
    ) -> Result<i64, GameError> {
        let points = self.revealed_question(category, index)?.points;
        let player_idx = self.player_index(player)?;

        let score = self.players[player_idx]
            .score
            .checked_add(i64::from(points))
            .ok_or_else(|| {
                GameError::InvalidInput(format!(
                    "Awarding {} points would overflow the score of '{}'",
                    points, player
                ))
            })?;

        self.lock(category, index)?;

        let player = &mut self.players[player_idx];
        player.score = score;
        debug!(
            "Awarded {} points to '{}', score is now {}",
            points, player.name, player.score
        );

        Ok(player.score)
    }

    pub fn decline_award(&mut self, category: &str, index: usize) -> Result<(), GameError> {
        self.revealed_question(category, index)?;
        self.lock(category, index)?;
        debug!("No points awarded for question {} in '{}'", index, category);

        Ok(())
    }

    /// Overwrites a score from raw user input. Only base-10 integers are
    /// accepted; blank input is an error rather than zero.
    pub fn set_score_directly(&mut self, player: &str, raw: &str) -> Result<i64, GameError> {
        let player_idx = self.player_index(player)?;

        let trimmed = raw.trim();
        let score = trimmed.parse::<i64>().map_err(|_| {
            GameError::InvalidInput(format!("'{}' is not a whole number", trimmed))
        })?;

        self.players[player_idx].score = score;
        debug!("Score for '{}' manually set to {}", player, score);

        Ok(score)
    }

    /// Scores in registration order. Call again to restart.
    pub fn current_scores(&self) -> impl Iterator<Item = (&str, i64)> + Clone + '_ {
        self.players.iter().map(|p| (p.name.as_str(), p.score))
    }

    pub fn board(&self) -> Vec<BoardColumn> {
        self.categories
            .iter()
            .map(|c| BoardColumn {
                category: c.name.clone(),
                cells: c.questions.iter().map(BoardCell::from).collect(),
            })
            .collect()
    }

    /// Player whose turn it is. Informational only, any player may be awarded.
    pub fn current_player(&self) -> &str {
        &self.players[self.board_control].name
    }

    pub fn question(&self, category: &str, index: usize) -> Result<&Question, GameError> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .ok_or_else(|| GameError::NotFound(format!("Category '{}' does not exist", category)))?
            .questions
            .get(index)
            .ok_or_else(|| {
                GameError::NotFound(format!(
                    "Category '{}' has no question {}",
                    category, index
                ))
            })
    }

    pub fn is_finished(&self) -> bool {
        self.categories
            .iter()
            .flat_map(|c| c.questions.iter())
            .all(|q| q.is_empty() || q.status == QuestionStatus::Locked)
    }

    fn question_mut(&mut self, category: &str, index: usize) -> Result<&mut Question, GameError> {
        self.categories
            .iter_mut()
            .find(|c| c.name == category)
            .ok_or_else(|| GameError::NotFound(format!("Category '{}' does not exist", category)))?
            .questions
            .get_mut(index)
            .ok_or_else(|| {
                GameError::NotFound(format!(
                    "Category '{}' has no question {}",
                    category, index
                ))
            })
    }

    fn revealed_question(&self, category: &str, index: usize) -> Result<&Question, GameError> {
        let question = self.question(category, index)?;
        if question.status != QuestionStatus::Revealed {
            return Err(GameError::InvalidState {
                category: category.into(),
                index,
                status: question.status.to_string(),
            });
        }

        Ok(question)
    }

    fn player_index(&self, player: &str) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.name == player)
            .ok_or_else(|| GameError::NotFound(format!("Player '{}' does not exist", player)))
    }

    fn lock(&mut self, category: &str, index: usize) -> Result<(), GameError> {
        self.question_mut(category, index)?.status = QuestionStatus::Locked;
        self.board_control = (self.board_control + 1) % self.players.len();
        Ok(())
    }
}
