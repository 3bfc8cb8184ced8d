use core::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    Unrevealed,
    Revealed,
    Locked,
}

impl fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionStatus::Unrevealed => write!(f, "unrevealed"),
            QuestionStatus::Revealed => write!(f, "revealed"),
            QuestionStatus::Locked => write!(f, "locked"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub answer: String,
    pub points: u32,
    pub status: QuestionStatus,
}

impl Question {
    pub fn new(text: impl Into<String>, answer: impl Into<String>, points: u32) -> Self {
        Self {
            text: text.into(),
            answer: answer.into(),
            points,
            status: QuestionStatus::Unrevealed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            questions: vec![],
        }
    }

    pub fn add_question(
        &mut self,
        text: impl Into<String>,
        answer: impl Into<String>,
        points: u32,
    ) {
        self.questions.push(Question::new(text, answer, points));
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: i64,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RevealOutcome {
    /// The slot has no question text; nothing changed.
    Empty,
    Question {
        text: String,
        answer: String,
        points: u32,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BoardCell {
    pub points: u32,
    pub status: QuestionStatus,
    pub empty: bool,
}

impl From<&Question> for BoardCell {
    fn from(question: &Question) -> Self {
        Self {
            points: question.points,
            status: question.status,
            empty: question.is_empty(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BoardColumn {
    pub category: String,
    pub cells: Vec<BoardCell>,
}
