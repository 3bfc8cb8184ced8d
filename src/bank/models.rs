use core::fmt;
use std::collections::HashSet;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::{
    config::config::GameLimits,
    game::{error::GameError, models::Category},
};

/// One saved question as it appears in a bank file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct QuestionRecord {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankCategory {
    pub name: String,
    pub questions: Vec<QuestionRecord>,
}

/// Categories and their questions in board order.
///
/// Serialized as a JSON object keyed by category name. Key order is the
/// column order and is kept on both serialize and deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionBank {
    categories: Vec<BankCategory>,
}

/// A question as typed into the setup form. Points arrive as raw text.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct QuestionDraft {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub points: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SetupCategory {
    pub name: String,
    #[serde(default)]
    pub questions: Vec<QuestionDraft>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SetupRequest {
    pub categories: Vec<SetupCategory>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EditQuestionRequest {
    pub category: String,
    pub index: usize,
    #[serde(flatten)]
    pub draft: QuestionDraft,
}

impl QuestionDraft {
    pub fn into_record(self) -> Result<QuestionRecord, GameError> {
        Ok(QuestionRecord {
            points: parse_points(self.points.as_deref())?,
            question: self.question,
            answer: self.answer,
        })
    }
}

/// Blank or missing points mean 0. Anything else must be a non-negative integer.
pub fn parse_points(raw: Option<&str>) -> Result<u32, GameError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0),
        Some(value) => value.parse::<u32>().map_err(|_| {
            GameError::InvalidInput(format!("'{}' is not a valid point value", value))
        }),
    }
}

impl QuestionBank {
    pub fn from_setup(request: SetupRequest, limits: &GameLimits) -> Result<Self, GameError> {
        let count = request.categories.len();
        if count == 0 || count > limits.max_categories {
            return Err(GameError::InvalidConfiguration(format!(
                "Expected between 1 and {} categories, got {}",
                limits.max_categories, count
            )));
        }

        let mut names = HashSet::new();
        let mut categories = Vec::with_capacity(count);

        for setup in request.categories {
            let name = setup.name.trim().to_string();
            if name.is_empty() {
                return Err(GameError::InvalidConfiguration(
                    "Category names can not be blank".into(),
                ));
            }
            if !names.insert(name.clone()) {
                return Err(GameError::InvalidConfiguration(format!(
                    "Duplicate category name '{}'",
                    name
                )));
            }
            if setup.questions.len() > limits.board_rows {
                return Err(GameError::InvalidConfiguration(format!(
                    "Category '{}' has {} questions, the board holds {}",
                    name,
                    setup.questions.len(),
                    limits.board_rows
                )));
            }

            let questions = setup
                .questions
                .into_iter()
                .map(QuestionDraft::into_record)
                .collect::<Result<Vec<_>, _>>()?;

            categories.push(BankCategory { name, questions });
        }

        let mut bank = Self { categories };
        bank.pad_to(limits.board_rows);
        Ok(bank)
    }

    /// Fills short categories with empty slots. Longer categories are left as is.
    pub fn pad_to(&mut self, rows: usize) {
        for category in &mut self.categories {
            if category.questions.len() < rows {
                category.questions.resize_with(rows, QuestionRecord::default);
            }
        }
    }

    pub fn edit_question(
        &mut self,
        category: &str,
        index: usize,
        draft: QuestionDraft,
    ) -> Result<(), GameError> {
        let record = draft.into_record()?;
        let slot = self
            .categories
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
            })?;

        *slot = record;
        Ok(())
    }

    pub fn categories(&self) -> &[BankCategory] {
        &self.categories
    }

    pub fn to_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .map(|c| {
                let mut category = Category::new(c.name.as_str());
                for record in &c.questions {
                    category.add_question(
                        record.question.as_str(),
                        record.answer.as_str(),
                        record.points,
                    );
                }
                category
            })
            .collect()
    }
}

impl Serialize for QuestionBank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.questions)?;
        }
        map.end()
    }
}

struct QuestionBankVisitor;

impl<'de> Visitor<'de> for QuestionBankVisitor {
    type Value = QuestionBank;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a map of category names to question lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut names = HashSet::new();
        let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));

        while let Some((name, questions)) =
            access.next_entry::<String, Vec<QuestionRecord>>()?
        {
            if !names.insert(name.clone()) {
                return Err(de::Error::custom(format!(
                    "duplicate category '{}'",
                    name
                )));
            }
            categories.push(BankCategory { name, questions });
        }

        Ok(QuestionBank { categories })
    }
}

impl<'de> Deserialize<'de> for QuestionBank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(QuestionBankVisitor)
    }
}
