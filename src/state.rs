use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum_macros::{Display, EnumIter, EnumString};

pub const DEFAULT_BASE_SCORE: &str = "3";
pub const DEFAULT_POINT_VALUE: &str = "10";
pub const DEFAULT_REPEAT_COUNT: &str = "0";

/// The three free-text numeric inputs of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    BaseScore,
    PointValue,
    RepeatCount,
}

/// Session inputs. Numeric fields keep the text exactly as entered and are
/// parsed on read, so malformed input is still echoed back to the user.
///
/// Every operation consumes the state and returns the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub selected: BTreeSet<String>,
    pub base_score: String,
    pub point_value: String,
    pub repeat_count: String,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
            base_score: DEFAULT_BASE_SCORE.to_string(),
            point_value: DEFAULT_POINT_VALUE.to_string(),
            repeat_count: DEFAULT_REPEAT_COUNT.to_string(),
        }
    }
}

impl SelectionState {
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    pub fn toggle_selection(mut self, name: &str) -> Self {
        if !self.selected.remove(name) {
            self.selected.insert(name.to_string());
        }
        self
    }

    pub fn reset_to_defaults(self) -> Self {
        Self::default()
    }

    pub fn with_base_score(mut self, text: impl Into<String>) -> Self {
        self.base_score = text.into();
        self
    }

    pub fn with_point_value(mut self, text: impl Into<String>) -> Self {
        self.point_value = text.into();
        self
    }

    pub fn with_repeat_count(mut self, text: impl Into<String>) -> Self {
        self.repeat_count = text.into();
        self
    }

    pub fn with_field(self, field: Field, text: impl Into<String>) -> Self {
        match field {
            Field::BaseScore => self.with_base_score(text),
            Field::PointValue => self.with_point_value(text),
            Field::RepeatCount => self.with_repeat_count(text),
        }
    }
}
