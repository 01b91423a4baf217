use crate::error::{TaiScoreError, TsResult};
use crate::state::{
    SelectionState, DEFAULT_BASE_SCORE, DEFAULT_POINT_VALUE, DEFAULT_REPEAT_COUNT,
};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Inputs for a single scoring session, from the command line or a JSON
/// table-defaults file.
///
/// Numeric fields are free text on purpose: malformed values are accepted
/// here and count as 0 when scored.
#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionInputs {
    /// Base score (底) awarded regardless of selected hands
    #[arg(long, default_value = DEFAULT_BASE_SCORE, allow_hyphen_values = true)]
    #[serde(deserialize_with = "text_or_number")]
    pub base_score: String,

    /// Money per tai
    #[arg(long, default_value = DEFAULT_POINT_VALUE, allow_hyphen_values = true)]
    #[serde(deserialize_with = "text_or_number")]
    pub point_value: String,

    /// Consecutive dealer wins (N in 2N+1)
    #[arg(long, default_value = DEFAULT_REPEAT_COUNT, allow_hyphen_values = true)]
    #[serde(deserialize_with = "text_or_number")]
    pub repeat_count: String,

    /// Selected hand, by name. Repeat for several hands.
    #[arg(long = "hand", value_name = "NAME")]
    pub hands: Vec<String>,
}

/// Numeric fields may be written as JSON numbers or as strings.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Int(v) => v.to_string(),
        // Kept as text, so a fractional value scores as malformed input
        Raw::Float(v) => v.to_string(),
        Raw::Text(s) => s,
    })
}

impl Default for SessionInputs {
    fn default() -> Self {
        Self {
            base_score: DEFAULT_BASE_SCORE.to_string(),
            point_value: DEFAULT_POINT_VALUE.to_string(),
            repeat_count: DEFAULT_REPEAT_COUNT.to_string(),
            hands: Vec::new(),
        }
    }
}

impl SessionInputs {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TaiScoreError::Config(format!("Could not read '{}': {}", path.display(), e))
        })?;
        let inputs: Self = serde_json::from_str(&content)?;
        debug!("Loaded session defaults from {}", path.display());
        Ok(inputs)
    }

    /// Overrides file values with arguments the user actually typed.
    pub fn merge_from_cli(&mut self, cli: &SessionInputs, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(base_score, "base_score");
        update_if_present!(point_value, "point_value");
        update_if_present!(repeat_count, "repeat_count");
        update_if_present!(hands, "hands");
    }

    pub fn into_state(self) -> SelectionState {
        let mut state = SelectionState::default()
            .with_base_score(self.base_score)
            .with_point_value(self.point_value)
            .with_repeat_count(self.repeat_count);
        state.selected.extend(self.hands);
        state
    }
}
