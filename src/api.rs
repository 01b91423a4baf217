use crate::catalog::Catalog;
use crate::scorer::{ScoreDetails, Scorer};
use crate::state::{Field, SelectionState};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A user intent coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Toggle(String),
    Edit(Field, String),
    Reset,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatternView {
    pub name: String,
    pub label: String,
    pub selected: bool,
}

/// Everything a front end needs to redraw after an action.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreView {
    pub base_score: String,
    pub point_value: String,
    pub repeat_count: String,
    pub selected: Vec<String>,
    pub total_score: i64,
    pub total_payout: i64,
}

/// One scoring session: the catalog plus the current selection state.
///
/// Actions replace the state with the value returned by the matching state
/// operation; views are recomputed on every read.
#[derive(Debug, Clone, Default)]
pub struct Session {
    scorer: Scorer,
    state: SelectionState,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_state(catalog, SelectionState::default())
    }

    pub fn with_state(catalog: Catalog, state: SelectionState) -> Self {
        Self {
            scorer: Scorer::new(catalog),
            state,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.scorer.catalog
    }

    pub fn apply(&mut self, action: Action) -> ScoreView {
        debug!("Applying {:?}", action);
        let current = std::mem::take(&mut self.state);
        self.state = match action {
            Action::Toggle(name) => {
                if !self.scorer.catalog.contains(&name) {
                    warn!("'{}' is not a known hand and scores nothing", name);
                }
                current.toggle_selection(&name)
            }
            Action::Edit(field, text) => current.with_field(field, text),
            Action::Reset => current.reset_to_defaults(),
        };
        self.view()
    }

    pub fn patterns(&self) -> Vec<PatternView> {
        self.scorer
            .catalog
            .iter()
            .map(|p| PatternView {
                name: p.name.clone(),
                label: p.label(),
                selected: self.state.is_selected(&p.name),
            })
            .collect()
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            base_score: self.state.base_score.clone(),
            point_value: self.state.point_value.clone(),
            repeat_count: self.state.repeat_count.clone(),
            selected: self.state.selected.iter().cloned().collect(),
            total_score: self.scorer.total_score(&self.state),
            total_payout: self.scorer.total_payout(&self.state),
        }
    }

    pub fn details(&self) -> ScoreDetails {
        self.scorer.score_details(&self.state)
    }
}
