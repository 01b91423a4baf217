use crate::error::{TaiScoreError, TsResult};
use crate::numeric::parse_or_zero;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Name of the only parametric pattern in the standard table.
pub const REPEAT_WIN: &str = "連N拉N";

/// Standard Taiwanese table, in display order: (name, point label).
pub const STANDARD_ENTRIES: [(&str, &str); 38] = [
    (REPEAT_WIN, "2N+1"),
    ("單吊", "1"),
    ("中洞", "1"),
    ("邊張", "1"),
    ("自摸", "1"),
    ("門清", "1"),
    ("自摸門清", "3"),
    ("全求人", "2"),
    ("半求人", "1"),
    ("天胡", "24"),
    ("地胡", "16"),
    ("碰碰胡", "4"),
    ("平胡", "2"),
    ("大四喜", "16"),
    ("小四喜", "8"),
    ("大三元", "8"),
    ("小三元", "4"),
    ("五暗刻", "8"),
    ("四暗刻", "5"),
    ("三暗刻", "2"),
    ("清一色", "8"),
    ("混一色/湊一色", "4"),
    ("槓上開花", "1"),
    ("搶槓", "1"),
    ("海底撈月", "1"),
    ("海底撈魚", "1"),
    ("正花/花牌", "1"),
    ("門風", "1"),
    ("圈風", "1"),
    ("天聽", "8"),
    ("地聽", "4"),
    ("不求人", "1"),
    ("人胡", "8"),
    ("三元刻", "1"),
    ("字一色", "16"),
    ("八仙過海", "8"),
    ("七搶一", "8"),
    ("花槓", "1"),
];

/// Point formulas that depend on the repeat count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, Serialize, Deserialize)]
pub enum Formula {
    /// `2N + 1`, N being consecutive dealer wins.
    #[strum(serialize = "2N+1")]
    RepeatWin,
}

impl Formula {
    pub fn evaluate(&self, repeat_count: i64) -> i64 {
        match self {
            Self::RepeatWin => repeat_count.wrapping_mul(2).wrapping_add(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointValue {
    Fixed(i64),
    Parametric(Formula),
}

impl PointValue {
    /// Reads a display label. Formula labels map to `Parametric`, anything
    /// else is parsed as a fixed value (unparseable labels count as 0).
    pub fn from_label(label: &str) -> Self {
        match Formula::from_str(label) {
            Ok(formula) => Self::Parametric(formula),
            Err(_) => Self::Fixed(parse_or_zero(label)),
        }
    }

    pub fn points(&self, repeat_count: i64) -> i64 {
        match self {
            Self::Fixed(v) => *v,
            Self::Parametric(formula) => formula.evaluate(repeat_count),
        }
    }

    pub fn is_parametric(&self) -> bool {
        matches!(self, Self::Parametric(_))
    }
}

impl fmt::Display for PointValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(v) => write!(f, "{}", v),
            Self::Parametric(formula) => write!(f, "{}", formula),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPattern {
    pub name: String,
    pub value: PointValue,
}

impl ScoringPattern {
    pub fn new(name: impl Into<String>, value: PointValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn label(&self) -> String {
        self.value.to_string()
    }
}

/// Ordered, non-empty set of patterns keyed by unique name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    patterns: Vec<ScoringPattern>,
}

impl Catalog {
    pub fn standard() -> Self {
        let patterns = STANDARD_ENTRIES
            .iter()
            .map(|(name, label)| ScoringPattern::new(*name, PointValue::from_label(label)))
            .collect();
        Self { patterns }
    }

    /// Builds a catalog from arbitrary patterns, enforcing the catalog
    /// invariants (non-empty, unique names).
    pub fn from_entries(patterns: Vec<ScoringPattern>) -> TsResult<Self> {
        if patterns.is_empty() {
            return Err(TaiScoreError::Validation(
                "Catalog must contain at least one pattern".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for p in &patterns {
            if !seen.insert(p.name.as_str()) {
                return Err(TaiScoreError::Validation(format!(
                    "Duplicate pattern name '{}'",
                    p.name
                )));
            }
        }

        Ok(Self { patterns })
    }

    pub fn get(&self, name: &str) -> Option<&ScoringPattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoringPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
