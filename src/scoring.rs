//! Outcome scoring
//!
//! ```text
//! percentage = score / max_score × 100
//! success    ⇔ percentage ≥ 70.0
//! ```
//!
//! The pass predicate is evaluated in integers (`score × 100 ≥ 70 × max`)
//! so that exactly 70% always passes regardless of float rounding.

use crate::registry::{Category, QuestionId};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Minimum percentage for the success path
pub const PASS_PERCENT: u32 = 70;

/// How many improvement areas the growth report lists
pub const FOCUS_AREA_LIMIT: usize = 5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScoreError {
    #[error("no questions were asked, so there is nothing to score (is the registry empty?)")]
    NothingAsked,

    #[error("score {score} exceeds the maximum {max_score}")]
    ScoreAboveMaximum { score: u32, max_score: u32 },
}

fn check(score: u32, max_score: u32) -> Result<(), ScoreError> {
    if max_score == 0 {
        return Err(ScoreError::NothingAsked);
    }
    if score > max_score {
        return Err(ScoreError::ScoreAboveMaximum { score, max_score });
    }
    Ok(())
}

/// `score / max_score × 100`
pub fn percentage(score: u32, max_score: u32) -> Result<f64, ScoreError> {
    check(score, max_score)?;
    Ok(score as f64 / max_score as f64 * 100.0)
}

/// Whether `score` out of `max_score` reaches the pass threshold
pub fn passes(score: u32, max_score: u32) -> Result<bool, ScoreError> {
    check(score, max_score)?;
    Ok(u64::from(score) * 100 >= u64::from(PASS_PERCENT) * u64::from(max_score))
}

/// Which closing path the report takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Success,
    Growth,
}

impl Verdict {
    pub fn for_score(score: u32, max_score: u32) -> Result<Self, ScoreError> {
        Ok(if passes(score, max_score)? {
            Verdict::Success
        } else {
            Verdict::Growth
        })
    }
}

/// Earned and possible points of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub earned: u32,
    pub possible: u32,
}

/// A question answered "no"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImprovementArea {
    pub id: QuestionId,
    pub category: Category,
    pub label: &'static str,
    pub prompt: &'static str,
}

/// Final state of a finished session
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub score: u32,
    pub max_score: u32,
    #[serde(serialize_with = "one_decimal")]
    pub percentage: f64,
    pub verdict: Verdict,
    pub categories: Vec<CategoryScore>,
    /// Questions answered "no", in the order they were answered
    pub improvement_areas: Vec<ImprovementArea>,
}

impl Evaluation {
    pub fn is_success(&self) -> bool {
        self.verdict == Verdict::Success
    }

    /// First `FOCUS_AREA_LIMIT` improvement areas plus the count left over
    pub fn focus_areas(&self) -> (&[ImprovementArea], usize) {
        let shown = self.improvement_areas.len().min(FOCUS_AREA_LIMIT);
        (
            &self.improvement_areas[..shown],
            self.improvement_areas.len() - shown,
        )
    }
}

fn one_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 10.0).round() / 10.0)
}
