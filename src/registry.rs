//! Question registry
//!
//! The fixed, ordered set of yes/no questions asked in every run. Questions
//! are grouped into six [`Category`] values and identified by a stable
//! [`QuestionId`] (their position in the registry), so answers never depend
//! on prompt text.

use crate::output::Tone;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while building a registry
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("question registry is empty: nothing to score")]
    Empty,

    #[error("question {id} ({prompt:?}) has weight 0; weights must be at least 1")]
    ZeroWeight { id: QuestionId, prompt: String },

    #[error("prompt {prompt:?} is used by both question {first} and question {second}")]
    DuplicatePrompt {
        prompt: String,
        first: QuestionId,
        second: QuestionId,
    },

    #[error("question at position {position} carries id {id}")]
    MisplacedId { position: usize, id: QuestionId },
}

/// Stable identifier of a question: its index in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionId(pub u16);

impl QuestionId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Life dimension grouping related questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Health,
    Relationships,
    Purpose,
    Financial,
    Happiness,
    Contribution,
}

impl Category {
    /// All categories in the order they are evaluated
    pub const ALL: [Category; 6] = [
        Category::Health,
        Category::Relationships,
        Category::Purpose,
        Category::Financial,
        Category::Happiness,
        Category::Contribution,
    ];

    /// Banner text shown before the category's questions
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Health => "HEALTH & PHYSICAL WELLBEING",
            Category::Relationships => "RELATIONSHIPS & CONNECTION",
            Category::Purpose => "PURPOSE & PERSONAL GROWTH",
            Category::Financial => "FINANCIAL WELLBEING",
            Category::Happiness => "HAPPINESS & FULFILLMENT",
            Category::Contribution => "CONTRIBUTION & IMPACT",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Health => "💪",
            Category::Relationships => "❤️ ",
            Category::Purpose => "🎯",
            Category::Financial => "💰",
            Category::Happiness => "😊",
            Category::Contribution => "🌟",
        }
    }

    /// Accent color of the banner
    pub fn tone(&self) -> Tone {
        match self {
            Category::Health => Tone::Cyan,
            Category::Relationships => Tone::Magenta,
            Category::Purpose => Tone::Yellow,
            Category::Financial => Tone::Green,
            Category::Happiness => Tone::Cyan,
            Category::Contribution => Tone::Magenta,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Health => write!(f, "health"),
            Category::Relationships => write!(f, "relationships"),
            Category::Purpose => write!(f, "purpose"),
            Category::Financial => write!(f, "financial"),
            Category::Happiness => write!(f, "happiness"),
            Category::Contribution => write!(f, "contribution"),
        }
    }
}

/// A single weighted yes/no question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub category: Category,
    /// Short heading shown above the prompt, e.g. "Physical Health"
    pub label: &'static str,
    pub prompt: &'static str,
    /// Points added to the maximum always, and to the score on "yes"
    pub weight: u32,
}

/// Registry entry before ids are assigned: (category, label, prompt, weight)
type Entry = (Category, &'static str, &'static str, u32);

#[rustfmt::skip]
const STANDARD: &[Entry] = &[
    (Category::Health, "Physical Health", "Do you feel physically healthy and energetic most days?", 1),
    (Category::Health, "Mental Health", "Are you generally free from chronic stress or anxiety?", 1),
    (Category::Health, "Self-Care", "Do you take time to care for your physical and mental health?", 1),
    (Category::Health, "Sleep", "Do you get enough quality sleep regularly?", 1),
    (Category::Relationships, "Close Relationships", "Do you have meaningful relationships with people who care about you?", 1),
    (Category::Relationships, "Social Support", "Do you feel supported when going through difficult times?", 1),
    (Category::Relationships, "Connection", "Do you regularly connect with friends or loved ones?", 1),
    (Category::Relationships, "Communication", "Can you express your feelings and needs to others effectively?", 1),
    (Category::Purpose, "Life Purpose", "Do you feel your life has meaning and purpose?", 2),
    (Category::Purpose, "Goals", "Are you working towards goals that matter to you?", 1),
    (Category::Purpose, "Learning", "Do you actively seek to learn and grow as a person?", 1),
    (Category::Purpose, "Values", "Are you living in alignment with your core values?", 1),
    (Category::Financial, "Basic Needs", "Can you comfortably afford your basic needs (food, shelter, healthcare)?", 1),
    (Category::Financial, "Financial Stress", "Are you generally free from constant financial worry?", 1),
    (Category::Financial, "Future Planning", "Are you able to save or plan for your future?", 1),
    (Category::Happiness, "Daily Joy", "Do you experience moments of joy or contentment regularly?", 2),
    (Category::Happiness, "Gratitude", "Do you feel grateful for aspects of your life?", 1),
    (Category::Happiness, "Present Moment", "Can you enjoy the present moment without constant worry?", 1),
    (Category::Happiness, "Optimism", "Do you generally feel hopeful about your future?", 1),
    (Category::Contribution, "Positive Impact", "Do you feel you make a positive difference in others' lives?", 1),
    (Category::Contribution, "Community", "Are you part of a community or cause you care about?", 1),
    (Category::Contribution, "Helping Others", "Do you regularly help or support others in some way?", 1),
];

/// Ordered, validated set of questions
#[derive(Debug, Clone)]
pub struct Registry {
    questions: Vec<Question>,
}

impl Registry {
    /// The fixed registry replayed identically on every run
    pub fn standard() -> Self {
        let questions = STANDARD
            .iter()
            .enumerate()
            .map(|(i, &(category, label, prompt, weight))| Question {
                id: QuestionId(i as u16),
                category,
                label,
                prompt,
                weight,
            })
            .collect();
        Self { questions }
    }

    /// Build a registry from explicit questions, validating ids, weights and prompts
    pub fn new(questions: Vec<Question>) -> Result<Self, RegistryError> {
        if questions.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen: Vec<(&str, QuestionId)> = Vec::with_capacity(questions.len());
        for (position, q) in questions.iter().enumerate() {
            if q.id.index() != position {
                return Err(RegistryError::MisplacedId { position, id: q.id });
            }
            if q.weight == 0 {
                return Err(RegistryError::ZeroWeight {
                    id: q.id,
                    prompt: q.prompt.to_string(),
                });
            }
            if let Some(&(_, first)) = seen.iter().find(|(p, _)| *p == q.prompt) {
                return Err(RegistryError::DuplicatePrompt {
                    prompt: q.prompt.to_string(),
                    first,
                    second: q.id,
                });
            }
            seen.push((q.prompt, q.id));
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(id.index())
    }

    pub(crate) fn len(&self) -> usize {
        self.questions.len()
    }

    /// Questions of one category, in registry order
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Question> + '_ {
        self.questions.iter().filter(move |q| q.category == category)
    }

    /// Categories that have at least one question, in first-appearance order
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = HashSet::new();
        self.questions
            .iter()
            .map(|q| q.category)
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Sum of all weights: the maximum score of a complete run
    pub fn max_score(&self) -> u32 {
        self.questions.iter().map(|q| q.weight).sum()
    }
}
