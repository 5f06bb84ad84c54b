//! Questionnaire session
//!
//! A [`Session`] owns the running totals of one run. Every recorded answer
//! adds the question's weight to `max_score`, and to `score` when the answer
//! is "yes", so `0 <= score <= max_score` holds after each step. Answers are
//! keyed by [`QuestionId`] and each question may be answered once.
//! [`Session::finish`] consumes the session and yields the [`Evaluation`].

use crate::output::Emitter;
use crate::prompt::{PromptError, Prompter};
use crate::registry::{Category, QuestionId, Registry};
use crate::report;
use crate::scoring::{self, CategoryScore, Evaluation, ImprovementArea, ScoreError, Verdict};
use std::io;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("question {0} was already answered")]
    AlreadyAnswered(QuestionId),

    #[error("question {0} is not part of the registry")]
    UnknownQuestion(QuestionId),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// A recorded answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub id: QuestionId,
    pub answer: bool,
}

/// Accumulated state of a single run
#[derive(Debug)]
pub struct Session<'r> {
    registry: &'r Registry,
    score: u32,
    max_score: u32,
    /// In the order answered
    responses: Vec<Response>,
    answered: Vec<bool>,
}

impl<'r> Session<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            score: 0,
            max_score: 0,
            responses: Vec::with_capacity(registry.len()),
            answered: vec![false; registry.len()],
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// Account for an accepted answer. Nothing changes on error.
    pub fn record(&mut self, id: QuestionId, answer: bool) -> Result<(), SessionError> {
        let registry = self.registry;
        let question = registry
            .get(id)
            .ok_or(SessionError::UnknownQuestion(id))?;
        if self.answered[id.index()] {
            return Err(SessionError::AlreadyAnswered(id));
        }

        self.answered[id.index()] = true;
        self.max_score += question.weight;
        if answer {
            self.score += question.weight;
        }
        self.responses.push(Response { id, answer });

        debug!(
            %id,
            answer,
            weight = question.weight,
            score = self.score,
            max_score = self.max_score,
            "recorded answer"
        );
        Ok(())
    }

    /// Present a question, wait for a valid answer and record it
    pub fn ask(
        &mut self,
        id: QuestionId,
        prompter: &mut dyn Prompter,
        out: &mut dyn Emitter,
    ) -> Result<bool, SessionError> {
        let registry = self.registry;
        let question = registry
            .get(id)
            .ok_or(SessionError::UnknownQuestion(id))?;
        if self.answered[id.index()] {
            return Err(SessionError::AlreadyAnswered(id));
        }

        report::question_header(out, question)?;
        let answer = prompter.prompt_yes_no(question, out)?;
        self.record(id, answer)?;
        Ok(answer)
    }

    /// Ask every question of `category` in registry order
    pub fn evaluate_category(
        &mut self,
        category: Category,
        prompter: &mut dyn Prompter,
        out: &mut dyn Emitter,
    ) -> Result<(), SessionError> {
        info!(%category, "evaluating category");
        report::category_banner(out, category)?;
        let registry = self.registry;
        for question in registry.in_category(category) {
            self.ask(question.id, prompter, out)?;
        }
        Ok(())
    }

    /// Evaluate every category in registry order
    pub fn run_all(
        &mut self,
        prompter: &mut dyn Prompter,
        out: &mut dyn Emitter,
    ) -> Result<(), SessionError> {
        for category in self.registry.categories() {
            self.evaluate_category(category, prompter, out)?;
        }
        Ok(())
    }

    /// Points earned and possible per category, over the questions answered
    pub fn category_scores(&self) -> Vec<CategoryScore> {
        let mut scores: Vec<CategoryScore> = Vec::new();
        for response in &self.responses {
            let Some(question) = self.registry.get(response.id) else {
                continue;
            };
            let earned = if response.answer { question.weight } else { 0 };
            match scores.iter_mut().find(|s| s.category == question.category) {
                Some(entry) => {
                    entry.earned += earned;
                    entry.possible += question.weight;
                }
                None => scores.push(CategoryScore {
                    category: question.category,
                    earned,
                    possible: question.weight,
                }),
            }
        }
        // Registry order, not answer order
        let order = self.registry.categories();
        scores.sort_by_key(|s| order.iter().position(|c| *c == s.category));
        scores
    }

    /// Questions answered "no", in the order they were answered
    pub fn improvement_areas(&self) -> Vec<ImprovementArea> {
        self.responses
            .iter()
            .filter(|r| !r.answer)
            .filter_map(|r| self.registry.get(r.id))
            .map(|q| ImprovementArea {
                id: q.id,
                category: q.category,
                label: q.label,
                prompt: q.prompt,
            })
            .collect()
    }

    /// Close the session and determine the outcome
    pub fn finish(self) -> Result<Evaluation, ScoreError> {
        let percentage = scoring::percentage(self.score, self.max_score)?;
        let verdict = Verdict::for_score(self.score, self.max_score)?;
        info!(
            score = self.score,
            max_score = self.max_score,
            percentage,
            ?verdict,
            "session evaluated"
        );
        Ok(Evaluation {
            score: self.score,
            max_score: self.max_score,
            percentage,
            verdict,
            categories: self.category_scores(),
            improvement_areas: self.improvement_areas(),
        })
    }
}
