//! Presentation of the questionnaire
//!
//! Renders the intro, category banners, question headers and the final
//! evaluation through an [`Emitter`]. The success path ends with the
//! affirmation list; the growth path lists focus areas and is followed by
//! the closing reminder. The closing reminder is not shown on success.

use crate::output::{Emitter, Pace, Tone};
use crate::registry::{Category, Question};
use crate::scoring::Evaluation;
use anyhow::Result;
use std::io;
use std::time::Duration;

const SEPARATOR_WIDTH: usize = 60;

/// Pause shown while "calculating" the results
pub const CALCULATING_PAUSE: Duration = Duration::from_millis(1500);

const SUCCESS_ITEMS: [(&str, &str); 4] = [
    ("💪", "Keep being awesome!"),
    ("🌟", "Continue pursuing your goals!"),
    ("❤️ ", "Cherish your relationships!"),
    ("🎯", "Live with purpose!"),
];

const REMINDER_ITEMS: [(&str, &str); 5] = [
    ("🌱", "Growth takes time"),
    ("💪", "Small steps lead to big changes"),
    ("🎯", "Your worth isn't defined by a score"),
    ("❤️ ", "You have the power to improve your life"),
    ("🌟", "Every day is a new opportunity"),
];

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Prefix `text` with `icon` when the emitter shows emoji
fn decorate(out: &dyn Emitter, icon: &str, text: &str) -> String {
    if out.emoji() {
        format!("{icon} {text}")
    } else {
        text.to_string()
    }
}

/// Surround `text` with `icon` on both sides when the emitter shows emoji
fn bracket(out: &dyn Emitter, icon: &str, text: &str) -> String {
    if out.emoji() {
        format!("{icon} {text} {icon}")
    } else {
        text.to_string()
    }
}

/// Title screen shown before the start gate
pub fn intro(out: &mut dyn Emitter) -> io::Result<()> {
    out.clear()?;
    out.line(&format!("\n{}", separator()))?;
    out.typed("LIFE SUCCESS EVALUATOR", Tone::Cyan, Pace::Slow)?;
    out.line(&separator())?;
    out.line("\nAnswer honestly to evaluate your success across")?;
    out.line("the key dimensions of a fulfilling life.\n")?;
    out.line(&separator())
}

/// Banner printed before a category's questions
pub fn category_banner(out: &mut dyn Emitter, category: Category) -> io::Result<()> {
    out.line(&format!("\n{}", separator()))?;
    let heading = decorate(out, category.icon(), category.heading());
    out.typed(&heading, category.tone(), Pace::Quick)?;
    out.line(&separator())
}

/// Label and prompt printed before each answer is read
pub fn question_header(out: &mut dyn Emitter, question: &Question) -> io::Result<()> {
    out.line(&format!("\n{}", question.label.to_uppercase()))?;
    out.line(&separator())?;
    out.line(&format!("\n{}", question.prompt))
}

/// Short pause between the last answer and the results
pub fn calculating(out: &mut dyn Emitter) -> io::Result<()> {
    out.line(&format!("\n{}", separator()))?;
    out.wait("Calculating your results...", CALCULATING_PAUSE)
}

/// Render the evaluation as styled text
pub fn render_text(out: &mut dyn Emitter, evaluation: &Evaluation) -> io::Result<()> {
    if evaluation.is_success() {
        celebrate(out, evaluation)
    } else {
        room_for_growth(out, evaluation)?;
        closing_reminder(out)
    }
}

/// Render the evaluation as pretty JSON
pub fn render_json(evaluation: &Evaluation) -> Result<String> {
    Ok(serde_json::to_string_pretty(evaluation)?)
}

fn score_lines(out: &mut dyn Emitter, evaluation: &Evaluation) -> io::Result<()> {
    let line = format!(
        "You scored: {}/{} ({:.1}%)",
        evaluation.score, evaluation.max_score, evaluation.percentage
    );
    let line = decorate(out, "✨", &line);
    out.line(&format!("\n{line}"))?;

    if !evaluation.categories.is_empty() {
        out.line("")?;
        for c in &evaluation.categories {
            out.line(&format!(
                "  {:<28} {}/{}",
                c.category.heading(),
                c.earned,
                c.possible
            ))?;
        }
    }
    out.line(&format!("\n{}", separator()))
}

fn celebrate(out: &mut dyn Emitter, evaluation: &Evaluation) -> io::Result<()> {
    out.clear()?;
    out.line(&format!("\n{}", separator()))?;
    let title = bracket(out, "🎉", "SUCCESS ACHIEVED!");
    out.typed(&title, Tone::Green, Pace::Slow)?;
    out.line(&separator())?;
    score_lines(out, evaluation)?;

    out.typed("\nYou're living a successful life!", Tone::Green, Pace::Quick)?;
    out.line("\nYou've cultivated strong foundations across multiple")?;
    out.line("dimensions of wellbeing. Keep nurturing these areas")?;
    out.line("and continue to grow!")?;
    out.line(&format!("\n{}", separator()))?;
    for (icon, text) in SUCCESS_ITEMS {
        let item = decorate(out, icon, text);
        out.line(&format!("\n{item}"))?;
    }
    out.line("")
}

fn room_for_growth(out: &mut dyn Emitter, evaluation: &Evaluation) -> io::Result<()> {
    out.clear()?;
    out.line(&format!("\n{}", separator()))?;
    let title = decorate(out, "📈", "ROOM FOR GROWTH");
    out.typed(&title, Tone::Yellow, Pace::Slow)?;
    out.line(&separator())?;
    score_lines(out, evaluation)?;

    out.typed("\nEvery journey has its challenges.", Tone::Cyan, Pace::Quick)?;
    out.line("\nSuccess isn't about being perfect, it's about progress.")?;
    out.line("Let's identify areas where you can grow...")?;

    let heading = decorate(out, "💡", "AREAS TO FOCUS ON:");
    out.line(&format!("\n{}\n{}\n{}", separator(), heading, separator()))?;

    let (shown, remaining) = evaluation.focus_areas();
    for (i, area) in shown.iter().enumerate() {
        out.line(&format!("\n{}. {}", i + 1, area.prompt))?;
    }
    if remaining > 0 {
        out.line(&format!("\n... and {} more areas", remaining))?;
    }
    Ok(())
}

fn closing_reminder(out: &mut dyn Emitter) -> io::Result<()> {
    out.line(&format!("\n{}", separator()))?;
    let title = bracket(out, "✨", "REMEMBER");
    out.typed(&title, Tone::Magenta, Pace::Slow)?;
    out.line(&separator())?;
    for (icon, text) in REMINDER_ITEMS {
        let item = decorate(out, icon, text);
        out.line(&format!("\n{item}"))?;
    }
    out.line(&format!("\n{}", separator()))?;
    let sendoff = decorate(out, "🚀", "You've got this! Keep going!");
    out.typed(&format!("\n{sendoff}"), Tone::Green, Pace::Normal)?;
    out.line(&format!("{}\n", separator()))
}
