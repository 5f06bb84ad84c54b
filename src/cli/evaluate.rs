//! Questionnaire command - run a full session and report the outcome

use anyhow::{Context, Result};
use life_evaluator::config::DisplaySettings;
use life_evaluator::output::TermEmitter;
use life_evaluator::prompt::{LinePrompter, Prompter};
use life_evaluator::{report, Registry, Session};

/// Run the questionnaire on the terminal.
///
/// With `json` set, all interactive output goes to stderr and stdout carries
/// only the evaluation document.
pub fn run(settings: DisplaySettings, json: bool) -> Result<()> {
    let mut out = if json {
        TermEmitter::stderr(settings)
    } else {
        TermEmitter::stdout(settings)
    };
    let mut prompter = LinePrompter::stdin();
    let registry = Registry::standard();

    report::intro(&mut out)?;
    prompter
        .wait_for_start(&mut out)
        .context("Questionnaire was not started")?;

    let mut session = Session::new(&registry);
    session
        .run_all(&mut prompter, &mut out)
        .context("Questionnaire ended before every question was answered")?;

    report::calculating(&mut out)?;
    let evaluation = session.finish()?;

    if json {
        println!("{}", report::render_json(&evaluation)?);
    } else {
        report::render_text(&mut out, &evaluation)?;
    }
    tracing::debug!(verdict = ?evaluation.verdict, "report rendered");
    Ok(())
}
