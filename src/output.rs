//! Output capability for the questionnaire
//!
//! Everything the questionnaire prints goes through an [`Emitter`]. The
//! terminal implementation adds color, a typewriter effect and a spinner;
//! [`MemoryEmitter`] captures plain text so flows can be asserted in tests.

use crate::config::DisplaySettings;
use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::time::Duration;

/// Accent colors used by the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Green,
    Red,
    Cyan,
    Yellow,
    Magenta,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Tone::Plain => Style::new(),
            Tone::Green => Style::new().green().bright(),
            Tone::Red => Style::new().red().bright(),
            Tone::Cyan => Style::new().cyan().bright(),
            Tone::Yellow => Style::new().yellow().bright(),
            Tone::Magenta => Style::new().magenta().bright(),
        }
    }
}

/// Typewriter speed for [`Emitter::typed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Titles and verdict headings
    Slow,
    /// Closing lines
    Normal,
    /// Category banners and short remarks
    Quick,
}

impl Pace {
    pub fn char_delay(self) -> Duration {
        match self {
            Pace::Slow => Duration::from_millis(50),
            Pace::Normal => Duration::from_millis(30),
            Pace::Quick => Duration::from_millis(20),
        }
    }
}

/// Sink for questionnaire output
pub trait Emitter {
    /// Write text without a trailing newline and flush it (used for input prompts)
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write a full line
    fn line(&mut self, text: &str) -> io::Result<()>;

    /// Write a full line in an accent color
    fn styled(&mut self, text: &str, tone: Tone) -> io::Result<()>;

    /// Write a line character by character; falls back to [`Emitter::styled`]
    fn typed(&mut self, text: &str, tone: Tone, _pace: Pace) -> io::Result<()> {
        self.styled(text, tone)
    }

    /// Reset the display between phases
    fn clear(&mut self) -> io::Result<()>;

    /// Show a progress message for `duration` (pacing only)
    fn wait(&mut self, message: &str, _duration: Duration) -> io::Result<()> {
        self.styled(message, Tone::Yellow)
    }

    /// Whether headings should carry emoji
    fn emoji(&self) -> bool {
        true
    }
}

/// Emitter backed by a `console::Term` (stdout or stderr)
pub struct TermEmitter {
    term: Term,
    stderr: bool,
    settings: DisplaySettings,
}

impl TermEmitter {
    pub fn stdout(settings: DisplaySettings) -> Self {
        Self::new(Term::stdout(), false, settings)
    }

    /// Used when stdout is reserved for machine-readable output
    pub fn stderr(settings: DisplaySettings) -> Self {
        Self::new(Term::stderr(), true, settings)
    }

    fn new(term: Term, stderr: bool, mut settings: DisplaySettings) -> Self {
        if !term.is_term() {
            // Piped output gets no pauses or screen resets
            settings.pacing = false;
            settings.clear_screen = false;
        }
        if !settings.color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
        tracing::debug!(?settings, stderr, "terminal emitter ready");
        Self {
            term,
            stderr,
            settings,
        }
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        let style = if self.stderr {
            tone.style().for_stderr()
        } else {
            tone.style()
        };
        style.apply_to(text).to_string()
    }

    fn delay_for(&self, pace: Pace) -> Duration {
        self.settings.char_delay.unwrap_or_else(|| pace.char_delay())
    }
}

impl Emitter for TermEmitter {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        self.term.flush()
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    fn styled(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        let painted = self.paint(text, tone);
        self.term.write_line(&painted)
    }

    fn typed(&mut self, text: &str, tone: Tone, pace: Pace) -> io::Result<()> {
        if !self.settings.pacing {
            return self.styled(text, tone);
        }
        let delay = self.delay_for(pace);
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            let painted = self.paint(ch.encode_utf8(&mut buf), tone);
            self.term.write_str(&painted)?;
            self.term.flush()?;
            std::thread::sleep(delay);
        }
        self.term.write_line("")
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.settings.clear_screen {
            self.term.clear_screen()?;
        }
        Ok(())
    }

    fn wait(&mut self, message: &str, duration: Duration) -> io::Result<()> {
        if !self.settings.pacing {
            return self.styled(message, Tone::Yellow);
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
                .template("{spinner:.yellow} {msg}")
                .expect("valid spinner template"),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        std::thread::sleep(duration);
        spinner.finish_and_clear();
        self.styled(message, Tone::Yellow)
    }

    fn emoji(&self) -> bool {
        self.settings.emoji
    }
}

/// Emitter that records plain text in memory
#[derive(Debug, Clone)]
pub struct MemoryEmitter {
    buffer: String,
    clears: usize,
    emoji: bool,
}

impl MemoryEmitter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            clears: 0,
            emoji: true,
        }
    }

    pub fn without_emoji() -> Self {
        Self {
            emoji: false,
            ..Self::new()
        }
    }

    /// Everything written so far
    pub fn output(&self) -> &str {
        &self.buffer
    }

    /// Number of screen resets requested
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Default for MemoryEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for MemoryEmitter {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.buffer.push_str(text);
        Ok(())
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        self.buffer.push_str(text);
        self.buffer.push('\n');
        Ok(())
    }

    fn styled(&mut self, text: &str, _tone: Tone) -> io::Result<()> {
        self.line(text)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn emoji(&self) -> bool {
        self.emoji
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_emitter_records_text() {
        let mut out = MemoryEmitter::new();
        out.write("prompt: ").unwrap();
        out.line("answer").unwrap();
        out.typed("slow title", Tone::Cyan, Pace::Slow).unwrap();
        out.wait("Calculating...", Duration::from_secs(5)).unwrap();
        out.clear().unwrap();

        assert_eq!(out.output(), "prompt: answer\nslow title\nCalculating...\n");
        assert_eq!(out.clears(), 1);
        assert!(out.emoji());
        assert!(!MemoryEmitter::without_emoji().emoji());
    }

    #[test]
    fn test_pace_delays_are_ordered() {
        assert!(Pace::Slow.char_delay() > Pace::Normal.char_delay());
        assert!(Pace::Normal.char_delay() > Pace::Quick.char_delay());
    }
}
