//! CLI command definitions and handlers

mod evaluate;
mod questions;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use life_evaluator::config::{self, DisplayOverrides, DisplaySettings, UserConfig};
use std::path::PathBuf;

/// Life Success Evaluator - a short questionnaire about wellbeing
#[derive(Parser, Debug)]
#[command(name = "life-evaluator")]
#[command(
    version,
    about = "Interactive questionnaire that scores wellbeing across six life categories",
    long_about = "Asks 22 yes/no questions about health, relationships, purpose, finances, \
happiness and contribution. Answers are weighted and totalled; 70% or more is a success, \
anything less lists the areas worth focusing on.\n\n\
Run without a subcommand to start the questionnaire:\n  \
life-evaluator",
    after_help = "\
Examples:
  life-evaluator                       Start the questionnaire
  life-evaluator --no-pacing           Skip the typewriter effect
  life-evaluator --format json         Print the evaluation as JSON on stdout
  life-evaluator questions             List every question with its weight
  life-evaluator config init           Write a default config file"
)]
pub struct Cli {
    /// Disable the typewriter effect and pauses
    #[arg(long, global = true)]
    pub no_pacing: bool,

    /// Never clear the screen
    #[arg(long, global = true)]
    pub no_clear: bool,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Disable emoji in headings
    #[arg(long, global = true)]
    pub no_emoji: bool,

    /// How to report the evaluation: text or json (json keeps stdout machine-readable)
    #[arg(long, short = 'f', global = true, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Config file to use instead of ~/.config/life-evaluator/config.toml
    #[arg(long, global = true, env = "LIFE_EVALUATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the questionnaire (default)
    Run,

    /// List the questions in the order they are asked
    Questions,

    /// Manage the user config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default config file (never overwrites)
    Init,
    /// Show the config path and effective display settings
    Show,
}

impl Cli {
    fn overrides(&self) -> DisplayOverrides {
        DisplayOverrides {
            no_pacing: self.no_pacing,
            no_clear: self.no_clear,
            no_color: self.no_color,
            no_emoji: self.no_emoji,
        }
    }

    fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(UserConfig::user_config_path)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let user_config = UserConfig::load(cli.config.as_deref())?;
    let settings = user_config.display_settings(cli.overrides());
    tracing::debug!(?settings, "display settings resolved");
    apply_color(&settings);

    match cli.command {
        Some(Commands::Questions) => questions::run(),
        Some(Commands::Config { ref action }) => run_config_action(&cli, action),
        Some(Commands::Run) | None => evaluate::run(settings, cli.format == "json"),
    }
}

/// Turn off ANSI styling for every command when colors are disabled
fn apply_color(settings: &DisplaySettings) {
    if !settings.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
}

fn run_config_action(cli: &Cli, action: &ConfigAction) -> Result<()> {
    let Some(path) = cli.config_path() else {
        anyhow::bail!("Could not determine a config directory; pass --config <PATH>");
    };
    match action {
        ConfigAction::Init => {
            if config::init_config_file(&path)? {
                println!("{} Config written to {}", style("✓").green(), style(path.display()).cyan());
            } else {
                println!(
                    "{} Config already exists at {}",
                    style("○").dim(),
                    style(path.display()).cyan()
                );
            }
            Ok(())
        }
        ConfigAction::Show => {
            let status = if path.exists() { "✓" } else { "(not found)" };
            println!("Config: {} {}", path.display(), status);

            let user_config = UserConfig::load(Some(&path))?;
            let settings = user_config.display_settings(cli.overrides());
            println!();
            println!("  pacing:        {}", settings.pacing);
            println!(
                "  char delay:    {}",
                settings
                    .char_delay
                    .map(|d| format!("{}ms", d.as_millis()))
                    .unwrap_or_else(|| "default".to_string())
            );
            println!("  clear screen:  {}", settings.clear_screen);
            println!("  color:         {}", settings.color);
            println!("  emoji:         {}", settings.emoji);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_questionnaire() {
        let cli = Cli::try_parse_from(["life-evaluator"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, "text");
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.no_pacing);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["life-evaluator", "run", "--no-pacing", "--format", "json"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::Run)));
        assert!(cli.no_pacing);
        assert_eq!(cli.format, "json");

        let overrides = cli.overrides();
        assert!(overrides.no_pacing);
        assert!(!overrides.no_emoji);
    }

    #[test]
    fn test_no_color_disables_styling_for_all_commands() {
        let cli = Cli::try_parse_from(["life-evaluator", "questions", "--no-color"]).unwrap();
        let settings = UserConfig::default().display_settings(cli.overrides());
        assert!(!settings.color);

        apply_color(&settings);
        assert!(!console::colors_enabled());
        assert!(!console::colors_enabled_stderr());
        assert_eq!(style("x1").yellow().to_string(), "x1");
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["life-evaluator", "--format", "xml"]).is_err());
    }
}
