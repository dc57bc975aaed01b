//! CLI argument definitions for CanvasIntent.
//!
//! All `clap` structures live here so that `main.rs` stays focused on
//! dispatching subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CanvasIntent -- multilingual intent classification for a creative canvas.
#[derive(Parser)]
#[command(
    name = "canvasintent",
    version,
    about = "CanvasIntent -- classify canvas commands in any language",
    long_about = "Routes free-form canvas commands to a structured action plus parameters. \
                  This tool only classifies; it never executes anything."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Engine configuration file (TOML).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Registry document (JSON) replacing the built-in taxonomy.
    #[arg(long, global = true)]
    pub registry: Option<PathBuf>,

    /// Default log level when `RUST_LOG` is unset.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a command and print the full analysis as JSON.
    Classify {
        /// The command text.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Locale tag (e.g. `en`, `zh-CN`); detected when omitted.
        #[arg(long, short)]
        locale: Option<String>,
    },

    /// Print only the recommended action and its explanation.
    Recommend {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        #[arg(long, short)]
        locale: Option<String>,
    },

    /// Guess the locale of a text.
    DetectLocale {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List the entities found in a text.
    Entities {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Keep overlapping entities instead of resolving them.
        #[arg(long)]
        raw: bool,
    },

    /// Check whether an action fits a user request.
    Validate {
        /// The selected action name.
        action: String,

        /// The user's request.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Build an error-recovery payload.
    Recover {
        /// Error code, e.g. `ITEM_NOT_FOUND`.
        kind: String,

        /// The identifier that failed to resolve.
        #[arg(long)]
        failed_id: Option<String>,

        /// Known identifiers, comma separated.
        #[arg(long, value_delimiter = ',')]
        available: Vec<String>,

        /// The user's original request.
        #[arg(long)]
        input: Option<String>,

        /// The action that was attempted.
        #[arg(long)]
        action: Option<String>,

        /// The underlying error message.
        #[arg(long)]
        message: Option<String>,

        #[arg(long, short)]
        locale: Option<String>,

        /// Print JSON instead of formatted text.
        #[arg(long)]
        json: bool,
    },

    /// List the registry's concepts.
    Concepts {
        /// Locale used for the display term.
        #[arg(long, short)]
        locale: Option<String>,
    },
}

/// Join positional words back into one input string.
pub fn joined(words: &[String]) -> String {
    words.join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn classify_accepts_unquoted_words() {
        let cli = Cli::try_parse_from(["canvasintent", "classify", "draw", "a", "circle", "-l", "en"])
            .unwrap();
        match cli.command {
            Commands::Classify { text, locale } => {
                assert_eq!(joined(&text), "draw a circle");
                assert_eq!(locale.as_deref(), Some("en"));
            }
            _ => panic!("expected classify"),
        }
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn recover_splits_available_items() {
        let cli = Cli::try_parse_from([
            "canvasintent",
            "recover",
            "ITEM_NOT_FOUND",
            "--failed-id",
            "itme_1",
            "--available",
            "item_1,item_2",
            "--config",
            "engine.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("engine.toml")));
        match cli.command {
            Commands::Recover { available, failed_id, .. } => {
                assert_eq!(available, vec!["item_1", "item_2"]);
                assert_eq!(failed_id.as_deref(), Some("itme_1"));
            }
            _ => panic!("expected recover"),
        }
    }

    #[test]
    fn text_is_required() {
        assert!(Cli::try_parse_from(["canvasintent", "classify"]).is_err());
    }
}
