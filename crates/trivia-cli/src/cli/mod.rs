use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `trivia` binary.
#[derive(Debug, Parser)]
#[command(name = "trivia", version, about = "Trivia - question bank and quiz player")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./trivia.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Bearer token for permission-guarded commands
    #[arg(long, global = true)]
    pub token: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
            token: self.token.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{CategoryCommands, QuestionCommands, QuizCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "trivia", "--format", "table", "--verbose", "categories", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Categories {
                action: CategoryCommands::List
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["trivia", "questions", "list", "--format", "raw", "-q"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn questions_list_defaults_to_first_page() {
        let cli = Cli::try_parse_from(["trivia", "questions", "list"]).expect("cli should parse");
        match cli.command {
            Commands::Questions {
                action: QuestionCommands::List { page },
            } => assert_eq!(page, 1),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn questions_list_accepts_negative_page() {
        let cli = Cli::try_parse_from(["trivia", "questions", "list", "--page", "-1"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Questions {
                action: QuestionCommands::List { page: -1 }
            }
        ));
    }

    #[test]
    fn quiz_collects_repeated_previous_ids() {
        let cli = Cli::try_parse_from([
            "trivia", "quiz", "next", "--category", "6", "--previous", "4", "--previous", "9",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Quiz {
                action:
                    QuizCommands::Next {
                        category,
                        previous,
                        body,
                    },
            } => {
                assert_eq!(category, Some(6));
                assert_eq!(previous, vec![4, 9]);
                assert!(body.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn add_body_conflicts_with_field_flags() {
        let parsed = Cli::try_parse_from([
            "trivia", "questions", "add", "--body", "{}", "--question", "q",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["trivia", "--format", "xml", "categories", "list"]);
        assert!(parsed.is_err());
    }
}
