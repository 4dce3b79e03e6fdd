use clap::Subcommand;

use crate::cli::subcommands::{CategoryCommands, DbCommands, QuestionCommands, QuizCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Question categories.
    Categories {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Question bank.
    Questions {
        #[command(subcommand)]
        action: QuestionCommands,
    },
    /// Quiz play.
    Quiz {
        #[command(subcommand)]
        action: QuizCommands,
    },
    /// Database management.
    Db {
        #[command(subcommand)]
        action: DbCommands,
    },
}
