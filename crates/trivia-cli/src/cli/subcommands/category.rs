use clap::Subcommand;

/// Category commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CategoryCommands {
    /// List categories ordered by label.
    List,
    /// List the questions in one category.
    Questions { id: i64 },
}
