use clap::Subcommand;

/// Database commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DbCommands {
    /// Drop all rows and load default categories and sample questions.
    Init,
}
