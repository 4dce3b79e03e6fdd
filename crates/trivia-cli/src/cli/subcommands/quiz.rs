use clap::Subcommand;

/// Quiz commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuizCommands {
    /// Draw one random question not yet seen.
    Next {
        /// Category id; omit (or pass 0) for every category.
        #[arg(long)]
        category: Option<i64>,
        /// Id of a question already asked. Repeatable.
        #[arg(long)]
        previous: Vec<i64>,
        /// Full JSON payload, or `-` to read it from stdin.
        #[arg(long, conflicts_with_all = ["category", "previous"])]
        body: Option<String>,
    },
}
