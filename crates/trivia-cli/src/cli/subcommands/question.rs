use clap::Subcommand;

/// Question commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuestionCommands {
    /// List questions one page at a time.
    List {
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
    },
    /// Find questions whose text contains a term.
    Search { term: String },
    /// Add a question. Requires `post:questions` when auth is enforced.
    Add {
        /// Full JSON payload, or `-` to read it from stdin.
        #[arg(long, conflicts_with_all = ["question", "answer", "category", "difficulty"])]
        body: Option<String>,
        #[arg(long)]
        question: Option<String>,
        #[arg(long)]
        answer: Option<String>,
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        difficulty: Option<i64>,
    },
    /// Delete a question. Requires `delete:questions` when auth is enforced.
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}
