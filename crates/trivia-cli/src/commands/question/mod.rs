mod add;
mod delete;
mod list;
mod search;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuestionCommands;
use crate::context::AppContext;

/// Handle `trivia questions`.
pub async fn handle(
    action: &QuestionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        QuestionCommands::List { page } => list::run(*page, ctx, flags).await,
        QuestionCommands::Search { term } => search::run(term, ctx, flags).await,
        QuestionCommands::Add {
            body,
            question,
            answer,
            category,
            difficulty,
        } => {
            let fields = add::AddFields {
                question: question.as_deref(),
                answer: answer.as_deref(),
                category: *category,
                difficulty: *difficulty,
            };
            add::run(body.as_deref(), &fields, ctx, flags).await
        }
        QuestionCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}
