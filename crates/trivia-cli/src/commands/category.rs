use trivia_core::errors::CoreError;
use trivia_core::guards::require_nonempty;
use trivia_core::responses::{
    CategoriesResponse, CategoryQuestionsResponse, categories_map, question_views,
};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CategoryCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `trivia categories`.
pub async fn handle(
    action: &CategoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CategoryCommands::List => output(&list(ctx).await?, flags.format),
        CategoryCommands::Questions { id } => output(&questions(*id, ctx).await?, flags.format),
    }
}

async fn list(ctx: &AppContext) -> Result<CategoriesResponse, CoreError> {
    let categories = ctx.service.list_categories().await?;
    require_nonempty(&categories)?;
    Ok(CategoriesResponse {
        success: true,
        categories: categories_map(&categories),
    })
}

async fn questions(id: i64, ctx: &AppContext) -> Result<CategoryQuestionsResponse, CoreError> {
    let questions = ctx.service.questions_in_category(id).await?;
    require_nonempty(&questions)?;
    Ok(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions: question_views(&questions),
        current_category: id,
    })
}
