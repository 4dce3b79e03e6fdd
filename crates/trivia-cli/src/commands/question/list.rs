use trivia_core::errors::CoreError;
use trivia_core::guards::require_nonempty;
use trivia_core::pagination::paginate;
use trivia_core::responses::{QuestionsPageResponse, categories_map, question_views};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(page: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&build(page, ctx).await?, flags.format)
}

async fn build(page: i64, ctx: &AppContext) -> Result<QuestionsPageResponse, CoreError> {
    let all = ctx.service.list_questions().await?;
    let current = paginate(page, &all, ctx.config.quiz.page_size);
    require_nonempty(current)?;

    let categories = ctx.service.list_categories().await?;
    Ok(QuestionsPageResponse {
        success: true,
        questions: question_views(current),
        total_questions: all.len(),
        current_category: None,
        categories: categories_map(&categories),
    })
}
