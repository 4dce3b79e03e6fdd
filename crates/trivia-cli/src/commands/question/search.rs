use trivia_core::errors::CoreError;
use trivia_core::guards::require_nonempty;
use trivia_core::responses::{SearchResponse, question_views};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(term: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&build(term, ctx).await?, flags.format)
}

async fn build(term: &str, ctx: &AppContext) -> Result<SearchResponse, CoreError> {
    let found = ctx.service.search_questions(term).await?;
    require_nonempty(&found)?;
    Ok(SearchResponse {
        success: true,
        total_questions: found.len(),
        questions: question_views(&found),
        current_category: None,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::test_support::seeded_context;

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let ctx = seeded_context().await;
        let resp = search_ids(&ctx, "WORLD CUP").await;
        assert_eq!(resp, vec![9, 10]);
    }

    #[tokio::test]
    async fn no_match_is_not_found() {
        let ctx = seeded_context().await;
        let err = build("xyzzy", &ctx).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    async fn search_ids(ctx: &AppContext, term: &str) -> Vec<i64> {
        build(term, ctx)
            .await
            .unwrap()
            .questions
            .iter()
            .map(|q| q.id)
            .collect()
    }
}
