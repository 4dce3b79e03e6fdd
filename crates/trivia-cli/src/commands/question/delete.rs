use trivia_auth::DELETE_QUESTIONS;
use trivia_core::errors::CoreError;
use trivia_core::responses::DeletedResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.authorize(DELETE_QUESTIONS, flags)?;
    output(&build(id, ctx).await?, flags.format)
}

/// A missing id is reported as `Unprocessable`, not `NotFound`.
async fn build(id: i64, ctx: &AppContext) -> Result<DeletedResponse, CoreError> {
    ctx.service
        .delete_question(id)
        .await
        .map_err(|e| CoreError::Unprocessable(format!("could not delete question {id}: {e}")))?;
    Ok(DeletedResponse {
        success: true,
        deleted: id,
    })
}
