use trivia_auth::POST_QUESTIONS;
use trivia_core::errors::CoreError;
use trivia_core::responses::ResetResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DbCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `trivia db`.
pub async fn handle(
    action: &DbCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DbCommands::Init => {
            ctx.authorize(POST_QUESTIONS, flags)?;
            output(&init(ctx).await?, flags.format)
        }
    }
}

async fn init(ctx: &AppContext) -> Result<ResetResponse, CoreError> {
    let categories = ctx.service.reset_and_seed().await?;
    Ok(ResetResponse {
        success: true,
        message: "Database successfully created".to_string(),
        categories,
    })
}
