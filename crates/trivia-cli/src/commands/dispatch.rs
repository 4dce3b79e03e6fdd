use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Categories { action } => commands::category::handle(&action, ctx, flags).await,
        Commands::Questions { action } => commands::question::handle(&action, ctx, flags).await,
        Commands::Quiz { action } => commands::quiz::handle(&action, ctx, flags).await,
        Commands::Db { action } => commands::db::handle(&action, ctx, flags).await,
    }
}
