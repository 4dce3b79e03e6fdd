use serde_json::{Value, json};
use trivia_core::errors::CoreError;
use trivia_core::payload::{ANY_CATEGORY_TYPE, QuizRequest};
use trivia_core::responses::{QuestionView, QuizResponse};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuizCommands;
use crate::commands::shared::payload::read_body;
use crate::context::AppContext;
use crate::output::output;

/// Handle `trivia quiz`.
pub async fn handle(
    action: &QuizCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        QuizCommands::Next {
            category,
            previous,
            body,
        } => {
            let payload = match body {
                Some(raw) => read_body(raw)?,
                None => flags_payload(*category, previous),
            };
            output(&next(&payload, ctx).await?, flags.format)
        }
    }
}

/// The payload the quiz frontend would send for these flags.
fn flags_payload(category: Option<i64>, previous: &[i64]) -> Value {
    let quiz_category = match category {
        Some(id) if id != 0 => json!({ "type": "", "id": id }),
        _ => json!({ "type": ANY_CATEGORY_TYPE, "id": 0 }),
    };
    json!({
        "quiz_category": quiz_category,
        "previous_questions": previous,
    })
}

async fn next(payload: &Value, ctx: &AppContext) -> Result<QuizResponse, CoreError> {
    let request = QuizRequest::from_payload(payload)?;
    let mut rng = rand::rng();
    let question = ctx.service.next_quiz_question(&request, &mut rng).await?;
    if question.is_none() {
        tracing::info!(category = %request.category, "quiz pool exhausted");
    }
    Ok(QuizResponse {
        success: true,
        question: question.as_ref().map(QuestionView::from),
    })
}
