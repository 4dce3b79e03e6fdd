use serde_json::{Value, json};
use trivia_auth::POST_QUESTIONS;
use trivia_core::errors::CoreError;
use trivia_core::payload::NewQuestion;
use trivia_core::responses::CreatedResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::payload::{object_from_fields, read_body};
use crate::context::AppContext;
use crate::output::output;

/// Individual flags given instead of `--body`.
#[derive(Debug, Default)]
pub struct AddFields<'a> {
    pub question: Option<&'a str>,
    pub answer: Option<&'a str>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

impl AddFields<'_> {
    fn to_payload(&self) -> Value {
        object_from_fields(vec![
            ("question", self.question.map(|v| json!(v))),
            ("answer", self.answer.map(|v| json!(v))),
            ("category", self.category.map(|v| json!(v))),
            ("difficulty", self.difficulty.map(|v| json!(v))),
        ])
    }
}

pub async fn run(
    body: Option<&str>,
    fields: &AddFields<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.authorize(POST_QUESTIONS, flags)?;
    let payload = match body {
        Some(raw) => read_body(raw)?,
        None => fields.to_payload(),
    };
    output(&build(&payload, ctx).await?, flags.format)
}

async fn build(payload: &Value, ctx: &AppContext) -> Result<CreatedResponse, CoreError> {
    let new = NewQuestion::from_payload(payload)?;
    let created = ctx
        .service
        .create_question(&new)
        .await
        .map_err(|e| CoreError::Unprocessable(e.to_string()))?;
    Ok(CreatedResponse {
        success: true,
        created: created.id,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::test_support::{flags, seeded_context, token_with};

    #[tokio::test]
    async fn creates_from_payload() {
        let ctx = seeded_context().await;
        let payload = json!({
            "question": "What is the capital of Peru?",
            "answer": "Lima",
            "category": "3",
            "difficulty": 2
        });

        let resp = build(&payload, &ctx).await.unwrap();
        assert_eq!(resp.created, 11);

        let stored = ctx.service.get_question(resp.created).await.unwrap();
        assert_eq!(stored.category, 3);
        assert_eq!(ctx.service.count_questions().await.unwrap(), 11);
    }

    #[tokio::test]
    async fn missing_field_is_unprocessable() {
        let ctx = seeded_context().await;
        let fields = AddFields {
            question: Some("Half a question"),
            category: Some(1),
            ..AddFields::default()
        };

        let err = build(&fields.to_payload(), &ctx).await.unwrap_err();
        assert_eq!(err.status_code(), 422);
        assert_eq!(ctx.service.count_questions().await.unwrap(), 10);
    }

    #[tokio::test]
    async fn enforced_auth_needs_post_permission() {
        let mut ctx = seeded_context().await;
        ctx.config.auth.enforce = true;
        let fields = AddFields {
            question: Some("q"),
            answer: Some("a"),
            category: Some(1),
            difficulty: Some(1),
        };

        let denied = flags(Some(token_with(&["delete:questions"])));
        let err = run(None, &fields, &ctx, &denied).await.unwrap_err();
        let auth = err.downcast_ref::<trivia_auth::AuthError>().unwrap();
        assert_eq!(auth.status_code(), 403);
        assert_eq!(ctx.service.count_questions().await.unwrap(), 10);

        let granted = flags(Some(token_with(&[POST_QUESTIONS])));
        run(None, &fields, &ctx, &granted).await.unwrap();
        assert_eq!(ctx.service.count_questions().await.unwrap(), 11);
    }
}
