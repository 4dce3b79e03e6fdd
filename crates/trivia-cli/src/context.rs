use anyhow::Context;
use trivia_auth::TriviaClaims;
use trivia_config::TriviaConfig;
use trivia_db::service::TriviaService;

use crate::cli::GlobalFlags;

/// Resources owned for the lifetime of one command invocation.
///
/// Opened after config loading, passed by reference to the handler, and
/// dropped (closing the database) when the command returns.
pub struct AppContext {
    pub service: TriviaService,
    pub config: TriviaConfig,
}

impl AppContext {
    /// Open the configured database.
    pub async fn init(config: TriviaConfig) -> anyhow::Result<Self> {
        if config.database.is_in_memory() {
            tracing::warn!("database.path is :memory:; changes are lost when the command exits");
        }
        let service = TriviaService::new_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database '{}'", config.database.path))?;
        Ok(Self { service, config })
    }

    /// Check `permission` against the caller's bearer token.
    ///
    /// Returns `Ok(None)` without looking at any token when enforcement is
    /// off. The `--token` flag wins over `auth.token` from config.
    pub fn authorize(
        &self,
        permission: &str,
        flags: &GlobalFlags,
    ) -> Result<Option<TriviaClaims>, trivia_auth::AuthError> {
        if !self.config.auth.enforce {
            tracing::debug!(permission, "auth not enforced; skipping permission check");
            return Ok(None);
        }

        let header = flags
            .token
            .as_deref()
            .or_else(|| self.config.auth.token())
            .map(|token| format!("Bearer {token}"));
        let claims = trivia_auth::requires_auth(header.as_deref(), permission)?;
        tracing::info!(permission, subject = ?claims.subject, "permission granted");
        Ok(Some(claims))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use base64::Engine as _;
    use trivia_config::TriviaConfig;

    use super::AppContext;
    use crate::cli::{GlobalFlags, OutputFormat};

    /// In-memory context with default categories and sample questions.
    pub async fn seeded_context() -> AppContext {
        let mut config = TriviaConfig::default();
        config.database.path = ":memory:".into();
        let ctx = AppContext::init(config).await.unwrap();
        ctx.service.reset_and_seed().await.unwrap();
        ctx
    }

    pub fn flags(token: Option<String>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            verbose: false,
            config: None,
            token,
        }
    }

    /// Unsigned JWT granting `permissions`.
    pub fn token_with(permissions: &[&str]) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let payload = serde_json::json!({ "sub": "tester", "permissions": permissions });
        format!(
            "{}.{}.{}",
            engine.encode(r#"{"alg":"none"}"#),
            engine.encode(payload.to_string()),
            engine.encode("sig")
        )
    }
}
