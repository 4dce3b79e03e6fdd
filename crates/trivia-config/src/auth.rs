//! Permission enforcement settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Require a bearer token with the right permission for mutating commands.
    #[serde(default)]
    pub enforce: bool,

    /// Bearer token (JWT) used when no `--token` flag is given.
    #[serde(default)]
    pub token: String,
}

impl AuthConfig {
    /// The configured token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        if self.token.is_empty() {
            None
        } else {
            Some(&self.token)
        }
    }
}
