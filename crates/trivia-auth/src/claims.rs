use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AuthError;

/// Claims decoded from a bearer token's payload segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaClaims {
    /// Subject (`sub` claim).
    pub subject: Option<String>,
    /// Granted permission scopes, e.g. `"delete:questions"`. `None` when the
    /// token carries no `permissions` claim at all.
    pub permissions: Option<Vec<String>>,
    /// Expiry (`exp` claim), if present.
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RawClaims {
    sub: Option<String>,
    permissions: Option<Vec<String>>,
    exp: Option<i64>,
}

impl TriviaClaims {
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| exp <= Utc::now())
    }

    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .as_ref()
            .is_some_and(|granted| granted.iter().any(|p| p == permission))
    }
}

/// Decode the payload of a JWT without verifying its signature.
///
/// # Errors
///
/// Returns `AuthError::InvalidHeader` if the token is not three
/// dot-separated segments or the payload is not base64url JSON, and
/// `AuthError::InvalidClaims` if a claim has the wrong type.
pub fn decode_claims(jwt: &str) -> Result<TriviaClaims, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::InvalidHeader("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| AuthError::InvalidHeader(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::InvalidHeader(format!("JSON parse failed: {e}")))?;
    let raw: RawClaims =
        serde_json::from_value(value).map_err(|e| AuthError::InvalidClaims(e.to_string()))?;

    let expires_at = match raw.exp {
        Some(exp) => Some(
            DateTime::from_timestamp(exp, 0)
                .ok_or_else(|| AuthError::InvalidClaims("invalid exp timestamp".into()))?,
        ),
        None => None,
    };

    Ok(TriviaClaims {
        subject: raw.sub,
        permissions: raw.permissions,
        expires_at,
    })
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::test_tokens::make_jwt;
    use super::*;

    #[test]
    fn decodes_permissions_and_expiry() {
        let exp = Utc::now().timestamp() + 3600;
        let jwt = make_jwt(&format!(
            r#"{{"sub":"auth0|barista","permissions":["get:questions","post:questions"],"exp":{exp}}}"#
        ));
        let claims = decode_claims(&jwt).unwrap();
        assert_eq!(claims.subject.as_deref(), Some("auth0|barista"));
        assert!(claims.has_permission("post:questions"));
        assert!(!claims.has_permission("delete:questions"));
        assert_eq!(claims.expires_at.unwrap().timestamp(), exp);
        assert!(!claims.is_expired());
    }

    #[test]
    fn missing_permissions_claim_is_none() {
        let claims = decode_claims(&make_jwt(r#"{"sub":"x"}"#)).unwrap();
        assert!(claims.permissions.is_none());
        assert!(!claims.has_permission("get:questions"));
        assert!(!claims.is_expired());
    }

    #[test]
    fn past_expiry_is_expired() {
        let exp = Utc::now().timestamp() - 10;
        let claims = decode_claims(&make_jwt(&format!(r#"{{"exp":{exp}}}"#))).unwrap();
        assert!(claims.is_expired());
    }

    #[test]
    fn invalid_format() {
        let err = decode_claims("not-a-jwt").unwrap_err();
        assert!(err.to_string().contains("invalid JWT format"));
    }

    #[test]
    fn bad_base64() {
        let err = decode_claims("header.!!!invalid!!!.signature").unwrap_err();
        assert!(err.to_string().contains("base64 decode failed"));
    }

    #[test]
    fn wrong_claim_type_is_invalid_claims() {
        let err = decode_claims(&make_jwt(r#"{"permissions":"post:questions"}"#)).unwrap_err();
        assert!(matches!(err, AuthError::InvalidClaims(_)));
        assert_eq!(err.status_code(), 400);
    }
}
