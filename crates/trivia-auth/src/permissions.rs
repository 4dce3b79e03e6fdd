use crate::claims::{TriviaClaims, decode_claims};
use crate::error::AuthError;
use crate::header::bearer_token;

/// Permission required to add questions and reset the database.
pub const POST_QUESTIONS: &str = "post:questions";
/// Permission required to delete questions.
pub const DELETE_QUESTIONS: &str = "delete:questions";

/// Check that `claims` grant `permission`.
///
/// # Errors
///
/// Returns `AuthError::TokenExpired` for an expired token,
/// `AuthError::InvalidClaims` if the token has no `permissions` claim, and
/// `AuthError::Forbidden` if the permission is not in it.
pub fn check_permission(claims: &TriviaClaims, permission: &str) -> Result<(), AuthError> {
    if claims.is_expired() {
        return Err(AuthError::TokenExpired);
    }
    if claims.permissions.is_none() {
        return Err(AuthError::InvalidClaims(
            "permissions not included in token".into(),
        ));
    }
    if !claims.has_permission(permission) {
        tracing::debug!(permission, subject = ?claims.subject, "permission denied");
        return Err(AuthError::Forbidden(permission.to_string()));
    }
    Ok(())
}

/// Extract, decode, and check a bearer token in one step.
///
/// Returns the decoded claims on success.
///
/// # Errors
///
/// Any error from [`bearer_token`], [`decode_claims`], or
/// [`check_permission`].
pub fn requires_auth(header: Option<&str>, permission: &str) -> Result<TriviaClaims, AuthError> {
    let token = bearer_token(header)?;
    let claims = decode_claims(token)?;
    check_permission(&claims, permission)?;
    Ok(claims)
}
