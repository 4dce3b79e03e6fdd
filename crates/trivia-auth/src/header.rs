use crate::error::AuthError;

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// # Errors
///
/// Returns `AuthError::HeaderMissing` for `None` or a blank header, and
/// `AuthError::InvalidHeader` when the scheme is not `Bearer` or the value
/// does not have exactly two parts.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or(AuthError::HeaderMissing)?;

    let parts: Vec<&str> = header.split_whitespace().collect();
    match parts.as_slice() {
        [scheme, token] if scheme.eq_ignore_ascii_case("bearer") => Ok(*token),
        [scheme, ..] if !scheme.eq_ignore_ascii_case("bearer") => Err(
            AuthError::InvalidHeader("authorization header must start with \"Bearer\"".into()),
        ),
        [_] => Err(AuthError::InvalidHeader("token not found".into())),
        _ => Err(AuthError::InvalidHeader(
            "authorization header must be bearer token".into(),
        )),
    }
}
