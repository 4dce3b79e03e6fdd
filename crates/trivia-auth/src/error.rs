use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authorization header is expected")]
    HeaderMissing,

    #[error("invalid authorization header: {0}")]
    InvalidHeader(String),

    #[error("token expired")]
    TokenExpired,

    #[error("invalid claims: {0}")]
    InvalidClaims(String),

    #[error("permission '{0}' not granted")]
    Forbidden(String),
}

impl AuthError {
    /// HTTP-style status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::HeaderMissing | Self::InvalidHeader(_) | Self::TokenExpired => 401,
            Self::InvalidClaims(_) => 400,
            Self::Forbidden(_) => 403,
        }
    }

    /// Short machine-readable code, e.g. `"token_expired"`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::HeaderMissing => "authorization_header_missing",
            Self::InvalidHeader(_) => "invalid_header",
            Self::TokenExpired => "token_expired",
            Self::InvalidClaims(_) => "invalid_claims",
            Self::Forbidden(_) => "unauthorized",
        }
    }
}
