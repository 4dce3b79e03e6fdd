use trivia_auth::AuthError;
use trivia_core::errors::CoreError;
use trivia_core::responses::ErrorBody;

/// Map a command failure to the error envelope.
///
/// Core and auth errors keep their status; anything else is a 500.
pub fn error_body(error: &anyhow::Error) -> ErrorBody {
    if let Some(core) = error.downcast_ref::<CoreError>() {
        return core.to_body();
    }
    if let Some(auth) = error.downcast_ref::<AuthError>() {
        return ErrorBody {
            success: false,
            error: auth.status_code(),
            message: auth.code().to_string(),
        };
    }
    ErrorBody::from_status(500)
}
