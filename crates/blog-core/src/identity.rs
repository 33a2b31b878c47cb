//! Caller identity - resolved once per request from the `Authorization` header.

use uuid::Uuid;

use crate::ports::TokenService;

/// Who is calling. Passed explicitly into every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallerIdentity {
    #[default]
    Anonymous,
    Authenticated { user_id: Uuid },
}

impl CallerIdentity {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Self::Authenticated { user_id } => Some(*user_id),
            Self::Anonymous => None,
        }
    }
}

/// Resolve the caller from an `Authorization` header value (`<scheme> <token>`).
///
/// Never fails: a missing header, a missing token segment or a token that does
/// not verify all yield [`CallerIdentity::Anonymous`].
pub fn resolve_identity(header: Option<&str>, tokens: &dyn TokenService) -> CallerIdentity {
    let Some(header) = header else {
        tracing::debug!("No authorization header");
        return CallerIdentity::Anonymous;
    };

    let Some(token) = header.split_whitespace().nth(1) else {
        tracing::debug!("Authorization header carries no token");
        return CallerIdentity::Anonymous;
    };

    match tokens.validate_token(token) {
        Ok(claims) => CallerIdentity::Authenticated {
            user_id: claims.user_id,
        },
        Err(e) => {
            tracing::debug!(error = %e, "Token rejected, continuing anonymously");
            CallerIdentity::Anonymous
        }
    }
}
