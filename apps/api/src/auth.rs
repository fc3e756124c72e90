//! Request identity.
//!
//! Sign-in is handled by an external identity provider. The gateway in front of this
//! service verifies the provider token and forwards its subject in `X-User-Id`.
//! The role is never taken from the request; it is read from the `users` table.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::errors::AppError;
use crate::models::user::UserRole;
use crate::state::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated subject, without a role lookup.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(AppError::Unauthorized)?;

        Ok(Identity {
            user_id: user_id.to_string(),
        })
    }
}

/// The authenticated subject with its stored role.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    pub role: UserRole,
}

impl AuthUser {
    pub fn require(&self, role: UserRole) -> Result<(), AppError> {
        if self.role == role {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!(
                "This action is only available to {} accounts",
                role.as_str()
            )))
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Identity { user_id } = Identity::from_request_parts(parts, state).await?;

        let stored: Option<String> = sqlx::query_scalar("SELECT role FROM users WHERE id = $1")
            .bind(&user_id)
            .fetch_optional(&state.db)
            .await?;

        // No stored record yet: treat as a candidate until they register.
        let role = stored
            .as_deref()
            .map(UserRole::from_db)
            .unwrap_or_default();

        Ok(AuthUser { user_id, role })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<Identity, AppError> {
        let (mut parts, _) = request.into_parts();
        Identity::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_identity_from_header() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "uid-42")
            .body(())
            .unwrap();
        let identity = extract(request).await.unwrap();
        assert_eq!(identity.user_id, "uid-42");
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let request = Request::builder().body(()).unwrap();
        assert!(matches!(extract(request).await, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_blank_header_is_unauthorized() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "   ")
            .body(())
            .unwrap();
        assert!(matches!(extract(request).await, Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_require_role() {
        let user = AuthUser {
            user_id: "uid-1".to_string(),
            role: UserRole::Candidate,
        };
        assert!(user.require(UserRole::Candidate).is_ok());
        assert!(matches!(
            user.require(UserRole::Employer),
            Err(AppError::Forbidden(_))
        ));
    }
}
