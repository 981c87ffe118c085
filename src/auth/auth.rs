use crate::auth::jwt::verify_token;
use crate::config::Config;
use crate::error::ApiError;
use crate::model::role::Role;
use crate::models::TokenType;
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web::Data};
use futures::future::{Ready, ready};

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: u64,
    pub username: String,
    pub role: Role,

    /// Present only if this user is a field technician
    pub technician_id: Option<u64>,
}

pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Decodes an access token into the caller's identity.
pub fn authenticate(token: &str, config: &Config) -> Result<AuthUser, ApiError> {
    let claims =
        verify_token(token, &config.jwt_secret).map_err(|_| ApiError::Unauthorized("Invalid token"))?;

    if claims.token_type != TokenType::Access {
        return Err(ApiError::Unauthorized("Access token required"));
    }

    let role = Role::from_id(claims.role).ok_or(ApiError::Unauthorized("Invalid role"))?;

    Ok(AuthUser {
        user_id: claims.user_id,
        username: claims.sub,
        role,
        technician_id: claims.technician_id,
    })
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // already decoded by the auth middleware
        if let Some(user) = req.extensions().get::<AuthUser>() {
            return ready(Ok(user.clone()));
        }

        let token = match bearer_token(req) {
            Some(t) => t,
            None => return ready(Err(ApiError::Unauthorized("Missing token"))),
        };

        let config = match req.app_data::<Data<Config>>() {
            Some(c) => c,
            None => return ready(Err(ApiError::Internal)),
        };

        ready(authenticate(token, config))
    }
}

impl AuthUser {
    pub fn require_manager(&self) -> Result<(), ApiError> {
        if self.role.is_manager() {
            Ok(())
        } else {
            Err(ApiError::Forbidden("Admin/Payroll manager only"))
        }
    }

    /// Which technician's payroll rows the caller may read: `None` means all.
    pub fn summary_scope(&self) -> Result<Option<u64>, ApiError> {
        match self.role {
            Role::Admin | Role::PayrollManager => Ok(None),
            Role::Technician => self
                .technician_id
                .map(Some)
                .ok_or(ApiError::Forbidden("No technician profile")),
            Role::Dispatcher => Err(ApiError::Forbidden("Dispatchers cannot read pay")),
        }
    }
}
