use actix_web::{http::header::AUTHORIZATION, web, HttpRequest, HttpResponse};

use bands_core::repositories::{SessionRepository, UserRepository};

use crate::dto::{TokenQuery, UserResponse};
use crate::handlers::handle_domain_error;

use super::AppState;

/// Handler for GET /api/user/me
///
/// The token is read from a non-empty `token` query parameter, falling back to
/// an `Authorization: Bearer` header. A missing, unknown or expired token is `403`.
pub async fn me<U, S>(
    req: HttpRequest,
    state: web::Data<AppState<U, S>>,
    query: web::Query<TokenQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
{
    let token = query
        .into_inner()
        .token
        .filter(|token| !token.is_empty())
        .or_else(|| bearer_token(&req))
        .unwrap_or_default();

    match state.auth_service.validate_token(&token).await {
        Ok(profile) => HttpResponse::Ok().json(UserResponse::from(profile)),
        Err(e) => handle_domain_error(e),
    }
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
}
