use actix_web::{web, HttpResponse};
use validator::Validate;

use bands_core::repositories::{SessionRepository, UserRepository};

use crate::dto::{LoginRequest, LoginResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};

use super::AppState;

/// Handler for POST /api/user/login
///
/// # Request Body
///
/// ```json
/// { "email": "paolo@paolo.com", "password": "123456" }
/// ```
///
/// # Response
///
/// `200 OK` with `{ "token", "email" }`; bad credentials are `403`.
pub async fn login<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    let LoginRequest { email, password } = request.into_inner();
    match state.auth_service.login(&email, &password).await {
        Ok(outcome) => HttpResponse::Ok().json(LoginResponse {
            token: outcome.token,
            email: outcome.user.email,
        }),
        Err(e) => handle_domain_error(e),
    }
}
