use actix_web::{web, HttpResponse};

use bands_core::repositories::{SessionRepository, UserRepository};

use crate::dto::{RegisterRequest, UserResponse};
use crate::handlers::handle_domain_error;

use super::AppState;

/// Handler for POST /api/user
///
/// # Request Body
///
/// ```json
/// { "name": "Paolo", "email": "paolo@paolo.com", "password": "123456" }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "id", "name", "email" }`. Invalid input is `400`,
/// a taken email is `409`.
pub async fn register<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
{
    match state.auth_service.register(request.into_inner().into()).await {
        Ok(user) => {
            log::info!("Registered user {}", user.id);
            HttpResponse::Created().json(UserResponse::from(user.profile()))
        }
        Err(e) => handle_domain_error(e),
    }
}
