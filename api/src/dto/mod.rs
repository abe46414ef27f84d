pub mod error;
pub mod user;

pub use error::{ErrorResponse, ErrorResponseExt};
pub use user::{LoginRequest, LoginResponse, RegisterRequest, TokenQuery, UserResponse};
