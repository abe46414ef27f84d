//! Domain entities representing core business objects.

pub mod session;
pub mod user;

pub use session::Session;
pub use user::User;
