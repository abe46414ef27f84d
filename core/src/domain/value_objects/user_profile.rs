//! Public user view returned to callers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fields of a user that may leave the service: never the secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}
