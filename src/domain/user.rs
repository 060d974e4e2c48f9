//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User gender enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Public identifier exposed outside the service
    pub masked_uid: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new unverified user with a fresh masked identifier
    pub fn new(
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        gender: Gender,
    ) -> Self {
        Self {
            masked_uid: Uuid::new_v4().simple().to_string(),
            email,
            password_hash,
            first_name,
            last_name,
            gender,
            verified: false,
            created_at: Utc::now(),
        }
    }

    /// Display name used in the session payload
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
