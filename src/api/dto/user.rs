//! DTOs for the user endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, OneOrMany, PickFirst, formats::PreferMany, serde_as};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::{User, UserProfile};
use crate::error::AppError;

/// Request body for `POST /api/users` and `PUT /api/users/{userId}`.
///
/// Fields are optional at the serde level so a missing field becomes a
/// validation failure (400 with the fixed message) instead of a body rejection.
///
/// - `age` accepts a JSON number or a decimal string (`30` or `"30"`).
/// - `hobby` accepts a single string or a list of strings.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UserPayload {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(required, range(min = 1))]
    pub age: Option<u32>,

    #[serde_as(as = "Option<OneOrMany<_, PreferMany>>")]
    #[validate(required, length(min = 1))]
    pub hobby: Option<Vec<String>>,
}

impl TryFrom<UserPayload> for UserProfile {
    type Error = AppError;

    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        payload.validate()?;

        match (payload.username, payload.age, payload.hobby) {
            (Some(username), Some(age), Some(hobby)) => Ok(UserProfile {
                username,
                age,
                hobby,
            }),
            _ => Err(AppError::MissingFields),
        }
    }
}

/// JSON representation of a stored user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Creation-order hint; not stable after deletions.
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "4b3a1c2e-8f9d-4e5a-b6c7-d8e9f0a1b2c3")]
    pub user_id: String,
    #[schema(example = "JohnDoe")]
    pub username: String,
    #[schema(example = 30)]
    pub age: u32,
    #[schema(example = json!(["Reading"]))]
    pub hobby: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_id: user.user_id,
            username: user.username,
            age: user.age,
            hobby: user.hobby,
        }
    }
}
