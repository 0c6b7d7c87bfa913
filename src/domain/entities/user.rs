//! User entity and its creation/update inputs.

/// A stored user record.
///
/// `user_id` is the authoritative identifier: assigned once at creation and
/// never touched by updates. `id` is the creation-order position stamped by
/// the store at insert time; it is not recomputed after deletions and must not
/// be used for lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub age: u32,
    pub hobby: Vec<String>,
}

impl User {
    /// Applies a shallow merge: supplied fields overwrite, absent ones are kept.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(hobby) = patch.hobby {
            self.hobby = hobby;
        }
    }
}

/// Client-supplied attributes of a user, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub age: u32,
    pub hobby: Vec<String>,
}

/// Input data for creating a new user.
///
/// The `user_id` is generated by the caller; the store only assigns `id`.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_id: String,
    pub username: String,
    pub age: u32,
    pub hobby: Vec<String>,
}

impl NewUser {
    pub fn new(user_id: String, profile: UserProfile) -> Self {
        Self {
            user_id,
            username: profile.username,
            age: profile.age,
            hobby: profile.hobby,
        }
    }
}

/// Partial update for an existing user.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub age: Option<u32>,
    pub hobby: Option<Vec<String>>,
}

impl From<UserProfile> for UserPatch {
    fn from(profile: UserProfile) -> Self {
        Self {
            username: Some(profile.username),
            age: Some(profile.age),
            hobby: Some(profile.hobby),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "1".to_string(),
            user_id: "4b3a1c2e-8f9d-4e5a-b6c7-d8e9f0a1b2c3".to_string(),
            username: "John Doe".to_string(),
            age: 30,
            hobby: vec!["Cricket".to_string(), "Painting".to_string()],
        }
    }

    #[test]
    fn test_apply_partial_patch_keeps_absent_fields() {
        let mut user = sample_user();

        user.apply(UserPatch {
            username: Some("Jane".to_string()),
            ..Default::default()
        });

        assert_eq!(user.username, "Jane");
        assert_eq!(user.age, 30);
        assert_eq!(user.hobby, vec!["Cricket", "Painting"]);
    }

    #[test]
    fn test_apply_never_touches_identifiers() {
        let mut user = sample_user();
        let before = user.clone();

        user.apply(UserPatch {
            username: Some("Updated Name".to_string()),
            age: Some(40),
            hobby: Some(vec!["Chess".to_string()]),
        });

        assert_eq!(user.id, before.id);
        assert_eq!(user.user_id, before.user_id);
        assert_eq!(user.age, 40);
        assert_eq!(user.hobby, vec!["Chess"]);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut user = sample_user();
        let before = user.clone();

        user.apply(UserPatch::default());

        assert_eq!(user, before);
    }

    #[test]
    fn test_patch_from_profile_sets_every_field() {
        let patch = UserPatch::from(UserProfile {
            username: "A".to_string(),
            age: 1,
            hobby: vec!["x".to_string()],
        });

        assert_eq!(patch.username.as_deref(), Some("A"));
        assert_eq!(patch.age, Some(1));
        assert_eq!(patch.hobby, Some(vec!["x".to_string()]));
    }
}
