use serde::{Deserialize, Serialize};

/// The decoded set of user attributes derived from a sign-in credential.
///
/// Serialized field names match the credential's claim names
/// (`email` / `name` / `picture` / `sub`), so the record persisted under
/// `workfox_user` is exactly the claims subset the decoder extracted.
/// A record is never patched in place: a new login replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityRecord {
    pub email: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "picture")]
    pub avatar_url: String,
    #[serde(rename = "sub")]
    pub subject_id: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProfileRole {
    Freelancer,
    Client,
    Both,
}

/// Marketplace profile persisted under `workfox_profile`.
///
/// Separate from [`IdentityRecord`]: the profile is user-editable and
/// survives only until cleared by the user, while the identity record is
/// owned by the session. Seeded from the identity on first access.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub role: ProfileRole,
    pub bio: String,
}

impl SessionProfile {
    /// Initial profile for a freshly signed-in user.
    pub fn seeded_from(identity: &IdentityRecord) -> Self {
        Self {
            name: identity.display_name.clone(),
            email: identity.email.clone(),
            phone: String::new(),
            address: String::new(),
            role: ProfileRole::Both,
            bio: String::new(),
        }
    }
}
