//! DTOs for the user service's JSON payloads.

use serde::Deserialize;

use crate::domain::{User, UserId};

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: i64,
    pub(super) name: String,
}

impl UserDto {
    pub(super) fn into_domain(self) -> Result<User, String> {
        let id = UserId::new(self.id).map_err(|err| err.to_string())?;
        Ok(User::new(id, self.name))
    }
}

/// Error body returned alongside non-success statuses.
#[derive(Debug, Default, Deserialize)]
pub(super) struct UpstreamErrorDto {
    #[serde(default)]
    pub(super) message: Option<String>,
    #[serde(default)]
    pub(super) code: Option<String>,
}
