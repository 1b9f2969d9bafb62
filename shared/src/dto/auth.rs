use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Login credentials.
///
/// Sent form-encoded (`username=..&password=..`), never as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Successful login response from `POST /auth/token`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Raw role identifier; see [`Role`] for the recognized values.
    pub role: String,
    pub username: String,
}

/// Error body returned by the backend on failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Dashboard roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    CourseDirector,
    WellbeingOfficer,
}

impl Role {
    pub fn all() -> &'static [Role] {
        &[Role::CourseDirector, Role::WellbeingOfficer]
    }

    /// Wire identifier, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::CourseDirector => "course_director",
            Role::WellbeingOfficer => "wellbeing_officer",
        }
    }

    /// Parse a stored role identifier. Unknown identifiers yield `None`.
    pub fn parse(value: &str) -> Option<Role> {
        Role::all().iter().copied().find(|role| role.as_str() == value)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for [`Role::from_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}
