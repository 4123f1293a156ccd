use serde::{Deserialize, Serialize};

/// Public profile of a signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
}

/// Session authentication state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Nobody signed in
    #[default]
    Anonymous,
    /// Signed in with verified credentials
    Authenticated(UserInfo),
}

impl AuthState {
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            AuthState::Anonymous => None,
            AuthState::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}
