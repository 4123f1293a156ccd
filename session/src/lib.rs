//! Session-scoped state for the Pokedex front end.
//!
//! A [`Session`] is constructed once per user session and owns the team,
//! the comparison list and the authentication state. Everything that must
//! survive a reload goes through an injected
//! [`KeyValueStore`](pokedex_team::KeyValueStore); credential checks go
//! through an [`AccountService`].

mod accounts;
mod session;
mod state;

use pokedex_team::{RosterError, StoreError};
use thiserror::Error;

pub use accounts::{AccountService, LocalAccounts};
pub use session::Session;
pub use state::{AuthState, UserInfo};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
