//! The injectable session object

use std::sync::Arc;

use pokedex_core::Creature;
use pokedex_team::{
    CompareSelection, KeyValueStore, RosterError, StorageKeys, StoreError, Team, TeamRepository,
};

use crate::accounts::{AccountService, LocalAccounts};
use crate::state::{AuthState, UserInfo};
use crate::SessionError;

/// One user session: team, comparison list and authentication
///
/// The team and signed-in user are persisted through the store on every
/// change; the comparison list is never persisted.
pub struct Session {
    store: Arc<dyn KeyValueStore>,
    accounts: Arc<dyn AccountService>,
    keys: StorageKeys,
    teams: TeamRepository,
    team: Team,
    compare: CompareSelection,
    auth: AuthState,
}

impl Session {
    /// Fresh session with nothing restored from the store
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        accounts: Arc<dyn AccountService>,
        keys: StorageKeys,
    ) -> Self {
        let teams = TeamRepository::new(store.clone(), keys.team.clone());
        Self {
            store,
            accounts,
            keys,
            teams,
            team: Team::new(),
            compare: CompareSelection::new(),
            auth: AuthState::Anonymous,
        }
    }

    /// Session restored from whatever the store holds
    pub fn restore(
        store: Arc<dyn KeyValueStore>,
        accounts: Arc<dyn AccountService>,
        keys: StorageKeys,
    ) -> Result<Self, SessionError> {
        let mut session = Self::new(store, accounts, keys);
        session.team = session.teams.load()?;
        session.auth = session.load_user()?;
        Ok(session)
    }

    /// Restored session using [`LocalAccounts`] in the same store and default keys
    pub fn with_local_accounts(store: Arc<dyn KeyValueStore>) -> Result<Self, SessionError> {
        let keys = StorageKeys::default();
        let accounts = Arc::new(LocalAccounts::new(store.clone(), keys.accounts.clone()));
        Self::restore(store, accounts, keys)
    }

    fn load_user(&self) -> Result<AuthState, StoreError> {
        let Some(raw) = self.store.get(&self.keys.session_user)? else {
            return Ok(AuthState::Anonymous);
        };

        match serde_json::from_str::<UserInfo>(&raw) {
            Ok(user) => Ok(AuthState::Authenticated(user)),
            Err(e) => {
                tracing::warn!(key = %self.keys.session_user, error = %e, "failed to parse stored session user");
                Ok(AuthState::Anonymous)
            }
        }
    }

    fn start_session(&mut self, user: UserInfo) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&user)?;
        self.store.set(&self.keys.session_user, &raw)?;
        self.auth = AuthState::Authenticated(user);
        Ok(())
    }

    // === Authentication ===

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.auth.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    /// Create an account and sign in as it
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserInfo, SessionError> {
        let user = self.accounts.register(name, email, password)?;
        tracing::info!(email = %user.email, "account registered");
        self.start_session(user.clone())?;
        Ok(user)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<UserInfo, SessionError> {
        let user = self.accounts.verify(email, password)?;
        tracing::info!(email = %user.email, "signed in");
        self.start_session(user.clone())?;
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.store
            .remove(&self.keys.session_user)
            .map_err(StoreError::from)?;
        if let AuthState::Authenticated(user) = std::mem::take(&mut self.auth) {
            tracing::info!(email = %user.email, "signed out");
        }
        Ok(())
    }

    // === Team ===

    pub fn team(&self) -> &Team {
        &self.team
    }

    /// Add to the team and persist it; nothing changes if either step fails
    pub fn add_to_team(&mut self, creature: Creature) -> Result<(), SessionError> {
        let mut next = self.team.clone();
        next.add(creature)?;
        self.teams.save(&next)?;
        self.team = next;
        Ok(())
    }

    /// Remove from the team by id and persist it
    pub fn remove_from_team(&mut self, id: u32) -> Result<Option<Creature>, SessionError> {
        let mut next = self.team.clone();
        let removed = next.remove(id);
        if removed.is_some() {
            self.teams.save(&next)?;
            self.team = next;
        }
        Ok(removed)
    }

    // === Comparison ===

    pub fn compare(&self) -> &CompareSelection {
        &self.compare
    }

    pub fn add_to_compare(&mut self, creature: Creature) -> Result<(), RosterError> {
        self.compare.add(creature)
    }

    pub fn remove_from_compare(&mut self, id: u32) -> Option<Creature> {
        self.compare.remove(id)
    }

    pub fn clear_compare(&mut self) {
        self.compare.clear();
    }
}
