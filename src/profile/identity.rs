//! Identity provider interface and an in-memory implementation.
//!
//! Real providers authenticate against a remote service; the in-memory one
//! keeps accounts for the life of the process and backs the offline
//! front-end and the tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::{watch, RwLock};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account already exists for {0}")]
    AccountExists(String),

    #[error("No user is signed in")]
    NotSignedIn,

    #[error("Identity provider error: {0}")]
    Other(String),
}

/// The signed-in user as the provider reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// Fields to change on the current user; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// Broadcast whenever the signed-in user changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    SignedOut,
    SignedIn(UserProfile),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, IdentityError>;
    async fn sign_up(&self, email: &str, password: &str) -> Result<UserProfile, IdentityError>;
    async fn sign_out(&self) -> Result<(), IdentityError>;
    async fn current_user(&self) -> Option<UserProfile>;
    async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile, IdentityError>;
    /// Observe auth state changes
    fn subscribe(&self) -> watch::Receiver<AuthState>;
}

#[derive(Debug, Clone)]
struct Account {
    password: String,
    profile: UserProfile,
}

#[derive(Debug)]
pub struct InMemoryIdentity {
    accounts: RwLock<HashMap<String, Account>>,
    current: RwLock<Option<String>>,
    state_tx: watch::Sender<AuthState>,
}

impl InMemoryIdentity {
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(AuthState::SignedOut);
        Self {
            accounts: RwLock::new(HashMap::new()),
            current: RwLock::new(None),
            state_tx,
        }
    }

    /// Provider that starts with one account already signed in, for offline use
    pub fn signed_in(email: &str, display_name: Option<&str>) -> Self {
        let mut identity = Self::new();
        let uid = Self::uid_for(email);
        let profile = UserProfile {
            uid: uid.clone(),
            email: email.trim().to_string(),
            display_name: display_name.map(str::to_string),
            photo_url: None,
        };

        identity.accounts.get_mut().insert(
            uid.clone(),
            Account {
                password: String::new(),
                profile: profile.clone(),
            },
        );
        *identity.current.get_mut() = Some(uid);
        identity.publish(AuthState::SignedIn(profile));
        identity
    }

    fn uid_for(email: &str) -> String {
        format!("local-{}", email.trim().to_lowercase())
    }

    fn publish(&self, state: AuthState) {
        self.state_tx.send_replace(state);
    }
}

impl Default for InMemoryIdentity {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, IdentityError> {
        let uid = Self::uid_for(email);
        let profile = {
            let accounts = self.accounts.read().await;
            match accounts.get(&uid) {
                Some(account) if account.password == password => account.profile.clone(),
                _ => return Err(IdentityError::InvalidCredentials),
            }
        };

        *self.current.write().await = Some(uid);
        self.publish(AuthState::SignedIn(profile.clone()));
        Ok(profile)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<UserProfile, IdentityError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(IdentityError::InvalidCredentials);
        }

        let uid = Self::uid_for(email);
        let profile = UserProfile {
            uid: uid.clone(),
            email: email.to_string(),
            display_name: None,
            photo_url: None,
        };

        {
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(&uid) {
                return Err(IdentityError::AccountExists(email.to_string()));
            }
            accounts.insert(
                uid.clone(),
                Account {
                    password: password.to_string(),
                    profile: profile.clone(),
                },
            );
        }

        *self.current.write().await = Some(uid);
        self.publish(AuthState::SignedIn(profile.clone()));
        Ok(profile)
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        *self.current.write().await = None;
        self.publish(AuthState::SignedOut);
        Ok(())
    }

    async fn current_user(&self) -> Option<UserProfile> {
        let uid = self.current.read().await.clone()?;
        self.accounts.read().await.get(&uid).map(|account| account.profile.clone())
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile, IdentityError> {
        let uid = self.current.read().await.clone().ok_or(IdentityError::NotSignedIn)?;

        let profile = {
            let mut accounts = self.accounts.write().await;
            let account = accounts.get_mut(&uid).ok_or(IdentityError::NotSignedIn)?;
            if let Some(display_name) = update.display_name {
                account.profile.display_name = Some(display_name);
            }
            if let Some(photo_url) = update.photo_url {
                account.profile.photo_url = Some(photo_url);
            }
            account.profile.clone()
        };

        self.publish(AuthState::SignedIn(profile.clone()));
        Ok(profile)
    }

    fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state_tx.subscribe()
    }
}
