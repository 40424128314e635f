//! In-memory identity provider for tests and offline use.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::identity::{
    domain::{AuthProvider, EmailAddress, IdentityError, UserId, UserIdentity},
    ports::{IdentityProvider, IdentityResult},
};

/// Minimum password length accepted at sign-up.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Profile an external provider returns when a sign-in succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderProfile {
    /// Email reported by the provider.
    pub email: String,
    /// Display name reported by the provider.
    pub name: String,
    /// Avatar URL reported by the provider, if any.
    pub avatar_url: Option<String>,
}

/// Thread-safe in-memory identity provider.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityProvider {
    state: Arc<RwLock<IdentityState>>,
}

#[derive(Debug, Default)]
struct IdentityState {
    accounts: HashMap<EmailAddress, Account>,
    providers: HashMap<AuthProvider, ProviderProfile>,
    current: Option<UserIdentity>,
}

#[derive(Debug, Clone)]
struct Account {
    identity: UserIdentity,
    password_digest: Option<[u8; 32]>,
}

impl InMemoryIdentityProvider {
    /// Creates a provider with no accounts and no external providers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the profile returned by an external provider.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Persistence`] when the lock is poisoned.
    pub fn register_provider(
        &self,
        provider: AuthProvider,
        profile: ProviderProfile,
    ) -> IdentityResult<()> {
        let mut state = self.write()?;
        state.providers.insert(provider, profile);
        Ok(())
    }

    fn read(&self) -> IdentityResult<std::sync::RwLockReadGuard<'_, IdentityState>> {
        self.state
            .read()
            .map_err(|err| IdentityError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> IdentityResult<std::sync::RwLockWriteGuard<'_, IdentityState>> {
        self.state
            .write()
            .map_err(|err| IdentityError::persistence(std::io::Error::other(err.to_string())))
    }
}

/// Digests a password salted with the normalized email.
fn password_digest(email: &EmailAddress, password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(email.as_str().as_bytes());
    hasher.update([0_u8]);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<UserIdentity> {
        let address = EmailAddress::new(email).map_err(|_| IdentityError::InvalidCredentials)?;
        let mut state = self.write()?;
        let account = state
            .accounts
            .get(&address)
            .ok_or(IdentityError::InvalidCredentials)?;
        if account.password_digest != Some(password_digest(&address, password)) {
            return Err(IdentityError::InvalidCredentials);
        }

        let identity = account.identity.clone();
        state.current = Some(identity.clone());
        debug!(user_id = %identity.id(), "user signed in");
        Ok(identity)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> IdentityResult<UserIdentity> {
        let address = EmailAddress::new(email)?;
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(IdentityError::WeakPassword {
                min: MIN_PASSWORD_CHARS,
            });
        }

        let mut state = self.write()?;
        if state.accounts.contains_key(&address) {
            return Err(IdentityError::EmailAlreadyInUse(address.to_string()));
        }

        let identity = UserIdentity::new(UserId::new(), address.clone(), name);
        let account = Account {
            identity: identity.clone(),
            password_digest: Some(password_digest(&address, password)),
        };
        state.accounts.insert(address, account);
        state.current = Some(identity.clone());
        debug!(user_id = %identity.id(), "user signed up");
        Ok(identity)
    }

    async fn sign_in_with_provider(&self, provider: AuthProvider) -> IdentityResult<UserIdentity> {
        let mut state = self.write()?;
        let profile = state
            .providers
            .get(&provider)
            .cloned()
            .ok_or(IdentityError::ProviderUnavailable(provider))?;
        let address =
            EmailAddress::new(profile.email).map_err(|_| IdentityError::ProviderUnavailable(provider))?;

        let existing = state
            .accounts
            .get(&address)
            .map(|account| account.identity.clone());
        let identity = match existing {
            Some(identity) => identity,
            None => {
                let mut created = UserIdentity::new(UserId::new(), address.clone(), profile.name);
                if let Some(url) = profile.avatar_url {
                    created = created.with_avatar_url(url);
                }
                state.accounts.insert(
                    address,
                    Account {
                        identity: created.clone(),
                        password_digest: None,
                    },
                );
                created
            }
        };
        state.current = Some(identity.clone());
        debug!(user_id = %identity.id(), %provider, "user signed in with provider");
        Ok(identity)
    }

    async fn sign_out(&self) -> IdentityResult<()> {
        let mut state = self.write()?;
        state
            .current
            .take()
            .map(|_| ())
            .ok_or(IdentityError::NotSignedIn)
    }

    async fn current_user(&self) -> IdentityResult<Option<UserIdentity>> {
        Ok(self.read()?.current.clone())
    }
}
