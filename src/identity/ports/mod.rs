//! Port contract for the external identity provider.

use super::domain::{AuthProvider, IdentityError, UserIdentity};
use async_trait::async_trait;

/// Result type for identity operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Identity provider contract.
///
/// Implementations own credential storage and session state; the rest of
/// the crate only ever sees [`UserIdentity`] values.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Signs in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidCredentials`] when the pair does not
    /// match an account.
    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<UserIdentity>;

    /// Creates an account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidEmail`],
    /// [`IdentityError::WeakPassword`] or
    /// [`IdentityError::EmailAlreadyInUse`].
    async fn sign_up(&self, email: &str, password: &str, name: &str)
    -> IdentityResult<UserIdentity>;

    /// Signs in through an external provider.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::ProviderUnavailable`] when the provider
    /// cannot complete the sign-in.
    async fn sign_in_with_provider(&self, provider: AuthProvider) -> IdentityResult<UserIdentity>;

    /// Ends the current session.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::NotSignedIn`] when there is no session.
    async fn sign_out(&self) -> IdentityResult<()>;

    /// Returns the signed-in user, if any.
    async fn current_user(&self) -> IdentityResult<Option<UserIdentity>>;
}
