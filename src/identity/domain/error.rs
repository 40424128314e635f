//! Error types for identity operations.

use super::AuthProvider;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by identity providers and identity value constructors.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// The email address is malformed.
    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),

    /// The password is shorter than the provider accepts.
    #[error("password must be at least {min} characters")]
    WeakPassword {
        /// Minimum accepted length in characters.
        min: usize,
    },

    /// The email and password do not match an account.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// An account already uses the email address.
    #[error("email already in use: {0}")]
    EmailAlreadyInUse(String),

    /// The external provider is not configured or refused the sign-in.
    #[error("sign-in provider unavailable: {0}")]
    ProviderUnavailable(AuthProvider),

    /// The operation requires a signed-in user.
    #[error("no user is signed in")]
    NotSignedIn,

    /// Identity backend failure.
    #[error("identity backend error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityError {
    /// Wraps a backend error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
