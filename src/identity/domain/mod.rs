//! Domain model for signed-in users.

mod error;
mod user;

pub use error::IdentityError;
pub use user::{AuthProvider, EmailAddress, UserId, UserIdentity};
