//! # placement-auth
//!
//! Admin session gate for the placement CLI.
//!
//! Credentials are checked by a [`CredentialVerifier`] (the built-in
//! [`DemoCredentials`] accepts a single admin). Accepted logins open a
//! session on the hosted auth API through a [`SessionService`], and the
//! session token is kept in the OS keychain (`keyring`) or a `0600` file.

pub mod credentials;
pub mod error;
pub mod expiry;
pub mod gate;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod session;
pub mod token_store;

pub use credentials::{BackendIdentity, CredentialVerifier, DemoCredentials};
pub use error::AuthError;
pub use gate::SessionGate;
#[cfg(any(test, feature = "test-support"))]
pub use memory::MemorySessionService;
pub use session::{AuthSession, BackendUser, RestSessionService, SessionService, SignUp};
pub use token_store::{TokenSource, TokenStore};
