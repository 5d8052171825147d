//! Identity trait definitions.

use crate::{errors::Result, types::*};
use async_trait::async_trait;
use uuid::Uuid;

/// Identity subsystem trait
///
/// The task and profile services depend on this trait, never on the
/// concrete service, so they can be tested against stub directories.
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Create a new identity and issue its bearer credential
    async fn register(&self, request: NewIdentity) -> Result<AuthGrant>;

    /// Verify a username/password pair and return the existing credential,
    /// minting one lazily if the identity has none
    async fn login(&self, username: &str, password: &str) -> Result<AuthGrant>;

    /// Resolve a bearer token to the identity it authenticates
    async fn authenticate(&self, token: &str) -> Result<Identity>;

    /// Get an identity by ID
    async fn get_identity(&self, identity_id: Uuid) -> Result<Identity>;
}
