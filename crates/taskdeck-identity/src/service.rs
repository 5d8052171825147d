//! Identity service implementation.

use crate::{errors::*, password, traits::IdentityDirectory, types::*};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;
use taskdeck_storage::{
    Batch, Storage, CF_CREDENTIALS, CF_CREDENTIALS_BY_TOKEN, CF_IDENTITIES,
    CF_IDENTITIES_BY_USERNAME,
};

/// Identity service backed by the storage layer
///
/// Registration and lazy credential minting are check-then-write
/// sequences; they serialize behind `write_lock` so the username index
/// stays unique and each identity ends up with exactly one credential.
pub struct IdentityService<S: Storage> {
    storage: Arc<S>,
    write_lock: Mutex<()>,
}

impl<S: Storage> IdentityService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    fn validate_registration(request: &NewIdentity) -> Result<()> {
        if request.username.trim().is_empty() {
            return Err(IdentityError::Validation("username is required".to_string()));
        }
        if request.password.is_empty() {
            return Err(IdentityError::Validation("password is required".to_string()));
        }
        Ok(())
    }

    async fn load_identity(&self, identity_id: Uuid) -> Result<Identity> {
        self.storage
            .get(CF_IDENTITIES, &identity_id)
            .await?
            .ok_or(IdentityError::NotFound(identity_id))
    }

    /// Return the identity's credential, minting and persisting one if absent
    async fn credential_for(&self, identity_id: Uuid) -> Result<Credential> {
        let _guard = self.write_lock.lock().await;
        if let Some(credential) = self.storage.get(CF_CREDENTIALS, &identity_id).await? {
            return Ok(credential);
        }

        let credential = Credential {
            token: password::mint_token(),
            identity_id,
            created_at: current_timestamp(),
        };

        let mut batch = Batch::new();
        batch.put(CF_CREDENTIALS, &identity_id, &credential)?;
        batch.put(CF_CREDENTIALS_BY_TOKEN, &credential.token, &identity_id)?;
        self.storage.write(batch).await?;

        info!(identity_id = %identity_id, "Credential minted");
        Ok(credential)
    }
}

#[async_trait]
impl<S: Storage + 'static> IdentityDirectory for IdentityService<S> {
    async fn register(&self, request: NewIdentity) -> Result<AuthGrant> {
        Self::validate_registration(&request)?;

        let username = request.username.trim().to_string();
        let _guard = self.write_lock.lock().await;
        if self
            .storage
            .exists(CF_IDENTITIES_BY_USERNAME, &username)
            .await?
        {
            return Err(IdentityError::UsernameTaken(username));
        }

        let salt = password::generate_salt();
        let password_hash = password::hash_password(&request.password, &salt)?;

        let identity = Identity {
            identity_id: Uuid::new_v4(),
            username: username.clone(),
            email: request.email,
            password_hash,
            created_at: current_timestamp(),
        };

        let credential = Credential {
            token: password::mint_token(),
            identity_id: identity.identity_id,
            created_at: identity.created_at,
        };

        // Identity, username index, and credential land atomically: a
        // failed registration persists nothing.
        let mut batch = Batch::new();
        batch.put(CF_IDENTITIES, &identity.identity_id, &identity)?;
        batch.put(CF_IDENTITIES_BY_USERNAME, &username, &identity.identity_id)?;
        batch.put(CF_CREDENTIALS, &identity.identity_id, &credential)?;
        batch.put(CF_CREDENTIALS_BY_TOKEN, &credential.token, &identity.identity_id)?;
        self.storage.write(batch).await?;

        info!(identity_id = %identity.identity_id, username = %identity.username, "Identity registered");

        Ok(AuthGrant {
            token: credential.token,
            identity,
        })
    }

    async fn login(&self, username: &str, password: &str) -> Result<AuthGrant> {
        // Unknown username and wrong password surface identically.
        let identity_id: Uuid = self
            .storage
            .get(CF_IDENTITIES_BY_USERNAME, &username.trim().to_string())
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        let identity = self.load_identity(identity_id).await?;

        if !password::verify_password(password, &identity.password_hash)? {
            return Err(IdentityError::InvalidCredentials);
        }

        let credential = self.credential_for(identity_id).await?;

        info!(identity_id = %identity_id, "Login succeeded");

        Ok(AuthGrant {
            token: credential.token,
            identity,
        })
    }

    async fn authenticate(&self, token: &str) -> Result<Identity> {
        let identity_id: Uuid = self
            .storage
            .get(CF_CREDENTIALS_BY_TOKEN, &token.to_string())
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        // A dangling token index is treated the same as an unknown token;
        // storage failures stay storage failures.
        match self.load_identity(identity_id).await {
            Err(IdentityError::NotFound(_)) => Err(IdentityError::InvalidCredentials),
            other => other,
        }
    }

    async fn get_identity(&self, identity_id: Uuid) -> Result<Identity> {
        self.load_identity(identity_id).await
    }
}
