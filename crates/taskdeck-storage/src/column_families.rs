//! RocksDB column family definitions.

/// Identity records: identity_id → Identity
pub const CF_IDENTITIES: &str = "identities";

/// Username uniqueness index: username → identity_id
pub const CF_IDENTITIES_BY_USERNAME: &str = "identities_by_username";

/// Bearer credentials: identity_id → Credential (one active per identity)
pub const CF_CREDENTIALS: &str = "credentials";

/// Credential reverse index: token → identity_id
pub const CF_CREDENTIALS_BY_TOKEN: &str = "credentials_by_token";

/// Task records: task_id → Task
pub const CF_TASKS: &str = "tasks";

/// Tasks by owner index: (owner_id, task_id) → task_id
pub const CF_TASKS_BY_OWNER: &str = "tasks_by_owner";

/// All column families that must exist in the database
pub fn all_column_families() -> Vec<&'static str> {
    vec![
        CF_IDENTITIES,
        CF_IDENTITIES_BY_USERNAME,
        CF_CREDENTIALS,
        CF_CREDENTIALS_BY_TOKEN,
        CF_TASKS,
        CF_TASKS_BY_OWNER,
    ]
}
