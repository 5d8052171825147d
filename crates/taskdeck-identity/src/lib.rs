//! # taskdeck-identity
//!
//! Identity subsystem for taskdeck:
//! - Account registration with Argon2id password hashing
//! - Opaque bearer credential issuance (get-or-create)
//! - Token authentication for the HTTP layer
//!
//! Raw passwords exist only transiently inside `register` and `login`;
//! storage only ever sees the PHC hash string.

#![warn(clippy::all)]

pub mod errors;
pub mod password;
pub mod service;
pub mod traits;
pub mod types;


pub use errors::{IdentityError, Result};
pub use service::IdentityService;
pub use traits::IdentityDirectory;
pub use types::{current_timestamp, AuthGrant, Credential, Identity, NewIdentity};
