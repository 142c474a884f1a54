pub mod credentials;
pub mod decoder;
pub mod errors;
pub mod role;

pub use credentials::{CredentialStore, PersistenceScope, TokenPair};
pub use decoder::{decode, is_expired, is_expired_at, Identity};
pub use errors::{DecodeError, ValidationError};
pub use role::Role;
