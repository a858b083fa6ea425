//! # carelink-auth
//!
//! Credential handling: Argon2id password hashing plus the registration
//! and login flows over an `IUserStore`. Passwords exist in memory only as
//! long as hashing or verification needs them; only PHC-format hashes are
//! ever stored.

mod accounts;
mod hasher;

pub use accounts::{authenticate, register_user};
pub use hasher::CredentialHasher;
