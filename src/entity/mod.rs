//! Database entity models for seaorm-credential-store.
//!
//! This module contains the Sea-ORM entity definitions behind the session
//! and password-reset stores. The `user` entity belongs to the identity
//! service that owns accounts; the stores only join against it.

/// Session entity: one hashed session token per user.
pub mod session;

/// Password-reset entity: one hashed, expiring reset token per user.
pub mod password_reset;

/// User entity, read-only from the point of view of this crate.
pub mod user;
