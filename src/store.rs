use async_trait::async_trait;
use time::OffsetDateTime;

use crate::entity::user;
use crate::error::Result;
use crate::token::RawToken;

/// A user account as joined by the credential stores.
pub type User = user::Model;

/// What an issuing call did to the user's previous credential.
///
/// Every user holds at most one session and at most one pending password
/// reset. Issuing a new one for a user who already has one overwrites the
/// stored hash, so the earlier raw token stops verifying from that point
/// on. Callers get told which of the two happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The user had no credential of this kind before.
    Created,
    /// A previous credential existed and has been invalidated.
    Replaced,
}

/// A freshly issued login session.
///
/// `token` is the only copy of the raw secret and should go straight into
/// the client's cookie. Later lookups never see it again.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: i32,
    pub user_id: i32,
    pub token: RawToken,
    pub token_hash: String,
    pub transition: Transition,
}

/// A freshly issued password reset.
///
/// `token` is meant for the reset link sent to the user's email address.
#[derive(Clone, Debug)]
pub struct PasswordReset {
    pub id: i32,
    pub user_id: i32,
    pub token: RawToken,
    pub token_hash: String,
    pub expires_at: OffsetDateTime,
    pub transition: Transition,
}

/// Storage for login sessions keyed by hashed bearer token.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Signs `user_id` in, replacing any session the user already had.
    ///
    /// Fails with [`Error::NotFound`](crate::Error::NotFound) when no such
    /// user exists.
    async fn create(&self, user_id: i32) -> Result<Session>;

    /// Resolves a raw session token to its user.
    async fn user(&self, token: &str) -> Result<User>;

    /// Signs out the session owning `token`. Unknown tokens are ignored.
    async fn delete(&self, token: &str) -> Result<()>;
}

/// Storage for single-use, expiring password-reset tokens.
#[async_trait]
pub trait PasswordResetStore: Send + Sync {
    /// Issues a reset token for the account registered under `email`.
    ///
    /// The email comparison ignores case. Callers should show the same
    /// response whether or not this returns
    /// [`Error::NotFound`](crate::Error::NotFound).
    async fn create(&self, email: &str) -> Result<PasswordReset>;

    /// Redeems a reset token and returns its user.
    ///
    /// A token can be redeemed once. Expired tokens fail with
    /// [`Error::Expired`](crate::Error::Expired).
    async fn consume(&self, token: &str) -> Result<User>;
}

// Helper function to convert time::OffsetDateTime to sea_orm::prelude::DateTimeWithTimeZone (chrono)
pub(crate) fn convert_time_to_datetime(
    time: OffsetDateTime,
) -> sea_orm::prelude::DateTimeWithTimeZone {
    use chrono::{DateTime, Utc};

    // Every instant `time` can represent fits in chrono's range; saturate
    // rather than panic should that ever change.
    let datetime = DateTime::from_timestamp(time.unix_timestamp(), time.nanosecond())
        .unwrap_or(if time.unix_timestamp() < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        });

    datetime.fixed_offset()
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn converts_to_the_same_instant() {
        let converted = convert_time_to_datetime(datetime!(2024-03-01 12:30:45.25 +02:00));
        assert_eq!(converted.timestamp(), 1_709_289_045);
        assert_eq!(converted.timestamp_subsec_millis(), 250);
        assert_eq!(converted.offset().local_minus_utc(), 0);
    }
}
