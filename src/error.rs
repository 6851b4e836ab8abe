//! Error types for the credential store.

use sea_orm::{DbErr, SqlErr};

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything a credential operation can fail with.
///
/// Lookups never say *why* nothing matched: an unknown email, an unknown
/// user id, and a malformed, revoked or never-issued token all surface as
/// [`Error::NotFound`]. The only lookup failure reported separately is
/// [`Error::Expired`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No user, session or password reset matched the input.
    #[error("not found")]
    NotFound,

    /// A password-reset token matched but its deadline has passed.
    #[error("password reset token expired")]
    Expired,

    /// The database rejected or failed a query.
    #[error("{op}: {source}")]
    Database {
        /// The operation that was running, e.g. `"session create"`.
        op: &'static str,
        #[source]
        source: DbErr,
    },

    /// The operating system could not supply random bytes.
    #[error("entropy source unavailable: {0}")]
    Entropy(#[source] rand::Error),
}

impl Error {
    /// Returns a closure wrapping a [`DbErr`] with the given operation name,
    /// for use with `map_err`.
    pub(crate) fn db(op: &'static str) -> impl FnOnce(DbErr) -> Self {
        move |source| Self::Database { op, source }
    }

    /// Like [`Error::db`], but a foreign-key rejection of the `user_id`
    /// being written becomes [`Error::NotFound`].
    pub(crate) fn db_or_unknown_user(op: &'static str) -> impl FnOnce(DbErr) -> Self {
        move |source| match source.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => Self::NotFound,
            _ => Self::Database { op, source },
        }
    }

    /// A message that is safe to show to the end user, if there is one.
    ///
    /// Internal failures have no public message; callers should render a
    /// generic error page for them and log the `Display` output instead.
    pub fn public_message(&self) -> Option<&'static str> {
        match self {
            Self::NotFound => Some("That link or session is invalid. Please try again."),
            Self::Expired => {
                Some("That password reset link has expired. Please request a new one.")
            }
            Self::Database { .. } | Self::Entropy(_) => None,
        }
    }

    /// Whether this is [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn database_errors_keep_their_cause_but_stay_private() {
        let err = Error::db("session create")(DbErr::Custom("boom".into()));
        assert_eq!(err.to_string(), "session create: Custom Error: boom");
        assert!(err.source().is_some());
        assert_eq!(err.public_message(), None);
    }

    #[test]
    fn only_foreign_key_rejections_become_not_found() {
        let err = Error::db_or_unknown_user("session create")(DbErr::Custom("boom".into()));
        assert!(matches!(err, Error::Database { op: "session create", .. }));

        let err = Error::db_or_unknown_user("password reset create")(DbErr::RecordNotInserted);
        assert!(matches!(
            err,
            Error::Database {
                op: "password reset create",
                ..
            }
        ));
    }

    #[test]
    fn lookup_failures_have_public_messages() {
        assert!(Error::NotFound.public_message().is_some());
        assert!(Error::Expired.public_message().is_some());
        assert_ne!(
            Error::NotFound.public_message(),
            Error::Expired.public_message()
        );
        assert!(Error::NotFound.is_not_found());
        assert!(!Error::Expired.is_not_found());
    }
}
