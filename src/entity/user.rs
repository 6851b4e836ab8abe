//! User entity model.
//!
//! Accounts are created and updated by the application's identity service.
//! The credential stores only read this table, to resolve a token or an
//! email address to the owning user.

use sea_orm::entity::prelude::*;

/// Sea-ORM entity model representing a user account.
///
/// | Column        | Type               | Description                        |
/// |---------------|--------------------|------------------------------------|
/// | id            | INTEGER (PK)       | User ID                            |
/// | email         | TEXT (Unique)      | Unique ignoring case               |
/// | password_hash | TEXT               | Password hash, opaque to this crate|
#[derive(Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub email: String,

    pub password_hash: String,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::session::Entity")]
    Session,
    #[sea_orm(has_many = "super::password_reset::Entity")]
    PasswordReset,
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl Related<super::password_reset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PasswordReset.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
