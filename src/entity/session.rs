//! Session entity model for Sea-ORM database interaction.
//!
//! This module defines the database schema representation for login
//! sessions. Only the hash of a session token is stored; the raw token
//! lives in the client's cookie.

use sea_orm::entity::prelude::*;

/// Sea-ORM entity model representing a login session in the database.
///
/// # Database Schema
///
/// | Column     | Type                  | Description                          |
/// |------------|-----------------------|--------------------------------------|
/// | id         | INTEGER (Primary Key) | Session ID                           |
/// | user_id    | INTEGER (Unique, FK)  | Owning user, at most one row each    |
/// | token_hash | TEXT (Unique)         | URL-safe SHA-256 of the raw token    |
///
/// The unique `user_id` is what makes a new sign-in replace the previous
/// session: the store upserts on that column.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    /// Store-assigned identifier.
    #[sea_orm(primary_key)]
    pub id: i32,

    /// The user this session signs in.
    #[sea_orm(unique)]
    pub user_id: i32,

    /// Hash of the session token. The raw token is never stored.
    #[sea_orm(unique)]
    pub token_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
