//! Password-reset entity model.

use sea_orm::entity::prelude::*;

/// Sea-ORM entity model representing a pending password reset.
///
/// # Database Schema
///
/// | Column     | Type                  | Description                          |
/// |------------|-----------------------|--------------------------------------|
/// | id         | INTEGER (Primary Key) | Reset ID                             |
/// | user_id    | INTEGER (Unique, FK)  | Owning user, at most one row each    |
/// | token_hash | TEXT (Unique)         | URL-safe SHA-256 of the raw token    |
/// | expires_at | TIMESTAMPTZ           | Deadline after which it is rejected  |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "password_resets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub user_id: i32,

    #[sea_orm(unique)]
    pub token_hash: String,

    /// A row past this instant no longer authorises a reset, even while it
    /// is still physically present.
    pub expires_at: DateTimeWithTimeZone,
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
