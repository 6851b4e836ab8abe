use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use seaorm_credential_store::entity::user;
use seaorm_credential_store::migration::{Migrator, MigratorTrait};

/// A fresh in-memory SQLite database with the credential schema applied.
pub async fn setup() -> DatabaseConnection {
    let conn = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&conn, None).await.unwrap();
    conn
}

/// An in-memory SQLite database with no tables at all.
pub async fn setup_without_schema() -> DatabaseConnection {
    Database::connect("sqlite::memory:").await.unwrap()
}

pub async fn insert_user(conn: &DatabaseConnection, email: &str) -> user::Model {
    user::ActiveModel {
        email: Set(email.to_string()),
        password_hash: Set("$argon2id$not-a-real-hash".to_string()),
        ..Default::default()
    }
    .insert(conn)
    .await
    .unwrap()
}
