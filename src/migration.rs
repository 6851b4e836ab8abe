//! Schema migrations for the credential tables.
//!
//! `users` is created only if it does not exist yet, so the migrator can run
//! against a database whose identity service already owns that table.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_table;
mod m20240101_000002_create_sessions_table;
mod m20240101_000003_create_password_resets_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Override the name of migration table to avoid conflicts
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("credential_store_seaorm_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_sessions_table::Migration),
            Box::new(m20240101_000003_create_password_resets_table::Migration),
        ]
    }
}
