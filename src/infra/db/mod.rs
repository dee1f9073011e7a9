//! Database connection and schema management.

use sea_orm::{ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Owns the SeaORM connection and exposes migration controls.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect and bring the schema up to date.
    ///
    /// # Panics
    /// Panics when the connection or a migration fails; the server has
    /// nothing useful to do without a working schema.
    pub async fn connect(config: &Config) -> Self {
        let connection = SeaDatabase::connect(&config.database_url)
            .await
            .expect("Failed to connect to database");

        if let Err(e) = Migrator::up(&connection, None).await {
            tracing::error!("Migration failed: {}", e);
            panic!("Migration failed: {}", e);
        }

        tracing::info!("Database connected, schema current");

        Self { connection }
    }

    /// Connect without touching the schema (the migrate command decides).
    pub async fn connect_without_migrations(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Ok(Self { connection })
    }

    /// Wrap an existing connection (used by tests).
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply all pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Roll back the most recent migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// List every defined migration with its applied flag.
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::seaql_migrations;

        let applied: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        Ok(Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect())
    }

    /// Drop everything and re-run the full migration set.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Check connectivity with a trivial query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
