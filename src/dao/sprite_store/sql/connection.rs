use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use super::config::SqlConfig;
use super::error::{SqlDaoError, SqlResult};

/// Connect to the database described by `config` and bring the schema up
/// to date before handing the connection out.
pub async fn establish_connection(config: &SqlConfig) -> SqlResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let connection = Database::connect(options)
        .await
        .map_err(|source| SqlDaoError::Connect {
            url: config.url.clone(),
            source,
        })?;

    Migrator::up(&connection, None)
        .await
        .map_err(|source| SqlDaoError::Migrate { source })?;

    Ok(connection)
}
