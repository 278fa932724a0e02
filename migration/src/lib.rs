//! Schema migrations for the sprite database.

pub use sea_orm_migration::prelude::*;

mod m20250712_000001_baseline_schema;

/// Runner collecting every migration shipped with the binary.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250712_000001_baseline_schema::Migration)]
    }
}
