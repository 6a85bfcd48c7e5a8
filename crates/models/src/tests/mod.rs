use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::connect_memory;

/// Entity creation helpers and store constraints
pub mod crud_tests;

/// Fresh migrated in-memory store per test
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = connect_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Migrations seed the status reference set in a fixed order
#[tokio::test]
async fn test_statuses_seeded() -> anyhow::Result<()> {
    use sea_orm::{EntityTrait, QueryOrder};
    use crate::status;

    let db = setup_test_db().await?;
    let rows = status::Entity::find().order_by_asc(status::Column::Id).all(&db).await?;
    let names: Vec<_> = rows.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Scheduled", "In Progress", "Completed", "Cancelled"]);
    assert_eq!(rows[0].id, status::DEFAULT_STATUS_ID);
    Ok(())
}

/// Migrating down and up again leaves a usable schema
#[tokio::test]
async fn test_migrations_reversible() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    migration::Migrator::down(&db, None).await?;
    migration::Migrator::up(&db, None).await?;
    let c = crate::client::create(&db, "Ana", "Lopez", None, "555-0101", None).await?;
    assert!(c.id > 0);
    Ok(())
}
