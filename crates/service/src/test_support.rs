#![cfg(test)]
use migration::MigratorTrait;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

/// Fresh migrated store per test; nothing is shared between tests.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn seed_client(db: &DatabaseConnection, first: &str, last: &str) -> Result<i32, anyhow::Error> {
    let phone = "555-0100";
    let email = Some(format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()));
    let c = models::client::create(db, first, last, email, phone, None).await?;
    Ok(c.id)
}

pub async fn seed_vehicle(db: &DatabaseConnection, client_id: i32) -> Result<i32, anyhow::Error> {
    let v = models::vehicle::create(db, client_id, 2012, "Honda", "Civic", None, Some("7ABC123".into())).await?;
    Ok(v.id)
}

pub async fn seed_service(db: &DatabaseConnection, name: &str, price: Decimal) -> Result<i32, anyhow::Error> {
    let s = models::service::create(db, name, price, None).await?;
    Ok(s.id)
}
