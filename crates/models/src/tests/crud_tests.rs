use crate::{appointment, appointment_service, client, errors::ModelError, service, status, vehicle};
use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};

use super::setup_test_db;

/// Test client create/read and validation
#[tokio::test]
async fn test_client_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let created = client::create(&db, " Jane ", "Doe", Some("jane@example.com".into()), "555-123-4567", Some("  ".into())).await?;
    assert_eq!(created.first_name, "Jane");
    assert_eq!(created.address, None);

    let found = client::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found, Some(created.clone()));

    let err = client::create(&db, "", "Doe", None, "555-123-4567", None).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));

    let err = client::create(&db, "Jane", "Doe", Some("not-an-email".into()), "555-123-4567", None).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    Ok(())
}

/// Vehicles belong to clients and cascade with them
#[tokio::test]
async fn test_vehicle_belongs_to_client() -> Result<()> {
    let db = setup_test_db().await?;
    let c = client::create(&db, "Sam", "Ortiz", None, "555-987-6543", None).await?;

    let v = vehicle::create(&db, c.id, 2012, "Honda", "Civic", Some("1hgcm82633a004352".into()), None).await?;
    assert_eq!(v.vin.as_deref(), Some("1HGCM82633A004352"));

    let owner = v.find_related(client::Entity).one(&db).await?;
    assert_eq!(owner.map(|o| o.id), Some(c.id));

    assert!(vehicle::create(&db, c.id, 1800, "Ford", "T", None, None).await.is_err());
    assert!(vehicle::create(&db, c.id, 2020, "Ford", "F-150", Some("short".into()), None).await.is_err());

    client::Entity::delete_by_id(c.id).exec(&db).await?;
    assert!(vehicle::Entity::find_by_id(v.id).one(&db).await?.is_none());
    Ok(())
}

/// Catalog names are unique and prices persist as cents
#[tokio::test]
async fn test_service_catalog_entry() -> Result<()> {
    let db = setup_test_db().await?;
    let s = service::create(&db, "Smog Check", Decimal::new(495, 1), None).await?;
    assert_eq!(s.price_cents, 4950);
    assert_eq!(s.price(), Decimal::new(4950, 2));

    let dup = service::create(&db, "Smog Check", Decimal::new(10, 0), None).await;
    assert!(matches!(dup, Err(ModelError::Db(_))));

    let neg = service::create(&db, "Refund", Decimal::new(-5, 0), None).await;
    assert!(matches!(neg, Err(ModelError::Validation(_))));
    Ok(())
}

/// Line items keep their own price after the catalog changes
#[tokio::test]
async fn test_line_item_price_snapshot() -> Result<()> {
    let db = setup_test_db().await?;
    let c = client::create(&db, "Lee", "Park", None, "555-000-1111", None).await?;
    let v = vehicle::create(&db, c.id, 2018, "Toyota", "Prius", None, None).await?;
    let s = service::create(&db, "Oil Change", Decimal::new(2999, 2), None).await?;

    let now = Utc::now();
    let a = appointment::ActiveModel {
        vehicle_id: Set(v.id),
        status_id: Set(status::DEFAULT_STATUS_ID),
        notes: Set(String::new()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    appointment_service::ActiveModel {
        appointment_id: Set(a.id),
        service_id: Set(s.id),
        price_cents: Set(s.price_cents),
        notes: Set(None),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let mut am: service::ActiveModel = s.clone().into();
    am.price_cents = Set(3999);
    am.update(&db).await?;

    let items = a.find_related(appointment_service::Entity).all(&db).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].price_cents, 2999);
    Ok(())
}
