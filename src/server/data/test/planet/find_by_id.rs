use super::*;

/// Tests finding a stored planet by id.
///
/// Expected: Ok(Some) with matching name
#[tokio::test]
async fn finds_existing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::planet::PlanetFactory::new(db)
        .name("Dagobah")
        .build()
        .await?;

    let repo = PlanetRepository::new(db);
    let found = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(found.name, "Dagobah");
    assert!(repo.exists(created.id).await?);

    Ok(())
}

/// Tests finding a planet that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);

    assert!(repo.find_by_id(404).await?.is_none());
    assert!(!repo.exists(404).await?);

    Ok(())
}
