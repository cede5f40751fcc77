use super::*;

/// Tests deleting an existing planet.
///
/// Expected: Ok(true) with planet removed
#[tokio::test]
async fn deletes_planet_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    assert!(repo.delete(planet.id).await?);
    assert!(repo.find_by_id(planet.id).await?.is_none());

    Ok(())
}

/// Tests deleting a planet that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!PlanetRepository::new(db).delete(3).await?);

    Ok(())
}
