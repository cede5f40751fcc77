use super::*;

/// Tests creating a planet with a description.
///
/// Expected: Ok with planet persisted
#[tokio::test]
async fn creates_planet_with_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = PlanetRepository::new(db)
        .create(CreatePlanetParam {
            name: "Tatooine".to_string(),
            description: Some("Desert world".to_string()),
        })
        .await?;

    assert!(planet.id > 0);
    assert_eq!(planet.name, "Tatooine");
    assert_eq!(planet.description.as_deref(), Some("Desert world"));

    let db_planet = entity::prelude::Planet::find_by_id(planet.id).one(db).await?;
    assert!(db_planet.is_some());

    Ok(())
}

/// Tests creating a planet without a description.
///
/// Expected: Ok with description None
#[tokio::test]
async fn creates_planet_without_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = PlanetRepository::new(db)
        .create(CreatePlanetParam {
            name: "Hoth".to_string(),
            description: None,
        })
        .await?;

    assert!(planet.description.is_none());

    Ok(())
}
