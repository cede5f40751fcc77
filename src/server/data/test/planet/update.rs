use super::*;

/// Tests updating only the description of a planet.
///
/// Expected: Ok(Some) with name kept and description replaced
#[tokio::test]
async fn updates_description_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::planet::PlanetFactory::new(db)
        .name("Alderaan")
        .description("Peaceful")
        .build()
        .await?;

    let updated = PlanetRepository::new(db)
        .update(
            created.id,
            UpdatePlanetParam {
                name: None,
                description: Some(Some("Destroyed".to_string())),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Alderaan");
    assert_eq!(updated.description.as_deref(), Some("Destroyed"));

    Ok(())
}

/// Tests applying an empty patch to a planet.
///
/// Expected: Ok(Some) with the planet unchanged
#[tokio::test]
async fn empty_patch_leaves_planet_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_planet(db).await?;

    let result = PlanetRepository::new(db)
        .update(created.id, UpdatePlanetParam::default())
        .await?
        .unwrap();

    assert_eq!(result.name, created.name);
    assert_eq!(result.description, created.description);

    Ok(())
}

/// Tests updating a planet that does not exist.
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

    let result = PlanetRepository::new(db)
        .update(
            12,
            UpdatePlanetParam {
                name: Some("Kamino".to_string()),
                description: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
