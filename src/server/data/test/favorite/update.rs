use super::*;

/// Tests adding a character to an existing planet favorite.
///
/// Expected: Ok(Some) with planet kept and character set
#[tokio::test]
async fn sets_character_on_planet_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, planet, favorite) =
        factory::helpers::create_planet_favorite_with_dependencies(db).await?;
    let character = factory::create_character(db).await?;

    let updated = FavoriteRepository::new(db)
        .update(
            favorite.id,
            UpdateFavoriteParam {
                character_id: Some(Some(character.id)),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.planet_id, Some(planet.id));
    assert_eq!(updated.character_id, Some(character.id));

    Ok(())
}

/// Tests moving a favorite to another user.
///
/// Expected: Ok(Some) with the new owner
#[tokio::test]
async fn reassigns_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, favorite) = factory::helpers::create_planet_favorite_with_dependencies(db).await?;
    let new_owner = factory::create_user(db).await?;

    let updated = FavoriteRepository::new(db)
        .update(
            favorite.id,
            UpdateFavoriteParam {
                user_id: Some(new_owner.id),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.user_id, new_owner.id);

    Ok(())
}

/// Tests updating a favorite that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FavoriteRepository::new(db)
        .update(77, UpdateFavoriteParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests clearing the planet of a favorite.
///
/// Expected: Ok(Some) with planet_id None
#[tokio::test]
async fn clears_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, favorite) =
        factory::helpers::create_planet_favorite_with_dependencies(db).await?;

    let updated = FavoriteRepository::new(db)
        .update(
            favorite.id,
            UpdateFavoriteParam {
                planet_id: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.user_id, user.id);
    assert_eq!(updated.planet_id, None);
    assert_eq!(updated.character_id, None);

    Ok(())
}
