use super::*;

/// Tests creating a favorite that points at a planet.
///
/// Expected: Ok with user and planet set and character None
#[tokio::test]
async fn creates_planet_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let favorite = FavoriteRepository::new(db)
        .create(CreateFavoriteParam {
            user_id: user.id,
            planet_id: Some(planet.id),
            character_id: None,
        })
        .await?;

    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.planet_id, Some(planet.id));
    assert!(favorite.character_id.is_none());

    let db_favorite = entity::prelude::Favorite::find_by_id(favorite.id)
        .one(db)
        .await?;
    assert!(db_favorite.is_some());

    Ok(())
}

/// Tests creating a favorite that points at both a planet and a character.
///
/// Expected: Ok with both targets set
#[tokio::test]
async fn creates_favorite_with_both_targets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let character = factory::create_character(db).await?;

    let favorite = FavoriteRepository::new(db)
        .create(CreateFavoriteParam {
            user_id: user.id,
            planet_id: Some(planet.id),
            character_id: Some(character.id),
        })
        .await?;

    assert_eq!(favorite.planet_id, Some(planet.id));
    assert_eq!(favorite.character_id, Some(character.id));

    Ok(())
}

/// Tests that identical favorites may be stored more than once.
///
/// Expected: Ok with two rows with distinct ids
#[tokio::test]
async fn allows_duplicate_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = FavoriteRepository::new(db);
    let param = CreateFavoriteParam {
        user_id: user.id,
        planet_id: Some(planet.id),
        character_id: None,
    };
    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
