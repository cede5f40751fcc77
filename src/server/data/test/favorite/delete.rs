use super::*;

/// Tests deleting a favorite by id.
///
/// Verifies that the favorite is removed while the user and planet it referenced remain.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deletes_favorite_and_keeps_references() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, favorite) =
        factory::helpers::create_planet_favorite_with_dependencies(db).await?;

    let repo = FavoriteRepository::new(db);
    assert!(repo.delete(favorite.id).await?);
    assert!(repo.find_by_id(favorite.id).await?.is_none());

    assert!(entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Planet::find_by_id(planet.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a favorite that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!FavoriteRepository::new(db).delete(5).await?);

    Ok(())
}
